use crate::glow::types::{GlowPhase, GlowSettings, TickOutcome};

/// Below this, a decaying alpha counts as 0. Absorbs f32 drift from
/// repeated subtraction of the step.
const ALPHA_EPSILON: f32 = 1e-4;

/// Linear opacity ramp for a slot's hover glow.
///
/// The ramp does not own a timer. `pointer_enter` reports when the caller has
/// to start one, and `tick` reports when the caller must stop it.
#[derive(Clone, Debug)]
pub struct GlowRamp {
    hovered: bool,
    alpha: f32,
    running: bool,
    settings: GlowSettings,
}

impl Default for GlowRamp {
    fn default() -> Self {
        Self::new(GlowSettings::default())
    }
}

impl GlowRamp {
    pub fn new(settings: GlowSettings) -> Self {
        Self {
            hovered: false,
            alpha: 0.0,
            running: false,
            settings,
        }
    }

    /// Pointer entered the slot.
    ///
    /// Returns `true` when the timer was stopped and must now be started.
    pub fn pointer_enter(&mut self) -> bool {
        self.hovered = true;
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Pointer left the slot. The timer keeps running until alpha decays.
    pub fn pointer_exit(&mut self) {
        self.hovered = false;
    }

    /// Advance the ramp by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }

        if self.hovered {
            self.alpha = (self.alpha + self.settings.step).min(1.0);
            return TickOutcome::Continue;
        }

        self.alpha -= self.settings.step;
        if self.alpha <= ALPHA_EPSILON {
            self.alpha = 0.0;
            self.running = false;
            return TickOutcome::Stopped;
        }
        TickOutcome::Continue
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> &GlowSettings {
        &self.settings
    }

    pub fn phase(&self) -> GlowPhase {
        match (self.running, self.hovered) {
            (false, _) => GlowPhase::Idle,
            (true, true) => GlowPhase::RampingUp,
            (true, false) => GlowPhase::RampingDown,
        }
    }
}
