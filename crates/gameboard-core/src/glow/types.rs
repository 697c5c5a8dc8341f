use std::time::Duration;

/// Default interval between glow ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Default alpha change per tick.
pub const DEFAULT_STEP: f32 = 0.05;

/// Where a glow ramp is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowPhase {
    /// Alpha is 0 and the timer is stopped.
    Idle,
    /// Timer running, pointer over the slot.
    RampingUp,
    /// Timer running, pointer gone.
    RampingDown,
}

/// Result of a single timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep the timer running.
    Continue,
    /// The ramp finished decaying; stop the timer.
    Stopped,
}

/// Timing parameters for a glow ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowSettings {
    pub tick_interval: Duration,
    pub step: f32,
}

impl Default for GlowSettings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            step: DEFAULT_STEP,
        }
    }
}

impl GlowSettings {
    /// Number of ticks a full ramp from 0 to 1 takes.
    pub fn ticks_to_full(&self) -> u32 {
        (1.0 / self.step).ceil() as u32
    }
}
