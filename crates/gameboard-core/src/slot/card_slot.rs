use crate::colors::Rgb;
use crate::glow::{GlowRamp, GlowSettings, TickOutcome};
use crate::slot::types::SlotId;

/// Shown in click messages for slots without a label.
const UNLABELED_SLOT_NAME: &str = "Field Slot";

/// Preferred slot size in pixels.
pub const SLOT_WIDTH: f32 = 100.0;
pub const SLOT_HEIGHT: f32 = 150.0;

/// Corner arc diameter of the slot outline.
pub const SLOT_CORNER_ARC: f32 = 25.0;

/// Label font size.
pub const SLOT_LABEL_SIZE: f32 = 14.0;

/// A card location on the board with its hover glow.
#[derive(Clone, Debug)]
pub struct CardSlot {
    id: SlotId,
    border_color: Rgb,
    glow: GlowRamp,
}

impl CardSlot {
    pub fn new(id: SlotId, border_color: Rgb, settings: GlowSettings) -> Self {
        Self {
            id,
            border_color,
            glow: GlowRamp::new(settings),
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.id.kind.label()
    }

    pub fn border_color(&self) -> Rgb {
        self.border_color
    }

    /// Color of the glow strokes.
    pub fn glow_color(&self) -> Rgb {
        self.border_color.brighter()
    }

    pub fn glow(&self) -> &GlowRamp {
        &self.glow
    }

    /// Message shown when the slot is clicked.
    pub fn click_message(&self) -> String {
        let name = match self.label() {
            "" => UNLABELED_SLOT_NAME,
            label => label,
        };
        format!("You clicked on: {name}")
    }

    /// Returns `true` when the caller must start the glow timer.
    pub fn pointer_enter(&mut self) -> bool {
        self.glow.pointer_enter()
    }

    pub fn pointer_exit(&mut self) {
        self.glow.pointer_exit();
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.glow.tick()
    }
}
