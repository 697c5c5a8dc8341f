use gameboard_core::SlotId;

/// Dialog state for the board window.
///
/// Only one dialog can be open at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    /// No dialog is open.
    #[default]
    None,
    /// Feedback for a clicked slot.
    SlotMessage { slot: SlotId, message: String },
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::None)
    }

    /// Slot the open dialog reports on.
    pub fn slot(&self) -> Option<SlotId> {
        match self {
            DialogState::None => None,
            DialogState::SlotMessage { slot, .. } => Some(*slot),
        }
    }

    /// Text shown in the dialog body, if open.
    pub fn message(&self) -> Option<&str> {
        match self {
            DialogState::None => None,
            DialogState::SlotMessage { message, .. } => Some(message),
        }
    }
}
