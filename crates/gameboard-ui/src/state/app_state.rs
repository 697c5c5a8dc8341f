use std::time::Duration;

use gameboard_core::{BoardConfig, BoardLayout, BoardState, SlotId, TickOutcome};

use crate::state::dialog::DialogState;

/// State behind the board window.
pub struct AppState {
    board: BoardState,
    layout: BoardLayout,
    dialog: DialogState,
    tick_interval: Duration,
}

impl AppState {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            board: BoardState::from_config(config),
            layout: BoardLayout::default(),
            dialog: DialogState::None,
            tick_interval: config.glow.tick_interval(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Interval between glow timer ticks.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Apply a hover change. Returns `true` when a glow timer must be spawned.
    pub fn set_hovered(&mut self, id: SlotId, hovered: bool) -> bool {
        if hovered {
            self.board.pointer_enter(id)
        } else {
            self.board.pointer_exit(id);
            false
        }
    }

    pub fn tick(&mut self, id: SlotId) -> TickOutcome {
        self.board.tick(id)
    }

    /// Open the message dialog for a clicked slot.
    ///
    /// Clicks are ignored while a dialog is already open.
    pub fn open_slot_message(&mut self, id: SlotId) -> bool {
        if self.dialog.is_open() {
            return false;
        }
        let message = self.board.click(id);
        self.dialog = DialogState::SlotMessage { slot: id, message };
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameboard_core::{FieldIndex, Seat, SlotKind};

    #[test]
    fn test_click_opens_message_dialog() {
        let mut state = AppState::new(&BoardConfig::default());
        let deck = SlotId::new(Seat::Top, SlotKind::Deck);

        assert!(state.open_slot_message(deck));
        assert_eq!(
            state.dialog(),
            &DialogState::SlotMessage {
                slot: deck,
                message: "You clicked on: Deck".to_string()
            }
        );

        state.close_dialog();
        assert!(!state.dialog().is_open());
    }

    #[test]
    fn test_click_while_dialog_open_is_ignored() {
        let mut state = AppState::new(&BoardConfig::default());
        let field = SlotId::new(Seat::Bottom, SlotKind::Field(FieldIndex::ALL[0]));
        let util = SlotId::new(Seat::Bottom, SlotKind::Util);

        assert!(state.open_slot_message(field));
        assert!(!state.open_slot_message(util));
        assert_eq!(state.dialog().message(), Some("You clicked on: Field Slot"));
    }

    #[test]
    fn test_hover_spawns_timer_once() {
        let mut state = AppState::new(&BoardConfig::default());
        let id = SlotId::new(Seat::Top, SlotKind::Util);

        assert!(state.set_hovered(id, true));
        assert!(!state.set_hovered(id, false));
        assert!(!state.set_hovered(id, true));
        assert_eq!(state.tick(id), TickOutcome::Continue);
        assert_eq!(state.tick_interval(), Duration::from_millis(20));
    }
}
