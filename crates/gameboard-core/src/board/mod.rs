//! Board state for both players.
//!
//! `BoardState` owns every slot and both health counters. The UI addresses
//! slots by [`SlotId`] and forwards pointer events and timer ticks here.

use crate::config::BoardConfig;
use crate::glow::{GlowSettings, TickOutcome};
use crate::health::HealthCounter;
use crate::layout::{PlayerAreaLayout, Seat};
use crate::slot::{CardSlot, FIELD_SLOT_COUNT, FieldIndex, SlotId, SlotKind};

/// One player's health and card slots.
#[derive(Clone, Debug)]
pub struct PlayerArea {
    seat: Seat,
    layout: PlayerAreaLayout,
    health: HealthCounter,
    deck: CardSlot,
    discard: CardSlot,
    util: CardSlot,
    fields: [CardSlot; FIELD_SLOT_COUNT as usize],
}

impl PlayerArea {
    pub fn new(seat: Seat, settings: GlowSettings, starting_health: i32) -> Self {
        let layout = PlayerAreaLayout::for_seat(seat);
        let border = layout.border_color;
        let slot = |kind| CardSlot::new(SlotId::new(seat, kind), border, settings);

        Self {
            seat,
            health: HealthCounter::new(starting_health),
            deck: slot(SlotKind::Deck),
            discard: slot(SlotKind::Discard),
            util: slot(SlotKind::Util),
            fields: FieldIndex::ALL.map(|index| slot(SlotKind::Field(index))),
            layout,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn layout(&self) -> &PlayerAreaLayout {
        &self.layout
    }

    pub fn health(&self) -> &HealthCounter {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut HealthCounter {
        &mut self.health
    }

    pub fn slot(&self, kind: SlotKind) -> &CardSlot {
        match kind {
            SlotKind::Deck => &self.deck,
            SlotKind::Discard => &self.discard,
            SlotKind::Util => &self.util,
            SlotKind::Field(index) => &self.fields[index.offset()],
        }
    }

    pub fn slot_mut(&mut self, kind: SlotKind) -> &mut CardSlot {
        match kind {
            SlotKind::Deck => &mut self.deck,
            SlotKind::Discard => &mut self.discard,
            SlotKind::Util => &mut self.util,
            SlotKind::Field(index) => &mut self.fields[index.offset()],
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = &CardSlot> {
        [&self.deck, &self.discard, &self.util]
            .into_iter()
            .chain(self.fields.iter())
    }
}

/// The whole board: top and bottom player areas.
#[derive(Clone, Debug)]
pub struct BoardState {
    top: PlayerArea,
    bottom: PlayerArea,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(GlowSettings::default(), crate::health::DEFAULT_HEALTH)
    }
}

impl BoardState {
    pub fn new(settings: GlowSettings, starting_health: i32) -> Self {
        Self {
            top: PlayerArea::new(Seat::Top, settings, starting_health),
            bottom: PlayerArea::new(Seat::Bottom, settings, starting_health),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.glow_settings(), config.health.starting_value())
    }

    pub fn player(&self, seat: Seat) -> &PlayerArea {
        match seat {
            Seat::Top => &self.top,
            Seat::Bottom => &self.bottom,
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerArea {
        match seat {
            Seat::Top => &mut self.top,
            Seat::Bottom => &mut self.bottom,
        }
    }

    pub fn slot(&self, id: SlotId) -> &CardSlot {
        self.player(id.seat).slot(id.kind)
    }

    pub fn slot_mut(&mut self, id: SlotId) -> &mut CardSlot {
        self.player_mut(id.seat).slot_mut(id.kind)
    }

    /// Pointer entered a slot. Returns `true` when a glow timer must be started.
    pub fn pointer_enter(&mut self, id: SlotId) -> bool {
        let start_timer = self.slot_mut(id).pointer_enter();
        tracing::debug!(event = "core.slot.pointer_enter", slot = %id, start_timer);
        start_timer
    }

    pub fn pointer_exit(&mut self, id: SlotId) {
        tracing::debug!(event = "core.slot.pointer_exit", slot = %id);
        self.slot_mut(id).pointer_exit();
    }

    pub fn tick(&mut self, id: SlotId) -> TickOutcome {
        let outcome = self.slot_mut(id).tick();
        if outcome == TickOutcome::Stopped {
            tracing::debug!(event = "core.slot.glow_stopped", slot = %id);
        }
        outcome
    }

    /// Message to show for a click on the slot.
    pub fn click(&self, id: SlotId) -> String {
        let message = self.slot(id).click_message();
        tracing::info!(event = "core.slot.clicked", slot = %id, message = %message);
        message
    }

    /// Returns `true` when the health circle must be redrawn.
    pub fn set_health(&mut self, seat: Seat, value: i32) -> bool {
        self.player_mut(seat).health_mut().set_health(value)
    }

    /// Slots whose glow timer is currently running.
    pub fn animating(&self) -> Vec<SlotId> {
        Seat::ALL
            .into_iter()
            .flat_map(|seat| self.player(seat).slots())
            .filter(|slot| slot.glow().is_running())
            .map(CardSlot::id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::config::HealthConfig;

    #[test]
    fn test_board_has_nine_slots_per_player() {
        let board = BoardState::default();
        for seat in Seat::ALL {
            assert_eq!(board.player(seat).slots().count(), 9);
        }
    }

    #[test]
    fn test_slot_border_colors_follow_seat() {
        let board = BoardState::default();
        let top = SlotId::new(Seat::Top, SlotKind::Deck);
        let bottom = SlotId::new(Seat::Bottom, SlotKind::Deck);
        assert_eq!(board.slot(top).border_color(), colors::TOP_BORDER);
        assert_eq!(board.slot(bottom).border_color(), colors::BOTTOM_BORDER);
    }

    #[test]
    fn test_slots_animate_independently() {
        let mut board = BoardState::default();
        let deck = SlotId::new(Seat::Top, SlotKind::Deck);
        let util = SlotId::new(Seat::Bottom, SlotKind::Util);

        assert!(board.pointer_enter(deck));
        board.tick(deck);
        board.tick(deck);

        assert_eq!(board.slot(util).glow().alpha(), 0.0);
        assert_eq!(board.animating(), vec![deck]);

        assert!(board.pointer_enter(util));
        assert_eq!(board.animating().len(), 2);
    }

    #[test]
    fn test_click_messages() {
        let board = BoardState::default();
        assert_eq!(
            board.click(SlotId::new(Seat::Bottom, SlotKind::Discard)),
            "You clicked on: Discard"
        );
        let field = SlotKind::Field(FieldIndex::new(2).unwrap());
        assert_eq!(
            board.click(SlotId::new(Seat::Top, field)),
            "You clicked on: Field Slot"
        );
    }

    #[test]
    fn test_set_health_per_seat() {
        let mut board = BoardState::default();
        assert!(board.set_health(Seat::Top, 12));
        assert_eq!(board.player(Seat::Top).health().value(), 12);
        assert_eq!(board.player(Seat::Bottom).health().value(), 50);
    }

    #[test]
    fn test_from_config_uses_starting_health() {
        let config = BoardConfig {
            health: HealthConfig {
                starting_value: Some(20),
            },
            ..Default::default()
        };
        let board = BoardState::from_config(&config);
        assert_eq!(board.player(Seat::Bottom).health().display_text(), "20");
    }
}
