//! Board composition.
//!
//! The board stacks three panels: top player, an empty center play area, and
//! bottom player. The two player areas mirror each other so that each
//! player's health faces the window edge and deck/discard swap sides.

use std::fmt;

use crate::colors::{self, Rgb};
use crate::slot::{FieldIndex, SlotKind};

/// Horizontal gap between the side slots and the field row.
pub const CARDS_ROW_GAP: f32 = 30.0;

/// Gap between slots inside the field row.
pub const FIELD_SLOT_GAP: f32 = 10.0;

/// Vertical inset above and below the health circle.
pub const HEALTH_ROW_INSET: f32 = 10.0;

/// Padding between the window edge and the board.
pub const BOARD_PADDING: f32 = 20.0;

/// Which side of the board a player sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    Top,
    Bottom,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Top, Seat::Bottom];

    pub fn key(self) -> &'static str {
        match self {
            Seat::Top => "top",
            Seat::Bottom => "bottom",
        }
    }

    /// Outline color of this seat's slots.
    pub fn border_color(self) -> Rgb {
        match self {
            Seat::Top => colors::TOP_BORDER,
            Seat::Bottom => colors::BOTTOM_BORDER,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Top => f.write_str("Top"),
            Seat::Bottom => f.write_str("Bottom"),
        }
    }
}

/// A row in a player area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    Health,
    Cards,
}

/// Arrangement of one player's health circle and card slots.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerAreaLayout {
    pub seat: Seat,
    pub border_color: Rgb,
    /// Rows from the top of the panel down.
    pub rows: [Row; 2],
    /// Slot left of the field row.
    pub west: SlotKind,
    /// Slot right of the field row.
    pub east: SlotKind,
    /// Field row slots, left to right.
    pub field_row: Vec<SlotKind>,
}

impl PlayerAreaLayout {
    pub fn for_seat(seat: Seat) -> Self {
        let (rows, west, east) = match seat {
            Seat::Top => ([Row::Health, Row::Cards], SlotKind::Deck, SlotKind::Discard),
            Seat::Bottom => ([Row::Cards, Row::Health], SlotKind::Discard, SlotKind::Deck),
        };

        Self {
            seat,
            border_color: seat.border_color(),
            rows,
            west,
            east,
            field_row: field_row(),
        }
    }

    /// Every slot in the cards row, left to right.
    pub fn cards_row(&self) -> Vec<SlotKind> {
        std::iter::once(self.west)
            .chain(self.field_row.iter().copied())
            .chain(std::iter::once(self.east))
            .collect()
    }
}

/// Fields 1-3, the utility slot, then fields 4-6.
fn field_row() -> Vec<SlotKind> {
    let fields: Vec<SlotKind> = FieldIndex::all().map(SlotKind::Field).collect();
    let (left, right) = fields.split_at(fields.len() / 2);

    left.iter()
        .copied()
        .chain(std::iter::once(SlotKind::Util))
        .chain(right.iter().copied())
        .collect()
}

/// A stacked panel of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Player(Seat),
    /// Empty center area, takes the remaining height.
    PlayArea,
}

/// Whole-window composition.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout {
    pub background: Rgb,
    pub padding: f32,
    pub panels: [Panel; 3],
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            background: colors::BOARD_BACKGROUND,
            padding: BOARD_PADDING,
            panels: [
                Panel::Player(Seat::Top),
                Panel::PlayArea,
                Panel::Player(Seat::Bottom),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(n: u8) -> SlotKind {
        SlotKind::Field(FieldIndex::new(n).unwrap())
    }

    #[test]
    fn test_top_seat_layout() {
        let layout = PlayerAreaLayout::for_seat(Seat::Top);
        assert_eq!(layout.rows, [Row::Health, Row::Cards]);
        assert_eq!(layout.west, SlotKind::Deck);
        assert_eq!(layout.east, SlotKind::Discard);
        assert_eq!(layout.border_color, colors::TOP_BORDER);
    }

    #[test]
    fn test_bottom_seat_is_mirrored() {
        let top = PlayerAreaLayout::for_seat(Seat::Top);
        let bottom = PlayerAreaLayout::for_seat(Seat::Bottom);

        assert_eq!(bottom.west, top.east);
        assert_eq!(bottom.east, top.west);
        assert_eq!(bottom.rows, [Row::Cards, Row::Health]);
        assert_eq!(bottom.border_color, colors::BOTTOM_BORDER);
        // Field row is not mirrored
        assert_eq!(bottom.field_row, top.field_row);
    }

    #[test]
    fn test_field_row_order() {
        let layout = PlayerAreaLayout::for_seat(Seat::Top);
        assert_eq!(
            layout.field_row,
            vec![
                field(1),
                field(2),
                field(3),
                SlotKind::Util,
                field(4),
                field(5),
                field(6)
            ]
        );
    }

    #[test]
    fn test_cards_row_holds_every_slot_once() {
        for seat in Seat::ALL {
            let mut row = PlayerAreaLayout::for_seat(seat).cards_row();
            row.sort();
            let mut all: Vec<_> = SlotKind::all().collect();
            all.sort();
            assert_eq!(row, all);
        }
    }

    #[test]
    fn test_board_panels() {
        let board = BoardLayout::default();
        assert_eq!(
            board.panels,
            [
                Panel::Player(Seat::Top),
                Panel::PlayArea,
                Panel::Player(Seat::Bottom)
            ]
        );
        assert_eq!(board.background, colors::BOARD_BACKGROUND);
        assert_eq!(board.padding, 20.0);
    }
}
