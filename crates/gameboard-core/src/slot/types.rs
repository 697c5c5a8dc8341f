use std::fmt;

use crate::layout::Seat;

/// Number of field slots per player.
pub const FIELD_SLOT_COUNT: u8 = 6;

/// 1-based position of a field slot, always within `1..=FIELD_SLOT_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldIndex(u8);

impl FieldIndex {
    /// All field indices in order.
    pub const ALL: [FieldIndex; FIELD_SLOT_COUNT as usize] = [
        FieldIndex(1),
        FieldIndex(2),
        FieldIndex(3),
        FieldIndex(4),
        FieldIndex(5),
        FieldIndex(6),
    ];

    /// Build a field index, rejecting positions outside `1..=6`.
    pub fn new(position: u8) -> Option<Self> {
        (1..=FIELD_SLOT_COUNT)
            .contains(&position)
            .then_some(Self(position))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 0-based offset into a per-player field array.
    pub fn offset(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = FieldIndex> {
        Self::ALL.into_iter()
    }
}

/// What a slot on the board stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKind {
    Deck,
    Discard,
    Util,
    Field(FieldIndex),
}

impl SlotKind {
    /// Text drawn inside the slot. Field slots are unlabeled.
    pub fn label(self) -> &'static str {
        match self {
            SlotKind::Deck => "Deck",
            SlotKind::Discard => "Discard",
            SlotKind::Util => "Util",
            SlotKind::Field(_) => "",
        }
    }

    /// Every kind a player area holds.
    pub fn all() -> impl Iterator<Item = SlotKind> {
        [SlotKind::Deck, SlotKind::Discard, SlotKind::Util]
            .into_iter()
            .chain(FieldIndex::all().map(SlotKind::Field))
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Field(index) => write!(f, "Field {}", index.get()),
            other => f.write_str(other.label()),
        }
    }
}

/// Unique address of a slot on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    pub seat: Seat,
    pub kind: SlotKind,
}

impl SlotId {
    pub fn new(seat: Seat, kind: SlotKind) -> Self {
        Self { seat, kind }
    }

    /// Stable string key, usable as a UI element id.
    pub fn key(&self) -> String {
        let kind = match self.kind {
            SlotKind::Deck => "deck".to_string(),
            SlotKind::Discard => "discard".to_string(),
            SlotKind::Util => "util".to_string(),
            SlotKind::Field(index) => format!("field-{}", index.get()),
        };
        format!("{}-{}", self.seat.key(), kind)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.seat, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_bounds() {
        assert!(FieldIndex::new(0).is_none());
        assert_eq!(FieldIndex::new(1).map(FieldIndex::get), Some(1));
        assert_eq!(FieldIndex::new(6).map(FieldIndex::get), Some(6));
        assert!(FieldIndex::new(7).is_none());
        assert_eq!(FieldIndex::all().count(), 6);
        assert_eq!(FieldIndex::ALL[0].offset(), 0);
        assert_eq!(FieldIndex::new(6).unwrap().offset(), 5);
    }

    #[test]
    fn test_slot_kind_labels() {
        assert_eq!(SlotKind::Deck.label(), "Deck");
        assert_eq!(SlotKind::Discard.label(), "Discard");
        assert_eq!(SlotKind::Util.label(), "Util");
        let field = SlotKind::Field(FieldIndex::new(3).unwrap());
        assert_eq!(field.label(), "");
        assert_eq!(field.to_string(), "Field 3");
    }

    #[test]
    fn test_all_kinds_are_unique() {
        let kinds: Vec<_> = SlotKind::all().collect();
        assert_eq!(kinds.len(), 9);
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn test_slot_id_key() {
        let id = SlotId::new(Seat::Bottom, SlotKind::Field(FieldIndex::new(4).unwrap()));
        assert_eq!(id.key(), "bottom-field-4");
        assert_eq!(SlotId::new(Seat::Top, SlotKind::Deck).key(), "top-deck");
        assert_eq!(id.to_string(), "Bottom/Field 4");
    }
}
