//! Card slots: labeled placeholders for deck, discard, utility and field cards.

pub mod card_slot;
pub mod types;

pub use card_slot::{CardSlot, SLOT_CORNER_ARC, SLOT_HEIGHT, SLOT_LABEL_SIZE, SLOT_WIDTH};
pub use types::{FIELD_SLOT_COUNT, FieldIndex, SlotId, SlotKind};
