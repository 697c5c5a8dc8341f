//! View components for gameboard-ui.
//!
//! - `board_view` - Root view: stacks the player areas and owns glow timers
//! - `player_area` - One player's health row and cards row
//! - `card_slot` - A slot outline with its hover glow
//! - `health_circle` - Circular health indicator
//! - `message_dialog` - Modal feedback after a slot click

pub mod board_view;
pub mod card_slot;
pub mod health_circle;
pub mod message_dialog;
pub mod player_area;

pub use board_view::BoardView;
