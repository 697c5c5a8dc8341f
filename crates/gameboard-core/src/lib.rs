//! gameboard-core: View state for the GameBoard test harness
//!
//! This library holds everything the board window shows, independent of the
//! UI toolkit that draws it. The GUI crate renders this state and forwards
//! pointer input and timer ticks back into it.
//!
//! # Main Entry Points
//!
//! - [`board`] - Board state: both player areas, slot lookup, click handling
//! - [`glow`] - Hover-glow ramp driven by a periodic timer
//! - [`layout`] - Player-area and board composition (mirrored seats)
//! - [`config`] - Configuration management

pub mod board;
pub mod colors;
pub mod config;
pub mod errors;
pub mod glow;
pub mod health;
pub mod layout;
pub mod logging;
pub mod slot;

// Re-export commonly used types at crate root for convenience
pub use board::{BoardState, PlayerArea};
pub use colors::Rgb;
pub use config::BoardConfig;
pub use errors::{ConfigError, GameBoardError};
pub use glow::{GlowPhase, GlowRamp, GlowSettings, TickOutcome};
pub use health::HealthCounter;
pub use layout::{BoardLayout, Panel, PlayerAreaLayout, Row, Seat};
pub use slot::{CardSlot, FieldIndex, SlotId, SlotKind};

// Re-export logging initialization
pub use logging::init_logging;
