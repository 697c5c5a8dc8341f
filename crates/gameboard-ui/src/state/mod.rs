//! Application state for gameboard-ui.
//!
//! `AppState` wraps the core board state with the bits only the window needs:
//! the modal dialog and the glow timer interval.

pub mod app_state;
pub mod dialog;

pub use app_state::AppState;
pub use dialog::DialogState;
