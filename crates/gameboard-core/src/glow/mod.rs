//! Hover-glow animation for card slots.
//!
//! Each slot owns one [`GlowRamp`]. Pointer-enter starts a periodic tick,
//! every tick moves alpha one step toward 1 (hovered) or 0 (not hovered),
//! and the tick stops once a decaying ramp reaches 0.

pub mod ramp;
pub mod types;

pub use ramp::GlowRamp;
pub use types::{DEFAULT_STEP, DEFAULT_TICK_INTERVAL, GlowPhase, GlowSettings, TickOutcome};
