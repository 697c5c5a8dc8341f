//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a project config only needs to name what it overrides.
//!
//! # Example Configuration
//!
//! ```toml
//! [window]
//! title = "GameBoard Standalone Test"
//! min_width = 1200
//! min_height = 800
//!
//! [glow]
//! tick_interval_ms = 20
//! step = 0.05
//!
//! [health]
//! starting_value = 50
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.gameboard/config.toml`
/// 2. Project config: `./.gameboard/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Main window settings
    #[serde(default)]
    pub window: WindowConfig,

    /// Hover-glow timing
    #[serde(default)]
    pub glow: GlowConfig,

    /// Player health
    #[serde(default)]
    pub health: HealthConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default)]
    pub title: Option<String>,

    /// Minimum window width in pixels
    #[serde(default)]
    pub min_width: Option<u32>,

    /// Minimum window height in pixels
    #[serde(default)]
    pub min_height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlowConfig {
    /// Milliseconds between glow ticks
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,

    /// Alpha change per tick, in (0, 1]
    #[serde(default)]
    pub step: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Health each player starts with
    #[serde(default)]
    pub starting_value: Option<i32>,
}
