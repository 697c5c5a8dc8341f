//! # Configuration System
//!
//! Hierarchical TOML configuration for the board window.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.gameboard/config.toml` (global user preferences)
//! 3. **Project config** - `./.gameboard/config.toml` (per-directory overrides)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use gameboard_core::config::BoardConfig;
//!
//! fn example() -> Result<(), gameboard_core::ConfigError> {
//!     let config = BoardConfig::load_hierarchy()?;
//!     let settings = config.glow_settings();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use crate::errors::{ConfigError, GameBoardError};

// Public API exports
pub use types::{BoardConfig, GlowConfig, HealthConfig, WindowConfig};
pub use validation::validate_config;

impl BoardConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Load the hierarchy, falling back to defaults when it fails.
    ///
    /// The failure is logged so the board still opens with a broken config.
    pub fn load_or_default() -> Self {
        match Self::load_hierarchy() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    event = "core.config.load_failed",
                    error = %e,
                    error_code = e.error_code(),
                    "Could not load config - using defaults"
                );
                Self::default()
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
