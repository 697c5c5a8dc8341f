//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.gameboard/config.toml`
//! 3. **Project config** - `./.gameboard/config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{BoardConfig, GlowConfig, HealthConfig, WindowConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Directory holding `config.toml`, relative to home or the working directory.
pub const CONFIG_DIR: &str = ".gameboard";
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged result fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<BoardConfig, ConfigError> {
    let mut sources = Vec::new();
    if let Some(home) = dirs::home_dir() {
        sources.push(home.join(CONFIG_DIR).join(CONFIG_FILE));
    } else {
        tracing::warn!(
            event = "core.config.home_dir_unavailable",
            "Could not find home directory - skipping user config"
        );
    }
    let cwd = std::env::current_dir()
        .map_err(|source| ConfigError::CurrentDirUnavailable { source })?;
    sources.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));

    load_from_paths(&sources)
}

/// Load and merge the given config files in order, then validate.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => {
                tracing::debug!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(event = "core.config.file_missing", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;
    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<BoardConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: BoardConfig, override_config: BoardConfig) -> BoardConfig {
    BoardConfig {
        window: WindowConfig {
            title: override_config.window.title.or(base.window.title),
            min_width: override_config.window.min_width.or(base.window.min_width),
            min_height: override_config.window.min_height.or(base.window.min_height),
        },
        glow: GlowConfig {
            tick_interval_ms: override_config
                .glow
                .tick_interval_ms
                .or(base.glow.tick_interval_ms),
            step: override_config.glow.step.or(base.glow.step),
        },
        health: HealthConfig {
            starting_value: override_config
                .health
                .starting_value
                .or(base.health.starting_value),
        },
    }
}
