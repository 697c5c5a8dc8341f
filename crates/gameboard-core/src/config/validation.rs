//! Configuration validation.

use crate::config::types::BoardConfig;
use crate::errors::ConfigError;

/// Validate the resolved configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the first offending field.
pub fn validate_config(config: &BoardConfig) -> Result<(), ConfigError> {
    if config.window.title().trim().is_empty() {
        return Err(invalid("window.title must not be empty"));
    }

    if config.window.min_width() == 0 || config.window.min_height() == 0 {
        return Err(invalid("window.min_width and window.min_height must be > 0"));
    }

    if config.glow.tick_interval().is_zero() {
        return Err(invalid("glow.tick_interval_ms must be > 0"));
    }

    let step = config.glow.step();
    if !(step > 0.0 && step <= 1.0) {
        return Err(invalid(&format!("glow.step must be in (0, 1], got {step}")));
    }

    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.to_string(),
    }
}
