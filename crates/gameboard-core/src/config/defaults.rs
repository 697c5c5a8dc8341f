//! Default values and resolved accessors for configuration types.

use std::time::Duration;

use crate::config::types::{BoardConfig, GlowConfig, HealthConfig, WindowConfig};
use crate::glow::{DEFAULT_STEP, DEFAULT_TICK_INTERVAL, GlowSettings};
use crate::health::DEFAULT_HEALTH;

pub const DEFAULT_TITLE: &str = "GameBoard Standalone Test";
pub const DEFAULT_MIN_WIDTH: u32 = 1200;
pub const DEFAULT_MIN_HEIGHT: u32 = 800;

impl WindowConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn min_width(&self) -> u32 {
        self.min_width.unwrap_or(DEFAULT_MIN_WIDTH)
    }

    pub fn min_height(&self) -> u32 {
        self.min_height.unwrap_or(DEFAULT_MIN_HEIGHT)
    }
}

impl GlowConfig {
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TICK_INTERVAL)
    }

    pub fn step(&self) -> f32 {
        self.step.unwrap_or(DEFAULT_STEP)
    }
}

impl HealthConfig {
    pub fn starting_value(&self) -> i32 {
        self.starting_value.unwrap_or(DEFAULT_HEALTH)
    }
}

impl BoardConfig {
    /// Glow timing for every slot on the board.
    pub fn glow_settings(&self) -> GlowSettings {
        GlowSettings {
            tick_interval: self.glow.tick_interval(),
            step: self.glow.step(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_resolves_to_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.window.title(), "GameBoard Standalone Test");
        assert_eq!(config.window.min_width(), 1200);
        assert_eq!(config.window.min_height(), 800);
        assert_eq!(config.glow_settings(), GlowSettings::default());
        assert_eq!(config.health.starting_value(), 50);
    }

    #[test]
    fn test_glow_settings_from_config() {
        let config = BoardConfig {
            glow: GlowConfig {
                tick_interval_ms: Some(40),
                step: Some(0.1),
            },
            ..Default::default()
        };
        let settings = config.glow_settings();
        assert_eq!(settings.tick_interval, Duration::from_millis(40));
        assert_eq!(settings.step, 0.1);
    }
}
