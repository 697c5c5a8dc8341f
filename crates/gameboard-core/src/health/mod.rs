//! Player health indicator.

/// Health every player starts with.
pub const DEFAULT_HEALTH: i32 = 50;

/// Diameter of the health circle in pixels.
pub const HEALTH_DIAMETER: f32 = 80.0;

/// Font size of the health value.
pub const HEALTH_TEXT_SIZE: f32 = 28.0;

/// Integer health shown centered in a circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthCounter {
    value: i32,
}

impl Default for HealthCounter {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH)
    }
}

impl HealthCounter {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replace the health value. Returns `true` when the indicator must be
    /// redrawn, which is every time.
    pub fn set_health(&mut self, value: i32) -> bool {
        if value != self.value {
            tracing::debug!(
                event = "core.health.changed",
                from = self.value,
                to = value
            );
        }
        self.value = value;
        true
    }

    pub fn display_text(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_health() {
        let health = HealthCounter::default();
        assert_eq!(health.value(), 50);
        assert_eq!(health.display_text(), "50");
    }

    #[test]
    fn test_set_health_requests_redraw() {
        let mut health = HealthCounter::default();
        assert!(health.set_health(42));
        assert_eq!(health.display_text(), "42");
        // Same value still repaints
        assert!(health.set_health(42));
    }

    #[test]
    fn test_negative_health_renders() {
        let mut health = HealthCounter::new(3);
        health.set_health(-7);
        assert_eq!(health.display_text(), "-7");
    }
}
