//! Circular health indicator.

use gameboard_core::HealthCounter;
use gameboard_core::health::{HEALTH_DIAMETER, HEALTH_TEXT_SIZE};
use gpui::{FontWeight, IntoElement, div, prelude::*, px};

use crate::theme;

/// Render the health value centered in a gray outlined circle.
pub fn render_health_circle(health: &HealthCounter) -> impl IntoElement {
    div()
        .size(px(HEALTH_DIAMETER))
        .rounded_full()
        .border_2()
        .border_color(theme::health_outline())
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(HEALTH_TEXT_SIZE))
        .font_weight(FontWeight::BOLD)
        .text_color(theme::text())
        .child(health.display_text())
}
