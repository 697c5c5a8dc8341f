//! Color conversion between the board palette and GPUI.

use gameboard_core::Rgb;
use gameboard_core::colors;
use gpui::Rgba;

/// Convert a palette color to an opaque GPUI color.
pub fn color(c: Rgb) -> Rgba {
    gpui::rgb(c.to_hex())
}

/// The same color at the given opacity, clamped to [0, 1].
pub fn with_alpha(c: Rgba, alpha: f32) -> Rgba {
    Rgba {
        a: alpha.clamp(0.0, 1.0),
        ..c
    }
}

pub fn text() -> Rgba {
    color(colors::TEXT)
}

pub fn health_outline() -> Rgba {
    color(colors::HEALTH_OUTLINE)
}

pub fn dialog_surface() -> Rgba {
    color(colors::DIALOG_SURFACE)
}

pub fn dialog_border() -> Rgba {
    color(colors::DIALOG_BORDER)
}

/// Dimmed backdrop behind modal dialogs.
pub fn overlay() -> Rgba {
    gpui::rgba(0x000000aa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_opaque() {
        let c = color(colors::BOTTOM_BORDER);
        assert_eq!(c.a, 1.0);
        assert!((c.r - 252.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_with_alpha_clamps() {
        let c = color(colors::TEXT);
        assert_eq!(with_alpha(c, 0.25).a, 0.25);
        assert_eq!(with_alpha(c, 1.5).a, 1.0);
        assert_eq!(with_alpha(c, -1.0).a, 0.0);
        assert_eq!(with_alpha(c, 0.5).r, c.r);
    }
}
