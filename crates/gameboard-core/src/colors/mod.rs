//! Board palette and color helpers.

/// Brightening factor; each channel is divided by this.
const BRIGHTER_FACTOR: f64 = 0.7;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB` value, as taken by `gpui::rgb`.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// A brighter version of this color.
    ///
    /// Pure black becomes a dark gray so it can brighten at all, and tiny
    /// non-zero channels are lifted to the same floor before scaling.
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - BRIGHTER_FACTOR)) as u8;

        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Self::new(floor, floor, floor);
        }

        let scale = |c: u8| -> u8 {
            let c = if c > 0 && c < floor { floor } else { c };
            ((c as f64 / BRIGHTER_FACTOR) as u32).min(255) as u8
        };

        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Window background (deep blue).
pub const BOARD_BACKGROUND: Rgb = Rgb::new(22, 33, 61);

/// Slot border for the top seat.
pub const TOP_BORDER: Rgb = Rgb::new(128, 128, 128);

/// Slot border for the bottom seat.
pub const BOTTOM_BORDER: Rgb = Rgb::new(252, 163, 17);

/// Outline of the health circle.
pub const HEALTH_OUTLINE: Rgb = Rgb::new(128, 128, 128);

/// Label and health text.
pub const TEXT: Rgb = Rgb::new(255, 255, 255);

/// Modal dialog surface and overlay.
pub const DIALOG_SURFACE: Rgb = Rgb::new(45, 45, 45);
pub const DIALOG_BORDER: Rgb = Rgb::new(68, 68, 68);
