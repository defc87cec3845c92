// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (page sizes, colors, paddings).

use skia_safe as skia;

/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default page edge, in inches.
pub const PAGE_INCHES: f32 = 16.0;

/// Convert a physical length in inches to PDF points.
pub fn inches_to_points(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Page margins around the plot rectangle, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(84.0, 36.0, 64.0, 72.0)
    }
}

/// An opaque RGB color with channels normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb255(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Channels as 0–255 integers; out-of-range inputs are clamped.
    pub fn to_rgb255(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    pub fn to_skia(self) -> skia::Color {
        let (r, g, b) = self.to_rgb255();
        skia::Color::from_rgb(r, g, b)
    }
}
