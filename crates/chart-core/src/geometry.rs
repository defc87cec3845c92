// File: crates/chart-core/src/geometry.rs
// Summary: Plot-rectangle helpers for page-space math (points, y grows downward).

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// The rectangle left over after removing `insets` from a `width` x `height` page.
    pub fn inside(width: f32, height: f32, insets: &Insets) -> Self {
        let right = (width - insets.right).max(insets.left + 1.0);
        let bottom = (height - insets.bottom).max(insets.top + 1.0);
        Self::from_ltrb(insets.left, insets.top, right, bottom)
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
