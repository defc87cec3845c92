// File: crates/chart-core/src/series.rs
// Summary: Line series model: validated XY points plus the stroke style and legend label.

use crate::error::ChartError;
use crate::types::Rgb;

/// Default stroke width, in points.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub color: Rgb,
    pub stroke_width: f32,
}

impl Series {
    /// Build a line series, rejecting NaN or infinite coordinates.
    /// An empty point list is accepted and draws nothing.
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>, color: Rgb) -> Result<Self, ChartError> {
        let label = label.into();
        if let Some((index, &(x, y))) = data
            .iter()
            .enumerate()
            .find(|(_, (x, y))| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::NonFiniteValue { label, index, x, y });
        }
        Ok(Self { label, data_xy: data, color, stroke_width: DEFAULT_STROKE_WIDTH })
    }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (min, max) of the X coordinates, `None` when empty.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.data_xy.iter().fold(None, |acc, &(x, _)| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
    }
}
