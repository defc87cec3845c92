// File: crates/chart-core/src/error.rs
// Summary: Error type for series construction and document rendering.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("point {index} of series '{label}' is not finite ({x}, {y})")]
    NonFiniteValue { label: String, index: usize, x: f64, y: f64 },

    #[error("invalid page size {width_in} x {height_in} in")]
    InvalidPageSize { width_in: f32, height_in: f32 },

    #[error("render failed: {0}")]
    Render(&'static str),

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
