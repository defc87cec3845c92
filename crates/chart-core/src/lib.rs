// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model and PDF rendering API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod legend;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, Tick, TickFormat};
pub use legend::{Legend, LegendEntry};
pub use theme::Theme;
pub use text::TextShaper;
pub use error::ChartError;
pub use types::{Insets, Rgb};
