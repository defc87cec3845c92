// File: crates/plot/src/lib.rs
// Summary: Library side of the plot binary; the run is testable with injected collaborators.

pub mod config;
pub mod palette;
pub mod series;
pub mod run;

pub use config::PlotConfig;
pub use palette::{happy_palette, ColorAssigner, ColorMap, HappyPalette, PaletteError, DEFAULT_SERIES_COLOR};
pub use series::build_series;
pub use run::{run, ChartRenderer, RunError, RunSummary};
