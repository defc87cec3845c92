// File: crates/plot/src/run.rs
// Summary: The fetch-to-PDF run: stations, palette, historical series, one line per station, save.

use std::path::{Path, PathBuf};

use chart_core::{Axis, Chart, ChartError, Rgb, TickFormat};
use luft_provider::{DataProvider, ProviderError};
use tracing::{debug, info, warn};

use crate::config::PlotConfig;
use crate::palette::{ColorAssigner, PaletteError, DEFAULT_SERIES_COLOR};
use crate::series::build_series;

/// The plot surface the run draws into.
pub trait ChartRenderer {
    /// Title, axis labels, and date tick format.
    fn configure(&mut self, config: &PlotConfig);

    fn add_line(&mut self, points: Vec<(f64, f64)>, color: Rgb, label: &str) -> Result<(), ChartError>;

    fn set_y_range(&mut self, min: f64, max: f64);

    fn save(&self, width_in: f32, height_in: f32, path: &Path) -> Result<(), ChartError>;
}

impl ChartRenderer for Chart {
    fn configure(&mut self, config: &PlotConfig) {
        self.title = config.title.clone();
        self.x_axis = Axis::new(config.x_label.as_str(), self.x_axis.min, self.x_axis.max)
            .with_ticks(TickFormat::Date(config.date_format.clone()));
        self.y_axis = Axis::new(config.y_label.as_str(), self.y_axis.min, self.y_axis.max);
    }

    fn add_line(&mut self, points: Vec<(f64, f64)>, color: Rgb, label: &str) -> Result<(), ChartError> {
        Chart::add_line(self, points, color, label)
    }

    fn set_y_range(&mut self, min: f64, max: f64) {
        Chart::set_y_range(self, min, max);
    }

    fn save(&self, width_in: f32, height_in: f32, path: &Path) -> Result<(), ChartError> {
        Chart::save(self, width_in, height_in, path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to fetch station list")]
    Stations(#[source] ProviderError),

    #[error("failed to assign station colors")]
    Palette(#[from] PaletteError),

    #[error("failed to fetch historical measurements")]
    Historical(#[source] ProviderError),

    #[error("failed to render chart")]
    Render(#[from] ChartError),
}

impl RunError {
    /// 1 for fetch and palette failures, 2 for rendering failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Stations(_) | RunError::Palette(_) | RunError::Historical(_) => 1,
            RunError::Render(_) => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub stations: usize,
    pub lines: usize,
    pub points: usize,
    /// Lines drawn in [`DEFAULT_SERIES_COLOR`] because their station had no color.
    pub missing_colors: usize,
    pub output: PathBuf,
}

/// Fetch, color, plot, and save. Stops at the first failure.
pub fn run(
    config: &PlotConfig,
    provider: &dyn DataProvider,
    palette: &dyn ColorAssigner,
    chart: &mut dyn ChartRenderer,
) -> Result<RunSummary, RunError> {
    chart.configure(config);

    let stations = provider.list_stations().map_err(RunError::Stations)?;
    let colors = palette.assign(&stations)?;
    debug!(stations = stations.len(), colors = colors.len(), "assigned station colors");

    let results = provider
        .fetch_historical(&config.filter)
        .map_err(RunError::Historical)?;

    let mut summary = RunSummary {
        stations: stations.len(),
        lines: 0,
        points: 0,
        missing_colors: 0,
        output: config.output.clone(),
    };

    for result in &results {
        let name = result.station.station.as_str();
        let points = build_series(result);
        let color = colors.get(name).unwrap_or_else(|| {
            warn!(station = name, "no color assigned; using default");
            summary.missing_colors += 1;
            DEFAULT_SERIES_COLOR
        });
        debug!(station = name, points = points.len(), "adding line");
        summary.points += points.len();
        chart.add_line(points, color, name)?;
        summary.lines += 1;
    }

    let (y_min, y_max) = config.y_range;
    chart.set_y_range(y_min, y_max);
    chart.save(config.width_in, config.height_in, &config.output)?;

    info!(
        lines = summary.lines,
        points = summary.points,
        output = %summary.output.display(),
        "wrote chart"
    );
    Ok(summary)
}
