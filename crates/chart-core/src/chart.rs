// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and vector PDF rendering pipeline using Skia's PDF backend.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::error::ChartError;
use crate::geometry::PlotRect;
use crate::legend::Legend;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{inches_to_points, Insets, Rgb};

pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text; keeps output independent of installed fonts.
    pub draw_labels: bool,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub legend_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            title_size: 20.0,
            label_size: 15.0,
            tick_size: 12.0,
            legend_size: 13.0,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
    /// Derive the X range from the data at render time.
    pub x_autoscale: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: Legend::default(),
            x_autoscale: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Add a line series and register its legend entry.
    pub fn add_line(&mut self, points: Vec<(f64, f64)>, color: Rgb, label: &str) -> Result<(), ChartError> {
        let series = Series::line(label, points, color)?;
        self.legend.add(label, color);
        self.add_series(series);
        Ok(())
    }

    /// Fix the Y range; data outside it is clipped, not rescaled.
    pub fn set_y_range(&mut self, min: f64, max: f64) {
        self.y_axis.set_range(min, max);
    }

    /// (min, max) of X over every series, `None` when no series has points.
    pub fn data_x_extent(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .filter_map(Series::x_extent)
            .reduce(|(a, b), (c, d)| (a.min(c), b.max(d)))
    }

    /// The X axis as it will be drawn.
    pub fn effective_x_axis(&self) -> Axis {
        let mut axis = self.x_axis.clone();
        if self.x_autoscale {
            if let Some((lo, hi)) = self.data_x_extent() {
                axis.set_range(lo, hi);
            }
        }
        axis
    }

    /// Render a single-page PDF of `width_in` x `height_in` inches into memory.
    pub fn render_to_pdf_bytes(&self, opts: &RenderOptions, width_in: f32, height_in: f32) -> Result<Vec<u8>, ChartError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width_in) || !valid(height_in) {
            return Err(ChartError::InvalidPageSize { width_in, height_in });
        }
        let width = inches_to_points(width_in);
        let height = inches_to_points(height_in);

        let mut bytes: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut bytes, None);
            let mut page = document.begin_page((width, height), None);
            self.draw(page.canvas(), width, height, opts);
            page.end_page().close();
        }
        if bytes.is_empty() {
            return Err(ChartError::Render("PDF backend produced no output"));
        }
        debug!(bytes = bytes.len(), series = self.series.len(), "rendered PDF");
        Ok(bytes)
    }

    /// Render the chart to a PDF file at `path`, replacing any existing file.
    pub fn render_to_pdf(
        &self,
        opts: &RenderOptions,
        width_in: f32,
        height_in: f32,
        path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let path = path.as_ref();
        let bytes = self.render_to_pdf_bytes(opts, width_in, height_in)?;
        let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, bytes).map_err(io_err)
    }

    /// [`Chart::render_to_pdf`] with default options.
    pub fn save(&self, width_in: f32, height_in: f32, path: impl AsRef<Path>) -> Result<(), ChartError> {
        self.render_to_pdf(&RenderOptions::default(), width_in, height_in, path)
    }

    fn draw(&self, canvas: &skia::Canvas, width: f32, height: f32, opts: &RenderOptions) {
        let theme = &opts.theme;
        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        bg.set_style(skia::paint::Style::Fill);
        canvas.draw_rect(skia::Rect::from_wh(width, height), &bg);

        let plot = PlotRect::inside(width, height, &opts.insets);
        let x_axis = self.effective_x_axis();
        let sx = LinearScale::new(x_axis.min, x_axis.max, plot.left, plot.right);
        let sy = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom, plot.top);
        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid_and_ticks(canvas, &plot, &x_axis, &self.y_axis, &sx, &sy, theme, opts, shaper.as_ref());
        draw_axes(canvas, &plot, theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &sx, &sy, s);
        }
        canvas.restore();

        if let Some(shaper) = shaper.as_ref() {
            if !self.title.is_empty() {
                shaper.draw_centered(
                    canvas,
                    &self.title,
                    (plot.left + plot.right) * 0.5,
                    plot.top - opts.insets.top * 0.4,
                    opts.title_size,
                    theme.title,
                    true,
                );
            }
            shaper.draw_centered(
                canvas,
                &x_axis.label,
                (plot.left + plot.right) * 0.5,
                plot.bottom + opts.tick_size + opts.label_size * 2.0,
                opts.label_size,
                theme.axis_label,
                false,
            );
            shaper.draw_vertical(
                canvas,
                &self.y_axis.label,
                plot.left - opts.insets.left * 0.75,
                (plot.top + plot.bottom) * 0.5,
                opts.label_size,
                theme.axis_label,
            );
            draw_legend(canvas, &plot, &self.legend, theme, opts, shaper);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

const TICK_LEN: f32 = 5.0;

#[allow(clippy::too_many_arguments)]
fn draw_grid_and_ticks(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) {
    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid);
    grid.set_anti_alias(true);
    grid.set_stroke_width(0.5);

    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);

    for t in x_axis.tick_marks() {
        let x = sx.to_px(t.value);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &tick);
        if let Some(shaper) = shaper {
            shaper.draw_centered(canvas, &t.label, x, plot.bottom + TICK_LEN + opts.tick_size * 1.2, opts.tick_size, theme.tick, false);
        }
    }
    for t in y_axis.tick_marks() {
        let y = sy.to_px(t.value);
        canvas.draw_line((plot.left, y), (plot.right, y), &grid);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &tick);
        if let Some(shaper) = shaper {
            shaper.draw_right(canvas, &t.label, plot.left - TICK_LEN - 3.0, y + opts.tick_size * 0.35, opts.tick_size, theme.tick);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(series.color.to_skia());

    canvas.draw_path(&path, &stroke);
}

/// Entries stacked down from the plot's top-right corner: label, then a swatch.
fn draw_legend(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    legend: &Legend,
    theme: &Theme,
    opts: &RenderOptions,
    shaper: &TextShaper,
) {
    const PAD: f32 = 8.0;
    const SWATCH: f32 = 24.0;
    let row = opts.legend_size * 1.5;
    let first_baseline = plot.top + PAD + opts.legend_size;

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);
    swatch.set_stroke_width(2.0);

    let swatch_right = plot.right - PAD;
    let swatch_left = swatch_right - SWATCH;
    for (i, entry) in legend.entries.iter().enumerate() {
        let baseline = first_baseline + i as f32 * row;
        shaper.draw_right(canvas, &entry.label, swatch_left - 6.0, baseline, opts.legend_size, theme.legend_text);
        let mid = baseline - opts.legend_size * 0.35;
        swatch.set_color(entry.color.to_skia());
        canvas.draw_line((swatch_left, mid), (swatch_right, mid), &swatch);
    }
}
