// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PDF.

use chart_core::{Axis, Chart, ChartError, RenderOptions, Rgb, TickFormat};

fn sample_chart() -> Chart {
    let mut chart = Chart::new();
    chart.title = "Smoke".to_string();
    chart.x_axis = Axis::new("Date", 0.0, 1.0).with_ticks(TickFormat::Date("%Y-%m-%d".into()));
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    let day = 86_400.0;
    chart
        .add_line(
            vec![(0.0, 0.0), (day, 2.0), (2.0 * day, 1.0), (3.0 * day, 3.5), (4.0 * day, 2.5)],
            Rgb::from_rgb255(200, 40, 40),
            "station",
        )
        .expect("finite points");
    chart
}

#[test]
fn render_smoke_pdf() {
    let chart = sample_chart();
    let out = std::path::PathBuf::from("target/test_out/smoke.pdf");

    chart.save(16.0, 16.0, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "pdf should be non-empty");

    let bytes = std::fs::read(&out).expect("read back");
    assert!(bytes.starts_with(b"%PDF"), "should be PDF header");
}

#[test]
fn save_overwrites_existing_file() {
    let out = std::path::PathBuf::from("target/test_out/overwrite.pdf");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, b"stale").unwrap();

    sample_chart().save(4.0, 4.0, &out).expect("render should succeed");
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn labels_off_still_renders() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let bytes = sample_chart().render_to_pdf_bytes(&opts, 2.0, 2.0).expect("pdf bytes");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn dark_theme_renders() {
    let mut opts = RenderOptions::default();
    opts.theme = chart_core::theme::find("DARK");
    assert_eq!(opts.theme.name, "dark");
    let bytes = sample_chart().render_to_pdf_bytes(&opts, 3.0, 3.0).expect("pdf bytes");
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(chart_core::theme::find("sepia").name, "light");
}

#[test]
fn rejects_degenerate_page() {
    let err = sample_chart()
        .render_to_pdf_bytes(&RenderOptions::default(), 0.0, 16.0)
        .unwrap_err();
    assert!(matches!(err, ChartError::InvalidPageSize { .. }));
}
