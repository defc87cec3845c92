// File: crates/chart-core/tests/series.rs
// Purpose: Line construction, legend registration, and color conversion.

use chart_core::{Chart, ChartError, Rgb, Series};

#[test]
fn add_line_registers_legend_entry_even_when_empty() {
    let mut chart = Chart::new();
    let red = Rgb::from_rgb255(255, 0, 0);
    chart.add_line(vec![(0.0, 1.0), (1.0, 2.0)], red, "A").unwrap();
    chart.add_line(Vec::new(), Rgb::BLACK, "B").unwrap();

    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.legend.len(), 2);
    assert_eq!(chart.legend.entries[0].label, "A");
    assert_eq!(chart.legend.entries[0].color, red);
    assert!(chart.series[1].is_empty());
}

#[test]
fn non_finite_point_is_rejected() {
    let err = Series::line("bad", vec![(0.0, 1.0), (1.0, f64::NAN)], Rgb::BLACK).unwrap_err();
    match err {
        ChartError::NonFiniteValue { index, label, .. } => {
            assert_eq!(index, 1);
            assert_eq!(label, "bad");
        }
        other => panic!("unexpected error: {other}"),
    }

    let mut chart = Chart::new();
    assert!(chart.add_line(vec![(f64::INFINITY, 0.0)], Rgb::BLACK, "inf").is_err());
    assert!(chart.legend.is_empty(), "failed line must not leave a legend entry");
}

#[test]
fn rgb255_round_trips_and_clamps() {
    assert_eq!(Rgb::from_rgb255(12, 200, 255).to_rgb255(), (12, 200, 255));
    assert_eq!(Rgb::new(-0.5, 0.5, 1.5).to_rgb255(), (0, 128, 255));
}
