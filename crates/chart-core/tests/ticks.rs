// File: crates/chart-core/tests/ticks.rs
// Purpose: Date and numeric tick labelling.

use chart_core::{Axis, TickFormat};

#[test]
fn date_ticks_fall_on_midnights() {
    // 2020-01-01T06:00Z .. 2020-01-03T12:00Z
    let axis = Axis::new("Date", 1_577_858_400.0, 1_578_052_800.0)
        .with_ticks(TickFormat::Date("%Y-%m-%d".into()));
    let labels: Vec<String> = axis.tick_marks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["2020-01-02", "2020-01-03"]);
}

#[test]
fn long_date_range_is_thinned() {
    // 2016-09-01 .. 2016-12-04
    let axis = Axis::new("Date", 1_472_688_000.0, 1_480_809_600.0)
        .with_ticks(TickFormat::Date("%Y-%m-%d".into()));
    let ticks = axis.tick_marks();
    assert!(ticks.len() <= 10);
    assert_eq!(ticks[0].label, "2016-09-01");
    assert_eq!(ticks[1].label, "2016-09-15");
}

#[test]
fn numeric_ticks_for_pm10_range() {
    let axis = Axis::new("PM10", 0.0, 300.0);
    let labels: Vec<String> = axis.tick_marks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["0", "50", "100", "150", "200", "250", "300"]);
}
