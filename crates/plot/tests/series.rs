// File: crates/plot/tests/series.rs
// Purpose: Series building keeps length, order, and raw values.

use chrono::{Duration, FixedOffset, TimeZone};
use luft_provider::{Measurement, MeasurementResult, Station};
use luftplot::build_series;

fn hourly(values: &[f64]) -> MeasurementResult {
    let cet = FixedOffset::east_opt(3600).unwrap();
    let start = cet.with_ymd_and_hms(2016, 9, 1, 1, 0, 0).unwrap();
    let measurements = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let from_time = start + Duration::hours(i as i64);
            Measurement { from_time, to_time: from_time + Duration::hours(1), value, quality_controlled: true }
        })
        .collect();
    MeasurementResult::new(Station::named("Hansjordnesbukta"), "PM10", measurements)
}

#[test]
fn preserves_length_order_and_values() {
    let values = [12.5, 3.0, 450.0, -1.0, 0.0];
    let result = hourly(&values);
    let points = build_series(&result);

    assert_eq!(points.len(), values.len());
    for (i, (&(_, y), &v)) in points.iter().zip(values.iter()).enumerate() {
        assert_eq!(y, v, "point {i}");
    }
    assert!(points.windows(2).all(|w| w[0].0 <= w[1].0), "x must be non-decreasing");
}

#[test]
fn x_is_epoch_seconds_of_from_time() {
    let points = build_series(&hourly(&[1.0, 2.0]));
    // 2016-09-01T01:00+01:00 == 2016-09-01T00:00Z
    assert_eq!(points[0].0, 1_472_688_000.0);
    assert_eq!(points[1].0 - points[0].0, 3600.0);
}

#[test]
fn empty_measurements_give_empty_series() {
    assert!(build_series(&hourly(&[])).is_empty());
}

#[test]
fn unsorted_input_is_not_reordered() {
    let mut result = hourly(&[1.0, 2.0, 3.0]);
    result.measurements.swap(0, 2);
    let points = build_series(&result);
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    assert_eq!(ys, vec![3.0, 2.0, 1.0]);
}
