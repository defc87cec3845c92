// File: crates/plot/src/series.rs
// Summary: Measurement records to plot coordinates (epoch seconds, value).

use luft_provider::MeasurementResult;

/// One point per measurement, in provider order. No resampling or gap filling.
pub fn build_series(result: &MeasurementResult) -> Vec<(f64, f64)> {
    result
        .measurements
        .iter()
        .map(|m| (m.epoch_seconds(), m.value))
        .collect()
}
