// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers: nice numeric steps and midnight-aligned date steps.

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Candidate date tick spacings, in days.
const DAY_STEPS: [u32; 9] = [1, 2, 7, 14, 30, 60, 90, 180, 365];

/// Upper bound on the number of date ticks along one axis.
pub const MAX_DATE_TICKS: usize = 10;

/// A 1/2/5 x 10^n step giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = span.abs();
    if span <= 0.0 || !span.is_finite() { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of `step` inside `[min, max]`.
pub fn step_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let mut v = (min / step).ceil() * step;
    let mut out = Vec::new();
    while v <= max + eps {
        // snap -0.0 and float drift onto the grid
        out.push(if v.abs() < eps { 0.0 } else { v });
        v += step;
    }
    out
}

/// Smallest day step from [`DAY_STEPS`] giving at most [`MAX_DATE_TICKS`] ticks over `[min, max]` seconds.
pub fn date_step_days(min: f64, max: f64) -> u32 {
    let days = ((max - min) / SECONDS_PER_DAY).max(0.0);
    DAY_STEPS
        .iter()
        .copied()
        .find(|&d| ((days / d as f64).floor() as usize) < MAX_DATE_TICKS)
        .unwrap_or(DAY_STEPS[DAY_STEPS.len() - 1])
}

/// UTC-midnight tick positions (epoch seconds) inside `[min, max]`.
pub fn date_ticks(min: f64, max: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let step = date_step_days(min, max) as f64 * SECONDS_PER_DAY;
    let first = (min / SECONDS_PER_DAY).ceil() * SECONDS_PER_DAY;
    let mut out = Vec::new();
    let mut v = first;
    while v <= max {
        out.push(v);
        v += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(300.0, 6), 50.0);
        assert_eq!(nice_step(10.0, 6), 2.0);
        assert!((nice_step(0.7, 6) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn step_ticks_cover_closed_range() {
        assert_eq!(step_ticks(0.0, 300.0, 50.0), vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0]);
        assert!(step_ticks(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn date_step_grows_with_span() {
        assert_eq!(date_step_days(0.0, 3.0 * SECONDS_PER_DAY), 1);
        assert_eq!(date_step_days(0.0, 94.0 * SECONDS_PER_DAY), 14);
        assert_eq!(date_step_days(0.0, 5000.0 * SECONDS_PER_DAY), 365);
    }
}
