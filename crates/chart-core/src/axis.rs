// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, and tick formatting.

use chrono::DateTime;

use crate::grid::{date_ticks, nice_step, step_ticks};

/// How tick positions are chosen and labelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Nice 1/2/5 steps, plain numbers.
    Number,
    /// Epoch-second values on UTC midnights, labelled with a chrono format string.
    Date(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: TickFormat::Number }
    }

    pub fn with_ticks(mut self, ticks: TickFormat) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn default_x() -> Self {
        Self::new("Time", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// Tick positions and labels for the current range.
    pub fn tick_marks(&self) -> Vec<Tick> {
        match &self.ticks {
            TickFormat::Number => {
                let step = nice_step(self.max - self.min, 6);
                let decimals = if step >= 1.0 { 0 } else { (-step.log10()).ceil() as usize };
                step_ticks(self.min, self.max, step)
                    .into_iter()
                    .map(|value| Tick { value, label: format!("{value:.decimals$}") })
                    .collect()
            }
            TickFormat::Date(fmt) => date_ticks(self.min, self.max)
                .into_iter()
                .filter_map(|value| {
                    let at = DateTime::from_timestamp(value as i64, 0)?;
                    Some(Tick { value, label: at.format(fmt).to_string() })
                })
                .collect(),
        }
    }
}
