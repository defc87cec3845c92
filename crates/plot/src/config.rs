// File: crates/plot/src/config.rs
// Summary: Compiled-in run parameters (query filter, labels, page size, output path).

use std::path::PathBuf;

use chart_core::types::PAGE_INCHES;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use luft_provider::{Filter, DEFAULT_BASE_URL};

/// First and last day of the default query window.
const DEFAULT_FROM: NaiveDate = calendar_date(2016, 9, 1);
const DEFAULT_TO: NaiveDate = calendar_date(2016, 12, 4);

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub base_url: String,
    pub filter: Filter,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// chrono format for the X tick labels.
    pub date_format: String,
    /// Fixed Y bounds; values outside are clipped.
    pub y_range: (f64, f64),
    pub width_in: f32,
    pub height_in: f32,
    pub output: PathBuf,
}

impl Default for PlotConfig {
    /// PM10 in Tromsø, autumn 2016.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            filter: Filter::new(["Tromsø"], ["PM10"], midnight(DEFAULT_FROM), midnight(DEFAULT_TO)),
            title: "Air quality in Tromsø".to_string(),
            x_label: "Date".to_string(),
            y_label: "PM10 (µg/m³)".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            y_range: (0.0, 300.0),
            width_in: PAGE_INCHES,
            height_in: PAGE_INCHES,
            output: PathBuf::from("plot.pdf"),
        }
    }
}

/// Midnight UTC on a calendar date, or `None` when the date does not exist.
pub fn utc_midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Only used to build consts: an invalid date stops the build.
const fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}
