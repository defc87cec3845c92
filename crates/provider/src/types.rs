// File: crates/provider/src/types.rs
// Summary: Stations, query filter, and measurement records as the provider returns them.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A monitoring station. `station` is the identifier; the rest is metadata
/// the lookup endpoint fills in and the historical endpoint partly repeats.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Station {
    pub id: Option<i64>,
    pub zone: String,
    pub municipality: String,
    pub area: String,
    pub station: String,
    pub eoi: String,
    #[serde(rename = "type")]
    pub station_type: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner: Option<String>,
    pub status: Option<String>,
    pub components: Option<String>,
}

impl Station {
    pub fn named(station: impl Into<String>) -> Self {
        Self { station: station.into(), ..Self::default() }
    }
}

/// Restricts a historical fetch to areas, pollutant components, and an inclusive time window.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub areas: Vec<String>,
    pub components: Vec<String>,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
}

impl Filter {
    pub fn new<A, C>(areas: A, components: C, from_time: DateTime<Utc>, to_time: DateTime<Utc>) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            areas: areas.into_iter().map(Into::into).collect(),
            components: components.into_iter().map(Into::into).collect(),
            from_time,
            to_time,
        }
    }

    /// Whether `station` lies in one of the filter's areas. No areas means every station.
    pub fn matches_area(&self, station: &Station) -> bool {
        self.areas.is_empty() || self.areas.iter().any(|a| *a == station.area)
    }
}

/// One sample. Values are passed through unchecked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub from_time: DateTime<FixedOffset>,
    pub to_time: DateTime<FixedOffset>,
    pub value: f64,
    #[serde(default)]
    pub quality_controlled: bool,
}

impl Measurement {
    /// Start of the sampling interval as Unix seconds.
    pub fn epoch_seconds(&self) -> f64 {
        self.from_time.timestamp() as f64
    }
}

/// A station's series for one component, in provider order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    #[serde(flatten)]
    pub station: Station,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "values", default)]
    pub measurements: Vec<Measurement>,
}

impl MeasurementResult {
    pub fn new(station: Station, component: impl Into<String>, measurements: Vec<Measurement>) -> Self {
        Self { station, component: component.into(), unit: String::new(), measurements }
    }
}
