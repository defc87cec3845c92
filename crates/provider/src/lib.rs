// File: crates/provider/src/lib.rs
// Summary: Provider crate entry point; data model, provider trait, and the NILU HTTP client.

pub mod types;
pub mod error;
pub mod provider;
pub mod nilu;

pub use types::{Filter, Measurement, MeasurementResult, Station};
pub use error::ProviderError;
pub use provider::DataProvider;
pub use nilu::{parse_historical, parse_stations, NiluClient, DEFAULT_BASE_URL};
