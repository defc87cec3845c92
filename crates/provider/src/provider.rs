// File: crates/provider/src/provider.rs
// Summary: The provider seam consumed by the plot run.

use crate::error::ProviderError;
use crate::types::{Filter, MeasurementResult, Station};

/// Source of station metadata and historical measurements.
pub trait DataProvider {
    /// All known monitoring stations.
    fn list_stations(&self) -> Result<Vec<Station>, ProviderError>;

    /// Historical series matching `filter`, one result per station and component.
    ///
    /// Implementations resolve `filter.areas` to stations themselves, so a
    /// caller that already listed stations may see the lookup repeated.
    fn fetch_historical(&self, filter: &Filter) -> Result<Vec<MeasurementResult>, ProviderError>;
}
