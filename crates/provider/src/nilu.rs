// File: crates/provider/src/nilu.rs
// Summary: Blocking client for the NILU air-quality API (station lookup, historical observations).

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::error::ProviderError;
use crate::provider::DataProvider;
use crate::types::{Filter, MeasurementResult, Station};

pub const DEFAULT_BASE_URL: &str = "https://api.nilu.no";

/// Date format of the historical endpoint's path segments.
const PATH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator the API expects between component names.
const COMPONENT_SEPARATOR: &str = ";";

pub struct NiluClient {
    base: Url,
    client: Client,
}

impl NiluClient {
    pub fn new(base: &str) -> Result<Self, ProviderError> {
        Self::with_client(base, Client::new())
    }

    /// Like [`NiluClient::new`], sending requests through `client`.
    pub fn with_client(base: &str, client: Client) -> Result<Self, ProviderError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        Ok(Self { base, client })
    }

    /// `{base}/lookup/stations`
    pub fn stations_url(&self) -> Url {
        self.endpoint(&["lookup", "stations"])
    }

    /// `{base}/obs/historical/{from}/{to}/{station}?components=...`
    pub fn historical_url(&self, filter: &Filter, station: &str) -> Url {
        let from = filter.from_time.format(PATH_DATE_FORMAT).to_string();
        let to = filter.to_time.format(PATH_DATE_FORMAT).to_string();
        let mut url = self.endpoint(&["obs", "historical", &from, &to, station]);
        if !filter.components.is_empty() {
            url.query_pairs_mut()
                .append_pair("components", &filter.components.join(COMPONENT_SEPARATOR));
        }
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ProviderError> {
        debug!(%url, "GET");
        let http_err = |source| ProviderError::Http { url: url.to_string(), source };
        let response = self.client.get(url.clone()).send().map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status { url: url.to_string(), status });
        }
        let body = response.text().map_err(http_err)?;
        decode(&body, url.as_str())
    }
}

impl DataProvider for NiluClient {
    fn list_stations(&self) -> Result<Vec<Station>, ProviderError> {
        let stations: Vec<Station> = self.get_json(&self.stations_url())?;
        info!(count = stations.len(), "fetched station list");
        Ok(stations)
    }

    /// Issues its own `lookup/stations` request to resolve areas, then one
    /// request per matching station. The first failing request aborts.
    fn fetch_historical(&self, filter: &Filter) -> Result<Vec<MeasurementResult>, ProviderError> {
        let stations = self.list_stations()?;
        let mut results = Vec::new();
        for station in stations
            .iter()
            .filter(|s| !s.station.is_empty() && filter.matches_area(s))
        {
            let url = self.historical_url(filter, &station.station);
            let mut batch: Vec<MeasurementResult> = self.get_json(&url)?;
            debug!(station = %station.station, results = batch.len(), "fetched historical series");
            results.append(&mut batch);
        }
        info!(results = results.len(), areas = ?filter.areas, components = ?filter.components, "fetched historical measurements");
        Ok(results)
    }
}

fn decode<T: DeserializeOwned>(json: &str, context: &str) -> Result<T, ProviderError> {
    serde_json::from_str(json).map_err(|source| ProviderError::Decode { context: context.to_string(), source })
}

/// Decode a `lookup/stations` response body.
pub fn parse_stations(json: &str) -> Result<Vec<Station>, ProviderError> {
    decode(json, "station list")
}

/// Decode an `obs/historical` response body.
pub fn parse_historical(json: &str) -> Result<Vec<MeasurementResult>, ProviderError> {
    decode(json, "historical measurements")
}
