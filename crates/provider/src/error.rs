// File: crates/provider/src/error.rs
// Summary: Transport, status, and decode failures from the data provider.

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("could not decode response from {context}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
