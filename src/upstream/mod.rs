//! HTTP clients for the upstream Formula 1 data providers

pub mod jolpica;
pub mod openf1;

pub use jolpica::JolpicaClient;
pub use openf1::OpenF1Client;

use crate::metrics::METRICS;
use serde_json::Value;
use tracing::debug;

/// Error raised by a single upstream fetch.
///
/// `Status` is a non-success HTTP response; callers decide whether that
/// means the resource does not exist or the fetch degrades to an empty
/// result. `Transport` and `Decode` are transport-level faults and always
/// surface as an upstream error at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream response was not valid JSON: {0}")]
    Decode(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Issue a GET request and parse the body as JSON, recording per-provider
/// metrics around the call.
pub(crate) async fn get_json(
    http: &reqwest::Client,
    provider: &'static str,
    url: &str,
    query: &[(&str, String)],
) -> FetchResult<Value> {
    let timer = METRICS
        .upstream_request_duration
        .with_label_values(&[provider])
        .start_timer();

    let result = send(http, url, query).await;
    timer.observe_duration();

    let outcome = match &result {
        Ok(_) => "success",
        Err(FetchError::Status(_)) => "status",
        Err(FetchError::Transport(_)) => "transport",
        Err(FetchError::Decode(_)) => "decode",
    };
    METRICS
        .upstream_requests
        .with_label_values(&[provider, outcome])
        .inc();

    result
}

async fn send(
    http: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> FetchResult<Value> {
    let mut request = http.get(url);
    if !query.is_empty() {
        request = request.query(query);
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        debug!("GET {url} returned {status}");
        return Err(FetchError::Status(status));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Build a reqwest client with the configured per-request timeout
pub(crate) fn build_http_client(
    timeout: std::time::Duration,
) -> FetchResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))
}
