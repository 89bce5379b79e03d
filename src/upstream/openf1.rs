//! Client for the OpenF1 live-telemetry provider
//!
//! Serves seasons after 2022. Endpoints return bare JSON arrays filtered
//! by query parameters; `meeting_key` and `session_key` are integers in
//! the provider's model.

use super::{build_http_client, get_json, FetchError, FetchResult};
use serde_json::Value;
use std::time::Duration;

pub const PROVIDER: &str = "openf1";

/// Live provider client, keyed by year, meeting and session
#[derive(Clone)]
pub struct OpenF1Client {
    http: reqwest::Client,
    base_url: String,
}

impl OpenF1Client {
    /// Create a new live provider client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        Ok(Self {
            http: build_http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Calendar events for a year, including pre-season testing
    pub async fn meetings(&self, year: i32) -> FetchResult<Vec<Value>> {
        self.list("meetings", &[("year", year.to_string())]).await
    }

    /// Sessions of a meeting, optionally filtered by session name
    pub async fn sessions(
        &self,
        meeting_key: i64,
        session_name: Option<&str>,
    ) -> FetchResult<Vec<Value>> {
        let mut query = vec![("meeting_key", meeting_key.to_string())];
        if let Some(name) = session_name {
            query.push(("session_name", name.to_string()));
        }
        self.list("sessions", &query).await
    }

    /// Drivers who took part in a session
    pub async fn drivers(&self, session_key: i64) -> FetchResult<Vec<Value>> {
        self.list("drivers", &[("session_key", session_key.to_string())])
            .await
    }

    /// Position changes during a session
    pub async fn positions(&self, session_key: i64) -> FetchResult<Vec<Value>> {
        self.list("position", &[("session_key", session_key.to_string())])
            .await
    }

    /// Lap data for a session
    pub async fn laps(&self, session_key: i64) -> FetchResult<Vec<Value>> {
        self.list("laps", &[("session_key", session_key.to_string())])
            .await
    }

    /// Fetch a query-filtered endpoint that returns a bare array
    async fn list(&self, path: &str, query: &[(&str, String)]) -> FetchResult<Vec<Value>> {
        let url = format!("{}/{}", self.base_url, path);
        match get_json(&self.http, PROVIDER, &url, query).await? {
            Value::Array(entries) => Ok(entries),
            _ => Err(FetchError::Decode(format!(
                "{path} response is not a JSON array"
            ))),
        }
    }
}
