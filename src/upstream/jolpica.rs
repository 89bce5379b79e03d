//! Client for the Jolpica archive (Ergast-compatible)
//!
//! Serves historical seasons up to 2022. Every endpoint wraps its payload
//! in a fixed `MRData` envelope; the client unwraps the relevant table and
//! hands the entries through untyped.

use super::{build_http_client, get_json, FetchError, FetchResult};
use serde_json::Value;
use std::time::Duration;

pub const PROVIDER: &str = "jolpica";

/// Archive client, keyed by year and round paths
#[derive(Clone)]
pub struct JolpicaClient {
    http: reqwest::Client,
    base_url: String,
}

impl JolpicaClient {
    /// Create a new archive client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        Ok(Self {
            http: build_http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Race calendar for a season
    pub async fn race_schedule(&self, year: i32) -> FetchResult<Vec<Value>> {
        self.table(&format!("{year}.json"), "/MRData/RaceTable/Races")
            .await
    }

    /// Drivers who entered a season
    pub async fn drivers(&self, year: i32) -> FetchResult<Vec<Value>> {
        self.table(&format!("{year}/drivers.json"), "/MRData/DriverTable/Drivers")
            .await
    }

    /// Constructors who entered a season
    pub async fn constructors(&self, year: i32) -> FetchResult<Vec<Value>> {
        self.table(
            &format!("{year}/constructors.json"),
            "/MRData/ConstructorTable/Constructors",
        )
        .await
    }

    /// Driver championship standings for a season
    pub async fn driver_standings(&self, year: i32) -> FetchResult<Vec<Value>> {
        self.table(
            &format!("{year}/driverStandings.json"),
            "/MRData/StandingsTable/StandingsLists",
        )
        .await
    }

    /// Race results for one round
    pub async fn race_results(&self, year: i32, round: u32) -> FetchResult<Vec<Value>> {
        self.table(
            &format!("{year}/{round}/results.json"),
            "/MRData/RaceTable/Races",
        )
        .await
    }

    /// Qualifying results for one round
    pub async fn qualifying_results(&self, year: i32, round: u32) -> FetchResult<Vec<Value>> {
        self.table(
            &format!("{year}/{round}/qualifying.json"),
            "/MRData/RaceTable/Races",
        )
        .await
    }

    /// Fetch a path and unwrap the table array at `pointer`
    async fn table(&self, path: &str, pointer: &str) -> FetchResult<Vec<Value>> {
        let url = format!("{}/{}", self.base_url, path);
        let mut body = get_json(&self.http, PROVIDER, &url, &[]).await?;
        match body.pointer_mut(pointer).map(Value::take) {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(FetchError::Decode(format!(
                "response is missing the {pointer} table"
            ))),
        }
    }
}
