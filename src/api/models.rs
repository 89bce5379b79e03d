//! Response envelopes for the public API
//!
//! Payload fragments fetched upstream pass through as untyped
//! `serde_json::Value`s; the provider schemas are external contracts this
//! service does not own. Field order matches the wire contract the
//! front-end consumes.

use crate::aggregator::DataSource;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Liveness marker served at `/`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// One entry in the seasons listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonEntry {
    pub year: i32,
    pub data_source: DataSource,
}

/// `GET /api/seasons`
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonsResponse {
    pub seasons: Vec<SeasonEntry>,
    pub total: usize,
}

/// `GET /api/seasons/{year}`
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonDetailResponse {
    pub year: i32,
    pub total_races: usize,
    pub races: Vec<Value>,
    pub data_source: DataSource,
}

/// `GET /api/seasons/{year}/drivers`
#[derive(Debug, Serialize, Deserialize)]
pub struct DriversResponse {
    pub year: i32,
    pub drivers: Vec<Value>,
    pub total: usize,
    pub data_source: DataSource,
}

impl DriversResponse {
    pub fn new(year: i32, drivers: Vec<Value>, data_source: DataSource) -> Self {
        let total = drivers.len();
        Self {
            year,
            drivers,
            total,
            data_source,
        }
    }
}

/// `GET /api/seasons/{year}/constructors`
#[derive(Debug, Serialize, Deserialize)]
pub struct ConstructorsResponse {
    pub year: i32,
    pub constructors: Vec<Value>,
    pub total: usize,
    pub data_source: DataSource,
}

/// `GET /api/seasons/{year}/standings/drivers`
///
/// `message` is only present for live seasons, where no standings source
/// exists upstream.
#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub year: i32,
    pub standings: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data_source: DataSource,
}

/// `GET /api/races/{year}/{round}`
///
/// `race_data` and `qualifying_data` are arrays on the archive path and
/// per-session objects on the live path.
#[derive(Debug, Serialize, Deserialize)]
pub struct RaceDetailResponse {
    pub year: i32,
    pub round: u32,
    pub race_data: Value,
    pub qualifying_data: Value,
    pub data_source: DataSource,
}

/// `GET /api/races/{year}/{round}/qualifying`
#[derive(Debug, Serialize, Deserialize)]
pub struct QualifyingResponse {
    pub year: i32,
    pub round: u32,
    pub qualifying_data: Value,
    pub data_source: DataSource,
}

/// `GET /api/races/{year}/{round}/race`
#[derive(Debug, Serialize, Deserialize)]
pub struct RaceResultsResponse {
    pub year: i32,
    pub round: u32,
    pub race_data: Value,
    pub data_source: DataSource,
}
