//! Source selection and response assembly
//!
//! Every operation picks a provider by year, chains the upstream calls its
//! data depends on, and folds the pieces into one response envelope. Two
//! named folds carry the error policy: [`require`] for the defining fetch
//! of an operation and [`degrade_to_empty`] for everything secondary.

pub mod races;
pub mod seasons;

pub use races::{qualifying_results, race_details, race_results};
pub use seasons::{
    constructors_from_drivers, driver_standings, list_seasons, season_constructors,
    season_details, season_drivers,
};

use crate::error::ApiError;
use crate::upstream::{FetchError, FetchResult, JolpicaClient, OpenF1Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// First season the API exposes
pub const FIRST_SEASON: i32 = 2005;

/// Last season served from the Jolpica archive; everything after comes
/// from OpenF1
pub const LAST_ARCHIVED_SEASON: i32 = 2022;

/// Session names used by the live provider
pub(crate) const RACE_SESSION: &str = "Race";
pub(crate) const QUALIFYING_SESSION: &str = "Qualifying";

/// Which upstream serves a given season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Jolpica,
    Openf1,
}

/// Map a season year to its provider
pub fn source_for_year(year: i32) -> DataSource {
    if year <= LAST_ARCHIVED_SEASON {
        DataSource::Jolpica
    } else {
        DataSource::Openf1
    }
}

/// Shared handle to both upstream clients, cloned per request
#[derive(Clone)]
pub struct Providers {
    pub jolpica: Arc<JolpicaClient>,
    pub openf1: Arc<OpenF1Client>,
}

/// Resolve the defining fetch of an operation.
///
/// A non-success upstream status means the resource does not exist and
/// becomes Not-Found with `detail`; transport faults surface as upstream
/// errors.
pub(crate) fn require(
    result: FetchResult<Vec<Value>>,
    detail: &str,
) -> Result<Vec<Value>, ApiError> {
    match result {
        Ok(entries) => Ok(entries),
        Err(FetchError::Status(status)) => {
            warn!("defining fetch returned {status}: {detail}");
            Err(ApiError::NotFound(detail.to_string()))
        }
        Err(err) => Err(ApiError::Upstream(err.to_string())),
    }
}

/// Fold a secondary fetch into the envelope, degrading to empty on any
/// failure.
///
/// Once the defining resource is known to exist, partial data beats a
/// failed request.
pub(crate) fn degrade_to_empty(result: FetchResult<Vec<Value>>, what: &str) -> Vec<Value> {
    match result {
        Ok(entries) => entries,
        Err(err) => {
            warn!("secondary fetch for {what} failed, degrading to empty: {err}");
            Vec::new()
        }
    }
}

/// Keep the meetings that are championship rounds.
///
/// Pre-season testing has no "Grand Prix" in its meeting name; the match
/// is a case-sensitive substring check.
pub(crate) fn grand_prix_meetings(meetings: Vec<Value>) -> Vec<Value> {
    meetings
        .into_iter()
        .filter(|meeting| {
            meeting
                .get("meeting_name")
                .and_then(Value::as_str)
                .map(|name| name.contains("Grand Prix"))
                .unwrap_or(false)
        })
        .collect()
}

/// Look up a meeting by 1-based round number
pub(crate) fn meeting_for_round(meetings: &[Value], round: u32) -> Option<&Value> {
    if round == 0 {
        return None;
    }
    meetings.get(round as usize - 1)
}

/// Read a required integer field from an upstream record
pub(crate) fn int_field(value: &Value, field: &str) -> Result<i64, ApiError> {
    value
        .get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::Internal(format!("upstream record is missing `{field}`")))
}
