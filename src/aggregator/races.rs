//! Race-level operations keyed by `(year, round)`
//!
//! The live path resolves the round to a Grand Prix meeting, the meeting
//! to its sessions, and attaches per-session driver, position and lap
//! data. The canonical race-detail envelope carries all three
//! sub-resources for both the Race and Qualifying sessions.

use super::{
    degrade_to_empty, grand_prix_meetings, int_field, meeting_for_round, require,
    source_for_year, DataSource, Providers, QUALIFYING_SESSION, RACE_SESSION,
};
use crate::api::models::{QualifyingResponse, RaceDetailResponse, RaceResultsResponse};
use crate::error::ApiError;
use serde_json::{json, Map, Value};

/// Race detail: results of both the race and qualifying sessions
pub async fn race_details(
    providers: &Providers,
    year: i32,
    round: u32,
) -> Result<RaceDetailResponse, ApiError> {
    let data_source = source_for_year(year);

    match data_source {
        DataSource::Jolpica => {
            // Independent fetches; results is defining, qualifying degrades
            let (race, qualifying) = futures::join!(
                providers.jolpica.race_results(year, round),
                providers.jolpica.qualifying_results(year, round),
            );

            let race_data = require(race, "Race not found")?;
            let qualifying_data = degrade_to_empty(qualifying, "qualifying results");

            Ok(RaceDetailResponse {
                year,
                round,
                race_data: Value::Array(race_data),
                qualifying_data: Value::Array(qualifying_data),
                data_source,
            })
        }
        DataSource::Openf1 => {
            let meeting = resolve_meeting(providers, year, round).await?;
            let meeting_key = int_field(&meeting, "meeting_key")?;

            let sessions = degrade_to_empty(
                providers.openf1.sessions(meeting_key, None).await,
                "meeting sessions",
            );
            let race_session = find_session(&sessions, RACE_SESSION);
            let qualifying_session = find_session(&sessions, QUALIFYING_SESSION);

            let race_data = session_envelope(providers, &meeting, race_session).await?;
            let qualifying_data =
                session_envelope(providers, &meeting, qualifying_session).await?;

            Ok(RaceDetailResponse {
                year,
                round,
                race_data,
                qualifying_data,
                data_source,
            })
        }
    }
}

/// Qualifying results for one round
pub async fn qualifying_results(
    providers: &Providers,
    year: i32,
    round: u32,
) -> Result<QualifyingResponse, ApiError> {
    let data_source = source_for_year(year);

    let qualifying_data = match data_source {
        DataSource::Jolpica => Value::Array(require(
            providers.jolpica.qualifying_results(year, round).await,
            "Qualifying results not found",
        )?),
        DataSource::Openf1 => {
            single_session_envelope(providers, year, round, QUALIFYING_SESSION).await?
        }
    };

    Ok(QualifyingResponse {
        year,
        round,
        qualifying_data,
        data_source,
    })
}

/// Race results for one round
pub async fn race_results(
    providers: &Providers,
    year: i32,
    round: u32,
) -> Result<RaceResultsResponse, ApiError> {
    let data_source = source_for_year(year);

    let race_data = match data_source {
        DataSource::Jolpica => Value::Array(require(
            providers.jolpica.race_results(year, round).await,
            "Race results not found",
        )?),
        DataSource::Openf1 => {
            single_session_envelope(providers, year, round, RACE_SESSION).await?
        }
    };

    Ok(RaceResultsResponse {
        year,
        round,
        race_data,
        data_source,
    })
}

/// Resolve `(year, round)` to a Grand Prix meeting.
///
/// The meetings fetch is the defining call; a round outside the 1-based
/// range of the filtered list is Not-Found.
async fn resolve_meeting(
    providers: &Providers,
    year: i32,
    round: u32,
) -> Result<Value, ApiError> {
    let meetings = require(providers.openf1.meetings(year).await, "Season not found")?;
    let races = grand_prix_meetings(meetings);

    meeting_for_round(&races, round)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("Race round not found".to_string()))
}

/// First session of a meeting with the given name
fn find_session<'a>(sessions: &'a [Value], name: &str) -> Option<&'a Value> {
    sessions
        .iter()
        .find(|session| session.get("session_name").and_then(Value::as_str) == Some(name))
}

/// Build a per-session result object for the combined race-detail view.
///
/// Without a session of the wanted kind the object carries only the
/// meeting.
async fn session_envelope(
    providers: &Providers,
    meeting: &Value,
    session: Option<&Value>,
) -> Result<Value, ApiError> {
    let mut envelope = Map::new();
    envelope.insert("meeting".to_string(), meeting.clone());

    if let Some(session) = session {
        let session_key = int_field(session, "session_key")?;
        let (drivers, positions, laps) = session_data(providers, session_key).await;
        envelope.insert("session".to_string(), session.clone());
        envelope.insert("drivers".to_string(), Value::Array(drivers));
        envelope.insert("positions".to_string(), Value::Array(positions));
        envelope.insert("laps".to_string(), Value::Array(laps));
    }

    Ok(Value::Object(envelope))
}

/// Locate the named session for a round and attach its sub-resources.
///
/// The session lookup is best-effort on endpoints whose sole purpose is
/// one session kind: a meeting without such a session yields a
/// meeting-only envelope with empty data lists, never an error.
async fn single_session_envelope(
    providers: &Providers,
    year: i32,
    round: u32,
    session_name: &str,
) -> Result<Value, ApiError> {
    let meeting = resolve_meeting(providers, year, round).await?;
    let meeting_key = int_field(&meeting, "meeting_key")?;

    let sessions = degrade_to_empty(
        providers.openf1.sessions(meeting_key, Some(session_name)).await,
        "named session lookup",
    );

    match sessions.into_iter().next() {
        Some(session) => {
            let session_key = int_field(&session, "session_key")?;
            let (drivers, positions, laps) = session_data(providers, session_key).await;
            Ok(json!({
                "meeting": meeting,
                "session": session,
                "drivers": drivers,
                "positions": positions,
                "laps": laps,
            }))
        }
        None => Ok(json!({
            "meeting": meeting,
            "drivers": [],
            "positions": [],
            "laps": [],
        })),
    }
}

/// Fetch the three session sub-resources concurrently.
///
/// They share no data dependency, and each degrades to an empty list on
/// failure.
async fn session_data(
    providers: &Providers,
    session_key: i64,
) -> (Vec<Value>, Vec<Value>, Vec<Value>) {
    let (drivers, positions, laps) = futures::join!(
        providers.openf1.drivers(session_key),
        providers.openf1.positions(session_key),
        providers.openf1.laps(session_key),
    );

    (
        degrade_to_empty(drivers, "session drivers"),
        degrade_to_empty(positions, "session positions"),
        degrade_to_empty(laps, "session laps"),
    )
}
