//! HTTP handlers for the aggregation API
//!
//! Handlers are thin: extract path parameters, call into the aggregator,
//! wrap the envelope in `Json`. All error mapping lives in
//! [`crate::error::ApiError`].

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::aggregator::{self, Providers};
use crate::api::models::{
    ConstructorsResponse, DriversResponse, QualifyingResponse, RaceDetailResponse,
    RaceResultsResponse, RootResponse, SeasonDetailResponse, SeasonsResponse, StandingsResponse,
};
use crate::error::Result;

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "F1 Race Data API".to_string(),
        status: "active".to_string(),
    })
}

/// GET /api/seasons
pub async fn list_seasons() -> Json<SeasonsResponse> {
    Json(aggregator::list_seasons())
}

/// GET /api/seasons/{year}
pub async fn season_details(
    State(providers): State<Providers>,
    Path(year): Path<i32>,
) -> Result<Json<SeasonDetailResponse>> {
    info!("season details request: year={year}");
    aggregator::season_details(&providers, year).await.map(Json)
}

/// GET /api/seasons/{year}/drivers
pub async fn season_drivers(
    State(providers): State<Providers>,
    Path(year): Path<i32>,
) -> Result<Json<DriversResponse>> {
    info!("season drivers request: year={year}");
    aggregator::season_drivers(&providers, year).await.map(Json)
}

/// GET /api/seasons/{year}/constructors
pub async fn season_constructors(
    State(providers): State<Providers>,
    Path(year): Path<i32>,
) -> Result<Json<ConstructorsResponse>> {
    info!("season constructors request: year={year}");
    aggregator::season_constructors(&providers, year)
        .await
        .map(Json)
}

/// GET /api/seasons/{year}/standings/drivers
pub async fn driver_standings(
    State(providers): State<Providers>,
    Path(year): Path<i32>,
) -> Result<Json<StandingsResponse>> {
    info!("driver standings request: year={year}");
    aggregator::driver_standings(&providers, year)
        .await
        .map(Json)
}

/// GET /api/races/{year}/{round}
pub async fn race_details(
    State(providers): State<Providers>,
    Path((year, round)): Path<(i32, u32)>,
) -> Result<Json<RaceDetailResponse>> {
    info!("race details request: year={year} round={round}");
    aggregator::race_details(&providers, year, round)
        .await
        .map(Json)
}

/// GET /api/races/{year}/{round}/qualifying
pub async fn qualifying_results(
    State(providers): State<Providers>,
    Path((year, round)): Path<(i32, u32)>,
) -> Result<Json<QualifyingResponse>> {
    info!("qualifying results request: year={year} round={round}");
    aggregator::qualifying_results(&providers, year, round)
        .await
        .map(Json)
}

/// GET /api/races/{year}/{round}/race
pub async fn race_results(
    State(providers): State<Providers>,
    Path((year, round)): Path<(i32, u32)>,
) -> Result<Json<RaceResultsResponse>> {
    info!("race results request: year={year} round={round}");
    aggregator::race_results(&providers, year, round)
        .await
        .map(Json)
}
