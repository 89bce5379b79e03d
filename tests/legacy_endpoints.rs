//! End-to-end tests for the archive-backed (Jolpica) paths
//!
//! The router is driven directly with `tower::ServiceExt::oneshot`; the
//! upstream archive is a mockito server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use f1_gateway::aggregator::Providers;
use f1_gateway::api::build_router;
use f1_gateway::upstream::{JolpicaClient, OpenF1Client};

/// Address nothing listens on, for the provider a test never touches
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

fn gateway(jolpica_url: &str, openf1_url: &str) -> Router {
    let timeout = Duration::from_secs(2);
    build_router(Providers {
        jolpica: Arc::new(JolpicaClient::new(jolpica_url, timeout).unwrap()),
        openf1: Arc::new(OpenF1Client::new(openf1_url, timeout).unwrap()),
    })
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn race_table(races: Value) -> String {
    json!({"MRData": {"RaceTable": {"Races": races}}}).to_string()
}

#[tokio::test]
async fn test_root_liveness_marker() {
    let app = gateway(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "F1 Race Data API");
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_seasons_listing_spans_2005_to_current() {
    let app = gateway(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/seasons").await;

    assert_eq!(status, StatusCode::OK);
    let seasons = body["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), body["total"].as_u64().unwrap() as usize);

    assert_eq!(seasons[0]["year"], 2005);
    assert_eq!(seasons[0]["data_source"], "jolpica");

    let last = seasons.last().unwrap();
    assert_eq!(last["data_source"], "openf1");

    // The 2022/2023 provider boundary is visible in the listing
    let boundary = seasons.iter().find(|s| s["year"] == 2022).unwrap();
    assert_eq!(boundary["data_source"], "jolpica");
    let after = seasons.iter().find(|s| s["year"] == 2023).unwrap();
    assert_eq!(after["data_source"], "openf1");
}

#[tokio::test]
async fn test_season_details_passes_races_through() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2020.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(race_table(json!([
            {"raceName": "Austrian Grand Prix", "round": "1"},
            {"raceName": "Styrian Grand Prix", "round": "2"},
            {"raceName": "Hungarian Grand Prix", "round": "3"}
        ])))
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/seasons/2020").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2020);
    assert_eq!(body["total_races"], 3);
    assert_eq!(body["races"][0]["raceName"], "Austrian Grand Prix");
    assert_eq!(body["data_source"], "jolpica");
}

#[tokio::test]
async fn test_season_details_not_found_passthrough() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/1890.json")
        .with_status(404)
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/seasons/1890").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Season not found");
    assert!(body.get("races").is_none());
}

#[tokio::test]
async fn test_season_drivers() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2021/drivers.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"MRData": {"DriverTable": {"Drivers": [
                {"driverId": "hamilton", "givenName": "Lewis", "familyName": "Hamilton"},
                {"driverId": "max_verstappen", "givenName": "Max", "familyName": "Verstappen"}
            ]}}})
            .to_string(),
        )
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/seasons/2021/drivers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["drivers"][0]["givenName"], "Lewis");
    assert_eq!(body["data_source"], "jolpica");
}

#[tokio::test]
async fn test_season_constructors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2015/constructors.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"MRData": {"ConstructorTable": {"Constructors": [
                {"constructorId": "mercedes", "name": "Mercedes", "nationality": "German"}
            ]}}})
            .to_string(),
        )
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/seasons/2015/constructors").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["constructors"][0]["nationality"], "German");
}

#[tokio::test]
async fn test_driver_standings_has_no_message_field() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2019/driverStandings.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"MRData": {"StandingsTable": {"StandingsLists": [
                {"season": "2019", "DriverStandings": [{"position": "1"}]}
            ]}}})
            .to_string(),
        )
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/seasons/2019/standings/drivers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["standings"][0]["season"], "2019");
    assert_eq!(body["data_source"], "jolpica");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_race_details_degrades_failed_qualifying_to_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2020/1/results.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(race_table(json!([
            {"raceName": "Austrian Grand Prix", "Results": [{"position": "1"}]}
        ])))
        .create_async()
        .await;
    server
        .mock("GET", "/2020/1/qualifying.json")
        .with_status(500)
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/races/2020/1").await;

    // Partial data beats total failure once the race is known to exist
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["race_data"][0]["raceName"], "Austrian Grand Prix");
    assert_eq!(body["qualifying_data"], json!([]));
}

#[tokio::test]
async fn test_race_details_not_found_when_results_missing() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2020/99/results.json")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/2020/99/qualifying.json")
        .with_status(404)
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/races/2020/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Race not found");
}

#[tokio::test]
async fn test_qualifying_results() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2020/1/qualifying.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(race_table(json!([
            {"raceName": "Austrian Grand Prix", "QualifyingResults": [{"position": "1"}]}
        ])))
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/races/2020/1/qualifying").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2020);
    assert_eq!(body["round"], 1);
    assert_eq!(body["qualifying_data"][0]["QualifyingResults"][0]["position"], "1");
}

#[tokio::test]
async fn test_race_results_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2020/23/results.json")
        .with_status(404)
        .create_async()
        .await;

    let app = gateway(&server.url(), DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/races/2020/23/race").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Race results not found");
}

#[tokio::test]
async fn test_transport_failure_is_a_generic_upstream_error() {
    // The archive is unreachable; the caller gets a generic 500 and no
    // upstream details
    let app = gateway(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let (status, body) = get(app, "/api/seasons/2020").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "External API error");
}

#[tokio::test]
async fn test_metrics_endpoint_exports_text_format() {
    let app = gateway(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
