//! Router assembly: public routes plus CORS, tracing and metrics

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::aggregator::Providers;
use crate::api::handlers;
use crate::error::{ApiError, Result};
use crate::metrics::METRICS;

/// Build the public router
pub fn build_router(providers: Providers) -> Router {
    // The front-end is served from another origin; everything here is
    // read-only public data
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/metrics", get(export_metrics))
        .route("/api/seasons", get(handlers::list_seasons))
        .route("/api/seasons/:year", get(handlers::season_details))
        .route("/api/seasons/:year/drivers", get(handlers::season_drivers))
        .route(
            "/api/seasons/:year/constructors",
            get(handlers::season_constructors),
        )
        .route(
            "/api/seasons/:year/standings/drivers",
            get(handlers::driver_standings),
        )
        .route("/api/races/:year/:round", get(handlers::race_details))
        .route(
            "/api/races/:year/:round/qualifying",
            get(handlers::qualifying_results),
        )
        .route("/api/races/:year/:round/race", get(handlers::race_results))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(providers)
}

/// GET /metrics
async fn export_metrics() -> Result<String> {
    METRICS.export().map_err(|e| ApiError::Internal(e.to_string()))
}
