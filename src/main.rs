//! Service entry point

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use f1_gateway::aggregator::Providers;
use f1_gateway::api::build_router;
use f1_gateway::config::Settings;
use f1_gateway::upstream::{JolpicaClient, OpenF1Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("failed to load configuration")?;
    let timeout = settings.upstream_timeout();

    let providers = Providers {
        jolpica: Arc::new(
            JolpicaClient::new(settings.jolpica_base_url.clone(), timeout)
                .context("failed to build Jolpica client")?,
        ),
        openf1: Arc::new(
            OpenF1Client::new(settings.openf1_base_url.clone(), timeout)
                .context("failed to build OpenF1 client")?,
        ),
    };

    let app = build_router(providers);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("F1 data gateway listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
