mod benchmark;
mod config;
mod errors;
mod money;
mod negotiation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::benchmark::reference::ReferenceData;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Paygrade API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static market tables once; handlers share them read-only.
    let reference = Arc::new(ReferenceData::builtin());
    info!(
        "Reference data loaded: {} roles, {} locations, {} industries, {} size buckets",
        reference.role_count(),
        reference.location_names().len(),
        reference.industry_names().len(),
        reference.company_size_names().len()
    );

    let state = AppState {
        config: config.clone(),
        reference,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
