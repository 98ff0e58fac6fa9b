pub mod billing;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::benchmark::handlers as benchmark_handlers;
use crate::negotiation::handlers as negotiation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Benchmark API
        .route("/api/v1/options", get(benchmark_handlers::handle_options))
        .route("/api/v1/analyze", post(benchmark_handlers::handle_analyze))
        // Negotiation API
        .route(
            "/api/v1/negotiation-pack",
            post(negotiation_handlers::handle_negotiation_pack),
        )
        // Payment unlock stubs
        .route("/api/v1/checkout", post(billing::checkout_handler))
        .route("/api/v1/verify", post(billing::verify_handler))
        .with_state(state)
}
