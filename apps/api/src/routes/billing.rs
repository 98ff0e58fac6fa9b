//! Payment unlock stubs.
//!
//! Stripe is not wired up. Checkout echoes the caller's params with a
//! simulated unlock, and verify always confirms. Real integration replaces
//! both bodies without changing the route shapes.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    /// Analysis query params to carry through the checkout redirect.
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// POST /api/v1/checkout
pub async fn checkout_handler(Json(request): Json<CheckoutRequest>) -> Json<Value> {
    Json(json!({
        "url": null,
        "message": "Stripe not configured. Unlock simulated.",
        "params": request.params,
    }))
}

/// POST /api/v1/verify
pub async fn verify_handler(Json(request): Json<VerifyRequest>) -> Json<Value> {
    Json(json!({
        "verified": true,
        "sessionId": request.session_id,
    }))
}
