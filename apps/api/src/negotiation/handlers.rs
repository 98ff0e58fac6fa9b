//! Axum route handlers for the Negotiation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::benchmark::calculator::analyze;
use crate::benchmark::handlers::validate_input;
use crate::benchmark::models::{SalaryAnalysis, SalaryInput};
use crate::errors::AppError;
use crate::negotiation::models::NegotiationPack;
use crate::negotiation::pack::generate_pack;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NegotiationResponse {
    pub analysis: SalaryAnalysis,
    pub pack: NegotiationPack,
}

/// POST /api/v1/negotiation-pack
///
/// Runs the benchmark, then derives the full pack from it. Generation is
/// unconditional — the results page decides what an above-market user sees.
pub async fn handle_negotiation_pack(
    State(state): State<AppState>,
    Json(input): Json<SalaryInput>,
) -> Result<Json<NegotiationResponse>, AppError> {
    validate_input(&input)?;

    let analysis = analyze(&state.reference, &input);
    let pack = generate_pack(&analysis);

    Ok(Json(NegotiationResponse { analysis, pack }))
}
