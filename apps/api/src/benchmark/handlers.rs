//! Axum route handlers for the Benchmark API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::benchmark::calculator::analyze;
use crate::benchmark::models::{SalaryAnalysis, SalaryInput};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub roles: Vec<String>,
    pub locations: Vec<String>,
    pub industries: Vec<String>,
    pub company_sizes: Vec<String>,
}

/// GET /api/v1/options
///
/// The fixed vocabularies the form layer populates its selects from.
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let owned = |v: Vec<&str>| -> Vec<String> { v.into_iter().map(str::to_string).collect() };
    Json(OptionsResponse {
        roles: owned(state.reference.role_names()),
        locations: owned(state.reference.location_names()),
        industries: owned(state.reference.industry_names()),
        company_sizes: owned(state.reference.company_size_names()),
    })
}

/// POST /api/v1/analyze
///
/// Validates the raw form input, then runs the benchmark. The calculator
/// itself never fails; every rejection happens here at the boundary.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(input): Json<SalaryInput>,
) -> Result<Json<SalaryAnalysis>, AppError> {
    validate_input(&input)?;
    Ok(Json(analyze(&state.reference, &input)))
}

/// Boundary validation shared by the analyze and negotiation endpoints.
/// NaN and non-positive salaries are rejected here so they never reach the
/// pure core, which is total but unguarded.
pub fn validate_input(input: &SalaryInput) -> Result<(), AppError> {
    let required = [
        ("jobTitle", &input.job_title),
        ("city", &input.city),
        ("industry", &input.industry),
        ("companySize", &input.company_size),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }
    if !input.current_salary.is_finite() || input.current_salary <= 0.0 {
        return Err(AppError::Validation(
            "currentSalary must be a positive number".to_string(),
        ));
    }
    Ok(())
}
