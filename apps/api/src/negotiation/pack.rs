//! Negotiation Pack Generator — turns a salary analysis into a raise
//! recommendation, ready-to-send scripts, and a three-year projection.
//!
//! `generate_pack` is total and unconditional: it does not check
//! `is_underpaid`. Gating the pack to underpaid users is a presentation
//! decision owned by the caller.

use crate::benchmark::models::SalaryAnalysis;
use crate::money::format_currency;
use crate::negotiation::models::{
    NegotiationPack, ObjectionResponse, RaiseRange, YearProjection,
};
use crate::negotiation::templates::{
    TemplateFacts, EMAIL_SCRIPT, IF_DENIED_STRATEGY, OBJECTION_HANDLING, TALKING_POINTS,
};

// Policy ratios applied to the gap-to-median. Fixed constants, not derived.
const LOW_RAISE_RATIO: f64 = 0.60;
const TARGET_RAISE_RATIO: f64 = 0.85;
const HIGH_RAISE_RATIO: f64 = 1.10;

/// Assumed organic annual growth for the three-year projection.
const ANNUAL_GROWTH: f64 = 0.05;

/// Builds the full negotiation pack from one analysis.
pub fn generate_pack(analysis: &SalaryAnalysis) -> NegotiationPack {
    let gap = analysis.delta.abs();
    let target_raise = (gap * TARGET_RAISE_RATIO).round() as i64;
    let raise_range = RaiseRange {
        low: (gap * LOW_RAISE_RATIO).round() as i64,
        target: target_raise,
        high: (gap * HIGH_RAISE_RATIO).round() as i64,
    };

    let facts = TemplateFacts::from_analysis(analysis, target_raise);

    let email_script = facts.fill(EMAIL_SCRIPT);
    let talking_points = TALKING_POINTS.iter().map(|t| facts.fill(t)).collect();
    let objection_handling = OBJECTION_HANDLING
        .iter()
        .map(|(objection, response)| ObjectionResponse {
            objection: objection.to_string(),
            response: facts.fill(response),
        })
        .collect();
    let if_denied_strategy = IF_DENIED_STRATEGY.iter().map(|s| s.to_string()).collect();

    let three_year_model = project_three_years(analysis.input.current_salary, target_raise);

    // Urgency heuristic: gap relative to median, scaled and offset, clamped
    // to the 0-10 display range.
    let risk_of_staying_score = ((gap / analysis.market_median as f64) * 20.0 + 2.0)
        .round()
        .clamp(0.0, 10.0) as u8;

    NegotiationPack {
        raise_range,
        email_script,
        talking_points,
        objection_handling,
        if_denied_strategy,
        three_year_model,
        risk_of_staying_score,
    }
}

/// Dual-track projection. `projected` compounds the post-raise salary at 5%
/// a year; `growth` is the compounded post-raise value minus the compounded
/// pre-raise value — the benefit attributable to the raise, isolated from
/// the organic growth both tracks share. Each track is rounded before the
/// subtraction.
fn project_three_years(current: f64, target_raise: i64) -> Vec<YearProjection> {
    let adjusted = current + target_raise as f64;

    (1..=3u32)
        .map(|year| {
            let factor = (1.0 + ANNUAL_GROWTH).powi(year as i32 - 1);
            let projected = (adjusted * factor).round() as i64;
            let baseline = (current * factor).round() as i64;
            YearProjection {
                year,
                projected,
                growth: format_currency(projected - baseline),
            }
        })
        .collect()
}
