//! Data models for the negotiation pack.

use serde::{Deserialize, Serialize};

/// Raise figures derived from the gap to median (fixed 0.60/0.85/1.10
/// policy ratios), in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseRange {
    pub low: i64,
    pub target: i64,
    pub high: i64,
}

/// A likely pushback line paired with a scripted counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectionResponse {
    pub objection: String,
    pub response: String,
}

/// One year of the three-year projection. `growth` is the formatted
/// incremental benefit of the raise over the no-raise track, not the
/// year-over-year change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: u32,
    pub projected: i64,
    pub growth: String,
}

/// Everything the results page reveals after unlock. Derived entirely from
/// one `SalaryAnalysis` — generation is unconditional; only the caller
/// decides whether an above-market user ever sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationPack {
    pub raise_range: RaiseRange,
    pub email_script: String,
    pub talking_points: Vec<String>,
    pub objection_handling: Vec<ObjectionResponse>,
    pub if_denied_strategy: Vec<String>,
    pub three_year_model: Vec<YearProjection>,
    /// 0-10 urgency heuristic from the gap-to-median ratio.
    pub risk_of_staying_score: u8,
}
