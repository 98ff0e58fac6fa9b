//! Data models for the benchmark module.
//!
//! Field names serialize in camelCase — the wire contract the form and
//! results pages consume.

use serde::{Deserialize, Serialize};

/// Experience bands used to select a role's salary sub-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Human-readable label shown in the analysis and negotiation templates.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level (0-2 years)",
            ExperienceLevel::Mid => "Mid Level (3-6 years)",
            ExperienceLevel::Senior => "Senior Level (7+ years)",
        }
    }
}

/// Where the salary sits relative to the adjusted market band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SalaryStatus {
    Underpaid,
    MarketAligned,
    AboveMarket,
}

/// Caller-provided input. The handler layer validates non-empty strings and
/// a positive, finite salary before this reaches the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    pub job_title: String,
    pub years_experience: u32,
    pub city: String,
    pub industry: String,
    pub current_salary: f64,
    pub company_size: String,
}

/// Full benchmark result for one input. Computed on demand, never cached —
/// a pure function of the input and the static reference tables.
///
/// Invariant: `market_low <= market_median <= market_high`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryAnalysis {
    pub input: SalaryInput,
    pub market_low: i64,
    pub market_median: i64,
    pub market_high: i64,
    /// Piecewise-linear band position, always within [5, 95].
    pub percentile: u32,
    /// `current_salary - market_median` (negative when underpaid).
    pub delta: f64,
    pub delta_percent: f64,
    pub is_underpaid: bool,
    pub is_overpaid: bool,
    /// Flat 10-year extrapolation of the gap; 0 unless underpaid.
    pub lifetime_impact: f64,
    pub status: SalaryStatus,
    pub level_used: String,
}
