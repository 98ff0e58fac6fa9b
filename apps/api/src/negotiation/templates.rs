//! Template table for the negotiation pack.
//!
//! The scripts are data, not logic: fixed strings with named placeholders
//! filled from the analysis. Currency placeholders arrive pre-formatted
//! (`$95,000`), so the templates never do arithmetic.

use crate::benchmark::models::SalaryAnalysis;
use crate::money::format_currency;

/// Placeholder values extracted from one analysis. Every figure a template
/// can surface: role, location, industry, level, and the benchmark numbers.
#[derive(Debug, Clone)]
pub struct TemplateFacts {
    pub job_title: String,
    pub years_experience: String,
    pub city: String,
    pub industry: String,
    pub level_used: String,
    pub market_median: String,
    pub current_salary: String,
    pub gap: String,
    pub target_salary: String,
}

impl TemplateFacts {
    pub fn from_analysis(analysis: &SalaryAnalysis, target_raise: i64) -> Self {
        let input = &analysis.input;
        let gap = analysis.delta.abs().round() as i64;
        Self {
            job_title: input.job_title.clone(),
            years_experience: input.years_experience.to_string(),
            city: input.city.clone(),
            industry: input.industry.clone(),
            level_used: analysis.level_used.clone(),
            market_median: format_currency(analysis.market_median),
            current_salary: format_currency(input.current_salary.round() as i64),
            gap: format_currency(gap),
            target_salary: format_currency(input.current_salary.round() as i64 + target_raise),
        }
    }

    /// Substitutes every `{placeholder}` occurrence in `template`.
    pub fn fill(&self, template: &str) -> String {
        template
            .replace("{jobTitle}", &self.job_title)
            .replace("{yearsExperience}", &self.years_experience)
            .replace("{city}", &self.city)
            .replace("{industry}", &self.industry)
            .replace("{levelUsed}", &self.level_used)
            .replace("{marketMedian}", &self.market_median)
            .replace("{currentSalary}", &self.current_salary)
            .replace("{gap}", &self.gap)
            .replace("{targetSalary}", &self.target_salary)
    }
}

pub const EMAIL_SCRIPT: &str = "Subject: Compensation Discussion Request

Hi [Manager's Name],

I'd like to schedule time to discuss my compensation. Over the past [timeframe], I've contributed meaningfully to [specific project/results], and I want to ensure my pay reflects my current role and market conditions.

Based on my research into market rates for {jobTitle} roles with {yearsExperience} years of experience in {city}, the current market median is {marketMedian}. My current compensation of {currentSalary} is below this benchmark.

I'd like to discuss an adjustment to {targetSalary}, which aligns with my contributions and market data.

I'm happy to share my research and discuss this at your convenience. Could we find 30 minutes this week or next?

Best regards,
[Your Name]";

pub const TALKING_POINTS: &[&str] = &[
    "Open with appreciation for the role and team, then transition to the data.",
    "State your research: \"Market data shows {jobTitle} roles at the {levelUsed} in {city} within {industry} have a median salary of {marketMedian}.\"",
    "Quantify your contributions: Reference 2-3 specific projects, outcomes, or metrics you've delivered.",
    "Make the ask: \"Based on this data and my track record, I'm requesting an adjustment to {targetSalary}.\"",
    "If they need time: \"I understand this may need approval. What timeline works for a follow-up?\"",
    "Close with commitment: \"I'm invested in this team and want to continue growing here.\"",
];

/// `(objection, response_template)` pairs.
pub const OBJECTION_HANDLING: &[(&str, &str)] = &[
    (
        "We don't have the budget right now.",
        "\"I understand budget constraints. Could we agree on a timeline — perhaps a review in 3 months with a defined target of {targetSalary}? I'm also open to discussing non-salary compensation like additional equity, a signing bonus, or extra PTO.\"",
    ),
    (
        "You're already being compensated fairly.",
        "\"I appreciate that perspective. Here's the market data I've gathered — {jobTitle} roles at my level in {city} have a median of {marketMedian}. My current salary is {gap} below that. I'd welcome reviewing this data together.\"",
    ),
    (
        "Let's revisit this at your next review.",
        "\"I'd like to formalize that. Could we document a target adjustment at my next review? I want to make sure we're aligned on the path forward, with a clear benchmark of {targetSalary}.\"",
    ),
    (
        "Your performance needs to improve first.",
        "\"I'd like to understand what specific milestones you'd need to see. Could we set clear, measurable goals with a defined compensation adjustment tied to meeting them within 90 days?\"",
    ),
];

pub const IF_DENIED_STRATEGY: &[&str] = &[
    "Request a written development plan with compensation milestones tied to specific deliverables within 90 days.",
    "Negotiate non-salary benefits: equity/stock options, signing bonus, additional PTO, flexible schedule, professional development budget, or title adjustment.",
    "Ask for the denial reasoning in writing and a specific date for re-evaluation.",
    "Begin documenting achievements weekly to build a stronger case for the next discussion.",
    "Evaluate external market opportunities to understand your true leverage — an outside offer is the strongest negotiation tool.",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> TemplateFacts {
        TemplateFacts {
            job_title: "Data Analyst".to_string(),
            years_experience: "4".to_string(),
            city: "Chicago".to_string(),
            industry: "Finance".to_string(),
            level_used: "Mid Level (3-6 years)".to_string(),
            market_median: "$111,721".to_string(),
            current_salary: "$85,000".to_string(),
            gap: "$26,721".to_string(),
            target_salary: "$107,713".to_string(),
        }
    }

    #[test]
    fn test_fill_substitutes_all_placeholders() {
        let rendered = facts().fill(EMAIL_SCRIPT);
        // Braces only appear in placeholders; a filled template has none.
        assert!(!rendered.contains('{'), "unfilled placeholder in: {rendered}");
        assert!(rendered.contains("Data Analyst"));
        assert!(rendered.contains("$111,721"));
        assert!(rendered.contains("$107,713"));
    }

    #[test]
    fn test_email_surfaces_role_location_and_figures() {
        let rendered = facts().fill(EMAIL_SCRIPT);
        for fact in ["Data Analyst", "Chicago", "$111,721", "$85,000", "$107,713"] {
            assert!(rendered.contains(fact), "email missing {fact}");
        }
    }

    #[test]
    fn test_objection_responses_keep_no_placeholders() {
        let f = facts();
        for (_, response) in OBJECTION_HANDLING {
            let rendered = f.fill(response);
            for token in [
                "{jobTitle}",
                "{city}",
                "{marketMedian}",
                "{gap}",
                "{targetSalary}",
            ] {
                assert!(!rendered.contains(token), "unfilled {token} in: {rendered}");
            }
        }
    }

    #[test]
    fn test_table_shapes() {
        assert_eq!(TALKING_POINTS.len(), 6);
        assert_eq!(OBJECTION_HANDLING.len(), 4);
        assert_eq!(IF_DENIED_STRATEGY.len(), 5);
    }
}
