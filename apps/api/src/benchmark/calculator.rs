//! Benchmark Calculator — resolves a salary input against the reference
//! tables to a scaled market band, percentile rank, and pay status.
//!
//! `analyze` is total: unknown roles and multiplier keys fall back inside
//! the reference store, and no input combination produces an error. It is
//! also deterministic — no clock, no randomness, no cached state.

use crate::benchmark::models::{ExperienceLevel, SalaryAnalysis, SalaryInput, SalaryStatus};
use crate::benchmark::reference::ReferenceData;

/// Flat undiscounted extrapolation horizon for the underpaid gap.
const LIFETIME_YEARS: f64 = 10.0;

/// Maps years of experience to a band: 0-2 entry, 3-6 mid, 7+ senior.
pub fn experience_level(years: u32) -> ExperienceLevel {
    if years <= 2 {
        ExperienceLevel::Entry
    } else if years <= 6 {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Senior
    }
}

/// Four-piece linear percentile of `salary` within the scaled band.
///
/// Segments: [0, low] -> [5, 25], [low, median] -> [25, 50],
/// [median, high] -> [50, 75], [high, high*1.5] -> [75, 95]. The outer
/// ratios are clamped, so the result never leaves [5, 95].
pub fn percentile_rank(salary: f64, low: i64, median: i64, high: i64) -> u32 {
    let (low, median, high) = (low as f64, median as f64, high as f64);

    let value = if salary <= low {
        let ratio = (salary / low).max(0.0);
        5.0 + ratio * 20.0
    } else if salary <= median {
        let ratio = (salary - low) / (median - low);
        25.0 + ratio * 25.0
    } else if salary <= high {
        let ratio = (salary - median) / (high - median);
        50.0 + ratio * 25.0
    } else {
        let ceiling = high * 1.5;
        let ratio = ((salary - high) / (ceiling - high)).min(1.0);
        75.0 + ratio * 20.0
    };

    value.round() as u32
}

/// Runs the full benchmark for one input.
pub fn analyze(reference: &ReferenceData, input: &SalaryInput) -> SalaryAnalysis {
    let level = experience_level(input.years_experience);
    let band = reference.band_for(&input.job_title).band(level);

    let combined = reference.location_multiplier(&input.city)
        * reference.industry_multiplier(&input.industry)
        * reference.size_multiplier(&input.company_size);

    // Each band edge is rounded independently to the nearest dollar.
    let market_low = (band.p25 as f64 * combined).round() as i64;
    let market_median = (band.median as f64 * combined).round() as i64;
    let market_high = (band.p75 as f64 * combined).round() as i64;

    let percentile = percentile_rank(input.current_salary, market_low, market_median, market_high);

    let delta = input.current_salary - market_median as f64;
    let delta_percent = delta / market_median as f64 * 100.0;

    let mut status = if input.current_salary < market_low as f64 {
        SalaryStatus::Underpaid
    } else if input.current_salary > market_high as f64 {
        SalaryStatus::AboveMarket
    } else {
        SalaryStatus::MarketAligned
    };

    // Controlling business rule: anything below the median is underpaid,
    // even when the band test already said market-aligned.
    if input.current_salary < market_median as f64 {
        status = SalaryStatus::Underpaid;
    }

    let lifetime_impact = if status == SalaryStatus::Underpaid {
        delta.abs() * LIFETIME_YEARS
    } else {
        0.0
    };

    SalaryAnalysis {
        input: input.clone(),
        market_low,
        market_median,
        market_high,
        percentile,
        delta,
        delta_percent,
        is_underpaid: status == SalaryStatus::Underpaid,
        is_overpaid: status == SalaryStatus::AboveMarket,
        lifetime_impact,
        status,
        level_used: level.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(salary: f64) -> SalaryInput {
        SalaryInput {
            job_title: "Software Engineer".to_string(),
            years_experience: 5,
            city: "Austin".to_string(),
            industry: "Technology".to_string(),
            current_salary: salary,
            company_size: "201-1000".to_string(),
        }
    }

    #[test]
    fn test_experience_level_boundaries() {
        assert_eq!(experience_level(0), ExperienceLevel::Entry);
        assert_eq!(experience_level(1), ExperienceLevel::Entry);
        assert_eq!(experience_level(2), ExperienceLevel::Entry);
        assert_eq!(experience_level(3), ExperienceLevel::Mid);
        assert_eq!(experience_level(6), ExperienceLevel::Mid);
        assert_eq!(experience_level(7), ExperienceLevel::Senior);
        assert_eq!(experience_level(40), ExperienceLevel::Senior);
    }

    #[test]
    fn test_worked_example_austin_engineer() {
        // Mid band {105000, 125000, 150000}, combined 1.08 * 1.15 * 1.00.
        let data = ReferenceData::builtin();
        let analysis = analyze(&data, &input(95_000.0));

        assert_eq!(analysis.market_low, 130_410);
        assert_eq!(analysis.market_median, 155_250);
        assert_eq!(analysis.market_high, 186_300);
        assert_eq!(analysis.status, SalaryStatus::Underpaid);
        assert!(analysis.is_underpaid);
        assert!(!analysis.is_overpaid);
        assert_eq!(analysis.delta, -60_250.0);
        assert_eq!(analysis.lifetime_impact, 602_500.0);
        assert_eq!(analysis.level_used, "Mid Level (3-6 years)");
    }

    #[test]
    fn test_unknown_city_and_role_fall_back() {
        let data = ReferenceData::builtin();
        let mut inp = input(95_000.0);
        inp.job_title = "Nowhere Job".to_string();
        inp.city = "Nowhere".to_string();

        // Falls back to Software Engineer with neutral location; the
        // Technology and size multipliers still apply: 1.0 * 1.15 * 1.0.
        let analysis = analyze(&data, &inp);
        assert_eq!(analysis.market_median, (125_000.0_f64 * 1.15).round() as i64);
    }

    #[test]
    fn test_below_median_inside_band_is_still_underpaid() {
        // Between marketLow and marketMedian the band test says aligned,
        // but the below-median override controls.
        let data = ReferenceData::builtin();
        let analysis = analyze(&data, &input(140_000.0));
        assert!(analysis.market_low as f64 <= 140_000.0);
        assert!((analysis.market_median as f64) > 140_000.0);
        assert_eq!(analysis.status, SalaryStatus::Underpaid);
    }

    #[test]
    fn test_above_band_is_above_market() {
        let data = ReferenceData::builtin();
        let analysis = analyze(&data, &input(250_000.0));
        assert_eq!(analysis.status, SalaryStatus::AboveMarket);
        assert!(analysis.is_overpaid);
        assert_eq!(analysis.lifetime_impact, 0.0);
    }

    #[test]
    fn test_at_median_is_market_aligned() {
        let data = ReferenceData::builtin();
        let analysis = analyze(&data, &input(155_250.0));
        assert_eq!(analysis.status, SalaryStatus::MarketAligned);
        assert_eq!(analysis.percentile, 50);
        assert_eq!(analysis.lifetime_impact, 0.0);
    }

    #[test]
    fn test_percentile_at_band_edges() {
        // Exactly at marketHigh sits on the closed end of the third
        // segment, not the saturating fourth.
        assert_eq!(percentile_rank(186_300.0, 130_410, 155_250, 186_300), 75);
        assert_eq!(percentile_rank(130_410.0, 130_410, 155_250, 186_300), 25);
    }

    #[test]
    fn test_percentile_saturates_at_95() {
        assert_eq!(percentile_rank(10_000_000.0, 130_410, 155_250, 186_300), 95);
    }

    #[test]
    fn test_percentile_floor_is_5() {
        assert_eq!(percentile_rank(0.0, 130_410, 155_250, 186_300), 5);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let data = ReferenceData::builtin();
        let inp = input(95_000.0);
        assert_eq!(analyze(&data, &inp), analyze(&data, &inp));
    }

    proptest! {
        #[test]
        fn prop_band_stays_ordered(
            role_idx in 0usize..9,
            years in 0u32..45,
            loc_idx in 0usize..18,
            ind_idx in 0usize..13,
            size_idx in 0usize..5,
            salary in 1.0f64..1_000_000.0,
        ) {
            let data = ReferenceData::builtin();
            let inp = SalaryInput {
                job_title: data.role_names()[role_idx].to_string(),
                years_experience: years,
                city: data.location_names()[loc_idx].to_string(),
                industry: data.industry_names()[ind_idx].to_string(),
                current_salary: salary,
                company_size: data.company_size_names()[size_idx].to_string(),
            };
            let analysis = analyze(&data, &inp);
            prop_assert!(analysis.market_low <= analysis.market_median);
            prop_assert!(analysis.market_median <= analysis.market_high);
        }

        #[test]
        fn prop_percentile_bounded_and_monotonic(
            a in 0.0f64..2_000_000.0,
            b in 0.0f64..2_000_000.0,
        ) {
            let data = ReferenceData::builtin();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = analyze(&data, &input(lo)).percentile;
            let p_hi = analyze(&data, &input(hi)).percentile;
            prop_assert!((5..=95).contains(&p_lo));
            prop_assert!((5..=95).contains(&p_hi));
            prop_assert!(p_lo <= p_hi);
        }

        #[test]
        fn prop_below_median_is_always_underpaid(salary in 1.0f64..2_000_000.0) {
            let data = ReferenceData::builtin();
            let analysis = analyze(&data, &input(salary));
            if salary < analysis.market_median as f64 {
                prop_assert_eq!(analysis.status, SalaryStatus::Underpaid);
            }
        }

        #[test]
        fn prop_lifetime_impact_matches_status(salary in 1.0f64..2_000_000.0) {
            let data = ReferenceData::builtin();
            let analysis = analyze(&data, &input(salary));
            if analysis.is_underpaid {
                prop_assert_eq!(analysis.lifetime_impact, analysis.delta.abs() * 10.0);
            } else {
                prop_assert_eq!(analysis.lifetime_impact, 0.0);
            }
        }
    }
}
