//! Annuity-due projection
//!
//! Contributions are made at the start of each month and compound monthly:
//!
//! ```text
//! FV = P × [((1 + r)^n − 1) / r] × (1 + r)
//! ```
//!
//! where `P` is the monthly contribution, `r = annual% / 12 / 100` and `n`
//! the number of months. `n` is a continuous exponent, so half-year plans
//! project without rounding the horizon.
//!
//! The projector never validates and never panics. Out-of-range input gives
//! meaningless numbers; overflow saturates to `i64::MAX` in the rounded
//! output.

use sip_model::{ProjectionResult, SipParameters, YearlyPoint, MONTHS_PER_YEAR};

/// Upper bound on the number of yearly points produced
pub const MAX_SERIES_YEARS: u32 = 10_000;

/// Exact (unrounded) position after a number of months
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulation {
    /// Contributions made
    pub principal: f64,
    /// Value minus contributions
    pub growth: f64,
    /// Value of the plan
    pub total: f64,
}

/// Monthly-compounding annuity-due projector
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector;

impl Projector {
    /// Create projector
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Exact position after `months` of contributions
    #[must_use]
    pub fn accumulate(&self, params: &SipParameters, months: f64) -> Accumulation {
        let contribution = params.monthly_contribution;
        let principal = contribution * months;

        // A nonzero annual rate can still underflow to a zero monthly rate.
        let rate = params.monthly_rate();
        let total = if rate == 0.0 {
            principal
        } else {
            contribution * annuity_due_factor(rate, months)
        };

        Accumulation {
            principal,
            growth: total - principal,
            total,
        }
    }

    /// Project totals over the full horizon plus one point per whole year
    ///
    /// # Preconditions
    /// `params` passed validation. Not re-checked here.
    #[must_use]
    pub fn project(&self, params: &SipParameters) -> ProjectionResult {
        let full = self.accumulate(params, params.total_months());

        let yearly_points = (1..=whole_years(params.duration_years))
            .map(|year| {
                let at_year = self.accumulate(params, f64::from(year) * MONTHS_PER_YEAR);
                YearlyPoint::from_exact(year, at_year.principal, at_year.total)
            })
            .collect();

        ProjectionResult::from_exact(full.principal, full.total, yearly_points)
    }
}

/// Project with a default [`Projector`]
#[inline]
#[must_use]
pub fn project(params: &SipParameters) -> ProjectionResult {
    Projector::new().project(params)
}

/// `((1 + r)^n − 1) / r × (1 + r)`
///
/// Uses `ln_1p`/`exp_m1` so very small rates keep their precision.
fn annuity_due_factor(rate: f64, months: f64) -> f64 {
    let growth_minus_one = (months * rate.ln_1p()).exp_m1();
    growth_minus_one / rate * (1.0 + rate)
}

/// Completed years in the horizon, capped at [`MAX_SERIES_YEARS`]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_years(duration_years: f64) -> u32 {
    if !duration_years.is_finite() || duration_years < 1.0 {
        return 0;
    }
    duration_years.floor().min(f64::from(MAX_SERIES_YEARS)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn reference_scenario() {
        let result = project(&SipParameters::new(5_000.0, 12.0, 10.0));
        assert_eq!(result.total_principal, 600_000);
        assert_eq!(result.maturity_value, 1_161_695);
        assert_eq!(result.total_growth, 561_695);
        assert_eq!(result.yearly_points.len(), 10);

        let first = result.yearly_points[0];
        assert_eq!(first.year, 1);
        assert_eq!(first.principal_to_date, 60_000);
        assert_eq!(result.yearly_points[9].total_to_date, result.maturity_value);
    }

    #[test]
    fn exact_accumulation_matches_closed_form() {
        let params = SipParameters::new(5_000.0, 12.0, 10.0);
        let acc = Projector::new().accumulate(&params, 120.0);
        let expected = 5_000.0 * ((1.01_f64.powf(120.0) - 1.0) / 0.01) * 1.01;
        assert_relative_eq!(acc.total, expected, max_relative = 1e-12);
        assert_relative_eq!(acc.growth, acc.total - acc.principal);
    }

    #[test]
    fn zero_rate_is_plain_sum() {
        let result = project(&SipParameters::new(2_500.0, 0.0, 3.0));
        assert_eq!(result.total_principal, 90_000);
        assert_eq!(result.maturity_value, 90_000);
        assert_eq!(result.total_growth, 0);
        assert!(result.yearly_points.iter().all(|p| p.growth_to_date == 0));
    }

    #[test]
    fn fractional_duration_keeps_whole_year_points() {
        let params = SipParameters::new(1_000.0, 10.0, 10.5);
        let result = project(&params);
        assert_eq!(result.yearly_points.len(), 10);
        assert_eq!(result.total_principal, 126_000);
        let last_whole_year = result.yearly_points[9];
        assert!(result.maturity_value > last_whole_year.total_to_date);
    }

    #[test]
    fn half_year_plan_has_no_points() {
        let result = project(&SipParameters::new(1_000.0, 12.0, 0.5));
        assert!(result.yearly_points.is_empty());
        assert_eq!(result.total_principal, 6_000);
        assert!(result.total_growth > 0);
    }

    #[test]
    fn tiny_rate_stays_close_to_principal() {
        let acc = Projector::new().accumulate(&SipParameters::new(1_000.0, 1e-12, 1.0), 12.0);
        assert_relative_eq!(acc.total, 12_000.0, max_relative = 1e-9);
        assert!(acc.growth.abs() < 1e-6);
    }

    #[test]
    fn subnormal_rate_is_treated_as_zero() {
        let params = SipParameters::new(5_000.0, 5e-324, 10.0);
        assert_eq!(params.monthly_rate(), 0.0);

        let result = project(&params);
        assert_eq!(result.total_principal, 600_000);
        assert_eq!(result.maturity_value, 600_000);
        assert_eq!(result.total_growth, 0);
        assert_eq!(result.yearly_points[0].growth_to_date, 0);
        assert_eq!(result.yearly_points[0].total_to_date, 60_000);
    }

    #[test]
    fn overflow_saturates_without_panicking() {
        let params = SipParameters::new(100_000_000.0, 999.0, 100.0);
        let result = project(&params);
        assert_eq!(result.maturity_value, i64::MAX);
        assert_eq!(result.yearly_points.len(), 100);
        assert_eq!(result.yearly_points[99].total_to_date, i64::MAX);
    }

    #[test]
    fn degenerate_input_does_not_panic() {
        let result = project(&SipParameters::new(-100.0, -2_400.0, -3.0));
        assert!(result.yearly_points.is_empty());

        let result = project(&SipParameters::new(f64::NAN, 12.0, f64::INFINITY));
        assert!(result.yearly_points.is_empty());
        assert_eq!(result.total_principal, 0);
    }

    #[test]
    fn series_is_capped() {
        assert_eq!(whole_years(1e12), MAX_SERIES_YEARS);
        assert_eq!(whole_years(0.99), 0);
        assert_eq!(whole_years(7.9), 7);
    }
}
