//! Testing utilities for SIP Planner workspace
//!
//! Shared fixtures, strategies, and assertions.

#![allow(missing_docs)]

use proptest::prelude::*;
use sip_model::{ProjectionResult, SipParameters};

/// The worked example: ₹5,000 a month at 12% for 10 years
pub fn reference_params() -> SipParameters {
    SipParameters::new(5_000.0, 12.0, 10.0)
}

pub fn params(monthly: f64, rate: f64, years: f64) -> SipParameters {
    SipParameters::new(monthly, rate, years)
}

pub fn zero_rate_params(monthly: f64, years: f64) -> SipParameters {
    SipParameters::new(monthly, 0.0, years)
}

/// Inputs that pass both built-in rule sets
pub fn valid_params() -> impl Strategy<Value = SipParameters> {
    (1u32..=200_000, 0u32..=60, 1u32..=40).prop_map(|(monthly, half_rate, years)| {
        SipParameters::new(
            f64::from(monthly),
            f64::from(half_rate) * 0.5,
            f64::from(years),
        )
    })
}

/// Valid inputs whose duration may carry a half year
pub fn valid_params_with_fraction() -> impl Strategy<Value = SipParameters> {
    (valid_params(), any::<bool>()).prop_map(|(params, half)| {
        if half {
            SipParameters {
                duration_years: params.duration_years + 0.5,
                ..params
            }
        } else {
            params
        }
    })
}

/// Checks the structural invariants every projection must satisfy
pub fn assert_series_consistent(result: &ProjectionResult, params: &SipParameters) {
    let expected_len = params.duration_years.floor() as usize;
    assert_eq!(result.yearly_points.len(), expected_len, "series length");

    for (i, point) in result.yearly_points.iter().enumerate() {
        assert_eq!(point.year as usize, i + 1, "year numbering");
        assert_eq!(
            point.total_to_date,
            point.principal_to_date + point.growth_to_date,
            "point identity in year {}",
            point.year
        );
    }

    assert_eq!(
        result.maturity_value,
        result.total_principal + result.total_growth,
        "summary identity"
    );
}
