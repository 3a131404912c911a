//! Plan inputs and the fields that address them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Months in one year of contributions
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly contribution restored on reset
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 5_000.0;

/// Annual growth rate (percent) restored on reset
pub const DEFAULT_ANNUAL_GROWTH_RATE_PERCENT: f64 = 12.0;

/// Duration (years) restored on reset
pub const DEFAULT_DURATION_YEARS: f64 = 10.0;

/// Inputs of one projection
///
/// A value that was never entered is carried as NaN so the validator can
/// report it as required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SipParameters {
    /// Amount invested at the start of every month
    pub monthly_contribution: f64,
    /// Expected yearly return in percent (12.0 means 12%)
    pub annual_growth_rate_percent: f64,
    /// Investment horizon in years, fractions allowed
    pub duration_years: f64,
}

impl SipParameters {
    /// Create parameters from raw values
    #[inline]
    #[must_use]
    pub const fn new(
        monthly_contribution: f64,
        annual_growth_rate_percent: f64,
        duration_years: f64,
    ) -> Self {
        Self {
            monthly_contribution,
            annual_growth_rate_percent,
            duration_years,
        }
    }

    /// Value held for an input field
    ///
    /// Returns `None` for [`Field::General`], which carries no value.
    #[inline]
    #[must_use]
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::MonthlyContribution => Some(self.monthly_contribution),
            Field::AnnualGrowthRatePercent => Some(self.annual_growth_rate_percent),
            Field::DurationYears => Some(self.duration_years),
            Field::General => None,
        }
    }

    /// Copy with one field replaced
    ///
    /// Setting [`Field::General`] returns the parameters unchanged.
    #[inline]
    #[must_use]
    pub fn with(mut self, field: Field, value: f64) -> Self {
        match field {
            Field::MonthlyContribution => self.monthly_contribution = value,
            Field::AnnualGrowthRatePercent => self.annual_growth_rate_percent = value,
            Field::DurationYears => self.duration_years = value,
            Field::General => {}
        }
        self
    }

    /// True when every input is a finite number
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.monthly_contribution.is_finite()
            && self.annual_growth_rate_percent.is_finite()
            && self.duration_years.is_finite()
    }

    /// Growth rate per month as a fraction (12% a year is 0.01)
    #[inline]
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.annual_growth_rate_percent / MONTHS_PER_YEAR / 100.0
    }

    /// Horizon in months, fractional when the duration is
    #[inline]
    #[must_use]
    pub fn total_months(&self) -> f64 {
        self.duration_years * MONTHS_PER_YEAR
    }
}

impl Default for SipParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_MONTHLY_CONTRIBUTION,
            DEFAULT_ANNUAL_GROWTH_RATE_PERCENT,
            DEFAULT_DURATION_YEARS,
        )
    }
}

/// Field a validation issue is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Monthly contribution amount
    MonthlyContribution,
    /// Annual growth rate in percent
    AnnualGrowthRatePercent,
    /// Investment duration in years
    DurationYears,
    /// Not tied to a single input
    General,
}

impl Field {
    /// The three input fields, in form order
    pub const INPUTS: [Field; 3] = [
        Field::MonthlyContribution,
        Field::AnnualGrowthRatePercent,
        Field::DurationYears,
    ];

    /// Stable key used on the wire
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::MonthlyContribution => "monthlyContribution",
            Field::AnnualGrowthRatePercent => "annualGrowthRatePercent",
            Field::DurationYears => "durationYears",
            Field::General => "general",
        }
    }

    /// Label used at the start of issue messages
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::MonthlyContribution => "SIP amount",
            Field::AnnualGrowthRatePercent => "Return rate",
            Field::DurationYears => "Duration",
            Field::General => "Input",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse raw text from an input box
///
/// Accepts an optional rupee sign, digit grouping commas, a trailing percent
/// sign and surrounding whitespace. Empty or unparseable text becomes NaN,
/// which the validator reports as a missing value.
#[must_use]
pub fn parse_input(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| !matches!(c, '₹' | ',') && !c.is_whitespace())
        .collect();

    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}
