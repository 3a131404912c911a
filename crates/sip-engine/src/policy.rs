//! Validation bounds and named rule sets
//!
//! Two rule sets are supported. `standard` requires at least one year and
//! reports one issue per field. `strict` accepts half-year plans, words zero
//! and negative contributions differently, and evaluates every rule so a
//! field can carry more than one issue. `strict` is the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest accepted monthly contribution (₹10 crore)
pub const MAX_MONTHLY_CONTRIBUTION: f64 = 100_000_000.0;

/// Rates above this are flagged as unrealistic
pub const UNREALISTIC_RATE_PERCENT: f64 = 100.0;

/// Hard ceiling on the annual growth rate
pub const MAX_RATE_PERCENT: f64 = 999.0;

/// Shortest horizon under the standard rule set
pub const STANDARD_MIN_DURATION_YEARS: f64 = 1.0;

/// Shortest horizon under the strict rule set
pub const STRICT_MIN_DURATION_YEARS: f64 = 0.5;

/// Horizons above this are flagged as unrealistic
pub const MAX_DURATION_YEARS: f64 = 100.0;

/// Bounds and reporting behaviour used by the validator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Shortest accepted horizon in years
    pub min_duration_years: f64,
    /// Longest realistic horizon in years
    pub max_duration_years: f64,
    /// Largest accepted monthly contribution
    pub max_monthly_contribution: f64,
    /// Rates above this (percent) are unrealistic
    pub unrealistic_rate_percent: f64,
    /// Rates above this (percent) exceed the hard maximum
    pub max_rate_percent: f64,
    /// Report negative contributions separately from zero
    pub distinguish_zero_contribution: bool,
    /// Keep every issue for a field instead of only the first
    pub accumulate_per_field: bool,
}

impl ValidationPolicy {
    /// One-year minimum, one issue per field
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            min_duration_years: STANDARD_MIN_DURATION_YEARS,
            max_duration_years: MAX_DURATION_YEARS,
            max_monthly_contribution: MAX_MONTHLY_CONTRIBUTION,
            unrealistic_rate_percent: UNREALISTIC_RATE_PERCENT,
            max_rate_percent: MAX_RATE_PERCENT,
            distinguish_zero_contribution: false,
            accumulate_per_field: false,
        }
    }

    /// Half-year minimum, distinct zero/negative wording, all issues kept
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            min_duration_years: STRICT_MIN_DURATION_YEARS,
            max_duration_years: MAX_DURATION_YEARS,
            max_monthly_contribution: MAX_MONTHLY_CONTRIBUTION,
            unrealistic_rate_percent: UNREALISTIC_RATE_PERCENT,
            max_rate_percent: MAX_RATE_PERCENT,
            distinguish_zero_contribution: true,
            accumulate_per_field: true,
        }
    }

    /// With a different minimum horizon
    #[inline]
    #[must_use]
    pub fn with_min_duration(mut self, years: f64) -> Self {
        self.min_duration_years = years;
        self
    }

    /// With a different contribution ceiling
    #[inline]
    #[must_use]
    pub fn with_max_contribution(mut self, amount: f64) -> Self {
        self.max_monthly_contribution = amount;
        self
    }

    /// Reject bounds that cannot describe a usable range
    ///
    /// # Errors
    /// [`PolicyError::NonFiniteBound`] for NaN or infinite bounds,
    /// [`PolicyError::NonPositiveBound`] for bounds that must be above zero,
    /// [`PolicyError::InvertedRange`] when a lower bound exceeds its upper one.
    pub fn check(&self) -> Result<(), PolicyError> {
        let bounds = [
            ("min_duration_years", self.min_duration_years),
            ("max_duration_years", self.max_duration_years),
            ("max_monthly_contribution", self.max_monthly_contribution),
            ("unrealistic_rate_percent", self.unrealistic_rate_percent),
            ("max_rate_percent", self.max_rate_percent),
        ];

        for (name, value) in bounds {
            if !value.is_finite() {
                return Err(PolicyError::NonFiniteBound { name });
            }
            if value <= 0.0 {
                return Err(PolicyError::NonPositiveBound { name, value });
            }
        }

        if self.min_duration_years > self.max_duration_years {
            return Err(PolicyError::InvertedRange {
                lower: "min_duration_years",
                upper: "max_duration_years",
            });
        }

        if self.unrealistic_rate_percent > self.max_rate_percent {
            return Err(PolicyError::InvertedRange {
                lower: "unrealistic_rate_percent",
                upper: "max_rate_percent",
            });
        }

        Ok(())
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Named rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// See [`ValidationPolicy::standard`]
    Standard,
    /// See [`ValidationPolicy::strict`]
    #[default]
    Strict,
}

impl RuleSet {
    /// Policy for this rule set
    #[inline]
    #[must_use]
    pub const fn policy(self) -> ValidationPolicy {
        match self {
            RuleSet::Standard => ValidationPolicy::standard(),
            RuleSet::Strict => ValidationPolicy::strict(),
        }
    }

    /// Lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSet::Standard => "standard",
            RuleSet::Strict => "strict",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSet {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RuleSet::Standard),
            "strict" => Ok(RuleSet::Strict),
            other => Err(PolicyError::UnknownRuleSet(other.to_string())),
        }
    }
}

/// Policy configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// Bound is NaN or infinite
    #[error("policy bound '{name}' must be a finite number")]
    NonFiniteBound {
        /// Bound name
        name: &'static str,
    },

    /// Bound is zero or negative
    #[error("policy bound '{name}' must be greater than zero, got {value}")]
    NonPositiveBound {
        /// Bound name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Lower bound above upper bound
    #[error("policy bound '{lower}' exceeds '{upper}'")]
    InvertedRange {
        /// Lower bound name
        lower: &'static str,
        /// Upper bound name
        upper: &'static str,
    },

    /// Rule set name not recognised
    #[error("unknown rule set '{0}' (expected 'standard' or 'strict')")]
    UnknownRuleSet(String),
}
