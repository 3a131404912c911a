//! Slider ranges for the three inputs
//!
//! Sliders clamp and snap; typed text does not. The validator re-checks
//! every value regardless of how it was entered.

use serde::{Deserialize, Serialize};
use sip_model::Field;

/// Min, max and step of one slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    /// Lowest slider position
    pub min: f64,
    /// Highest slider position
    pub max: f64,
    /// Distance between positions
    pub step: f64,
}

impl SliderRange {
    /// ₹500 to ₹1 lakh in ₹500 steps
    pub const MONTHLY_CONTRIBUTION: SliderRange = SliderRange::new(500.0, 100_000.0, 500.0);

    /// 1% to 30% in half-percent steps
    pub const ANNUAL_GROWTH_RATE: SliderRange = SliderRange::new(1.0, 30.0, 0.5);

    /// 1 to 40 years in whole years
    pub const DURATION_YEARS: SliderRange = SliderRange::new(1.0, 40.0, 1.0);

    /// Create a range
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Slider for an input field, `None` for [`Field::General`]
    #[inline]
    #[must_use]
    pub const fn for_field(field: Field) -> Option<SliderRange> {
        match field {
            Field::MonthlyContribution => Some(Self::MONTHLY_CONTRIBUTION),
            Field::AnnualGrowthRatePercent => Some(Self::ANNUAL_GROWTH_RATE),
            Field::DurationYears => Some(Self::DURATION_YEARS),
            Field::General => None,
        }
    }

    /// Nearest slider position to `value`
    ///
    /// NaN snaps to the minimum, as does anything on a malformed range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() || self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return self.min;
        }
        let bounded = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return bounded;
        }
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// True when `value` lies within the slider bounds
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
