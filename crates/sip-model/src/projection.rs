//! Rounded projection output

use crate::money::round_money;
use serde::{Deserialize, Serialize};

/// Accumulated position at the end of a whole year
///
/// `total_to_date == principal_to_date + growth_to_date` always holds:
/// principal and total are rounded from their exact values and growth is
/// derived from the rounded pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPoint {
    /// Year number, starting at 1
    pub year: u32,
    /// Contributions made so far
    pub principal_to_date: i64,
    /// Growth earned so far
    pub growth_to_date: i64,
    /// Value of the plan so far
    pub total_to_date: i64,
}

impl YearlyPoint {
    /// Build a point from exact principal and total amounts
    #[must_use]
    pub fn from_exact(year: u32, principal: f64, total: f64) -> Self {
        let (principal_to_date, growth_to_date, total_to_date) = split_rounded(principal, total);
        Self {
            year,
            principal_to_date,
            growth_to_date,
            total_to_date,
        }
    }
}

/// Summary totals plus the yearly series
///
/// The default value (all zeros, empty series) is what callers show while
/// the inputs have validation issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Contributions over the full horizon
    pub total_principal: i64,
    /// Growth over the full horizon
    pub total_growth: i64,
    /// Value at the end of the horizon
    pub maturity_value: i64,
    /// One point per completed year
    pub yearly_points: Vec<YearlyPoint>,
}

impl ProjectionResult {
    /// Build a result from exact totals and an already rounded series
    #[must_use]
    pub fn from_exact(principal: f64, maturity: f64, yearly_points: Vec<YearlyPoint>) -> Self {
        let (total_principal, total_growth, maturity_value) = split_rounded(principal, maturity);
        Self {
            total_principal,
            total_growth,
            maturity_value,
            yearly_points,
        }
    }

    /// True for the empty placeholder result
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Point for a given year, if the series reaches it
    #[must_use]
    pub fn point(&self, year: u32) -> Option<&YearlyPoint> {
        let index = usize::try_from(year.checked_sub(1)?).ok()?;
        self.yearly_points.get(index)
    }

    /// Maturity value as a multiple of the money put in
    ///
    /// Returns `None` when nothing was invested.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn wealth_multiple(&self) -> Option<f64> {
        if self.total_principal <= 0 {
            return None;
        }
        Some(self.maturity_value as f64 / self.total_principal as f64)
    }

    /// Contributions as a percentage of the maturity value
    ///
    /// Returns `None` when the maturity value is not positive.
    #[must_use]
    pub fn invested_share(&self) -> Option<f64> {
        percent_of(self.total_principal, self.maturity_value)
    }

    /// Growth as a percentage of the maturity value
    ///
    /// Returns `None` when the maturity value is not positive.
    #[must_use]
    pub fn returns_share(&self) -> Option<f64> {
        percent_of(self.total_growth, self.maturity_value)
    }

    /// Growth as a percentage of the money put in
    ///
    /// Returns `None` when nothing was invested.
    #[must_use]
    pub fn gain_percent(&self) -> Option<f64> {
        percent_of(self.total_growth, self.total_principal)
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent_of(part: i64, whole: i64) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

fn split_rounded(principal: f64, total: f64) -> (i64, i64, i64) {
    let principal = round_money(principal);
    let total = round_money(total);
    (principal, total.saturating_sub(principal), total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn growth_is_derived_from_rounded_pair() {
        let point = YearlyPoint::from_exact(1, 9.4, 10.2);
        assert_eq!(point.principal_to_date, 9);
        assert_eq!(point.total_to_date, 10);
        assert_eq!(point.growth_to_date, 1);

        // exact growth 0.9 would round to 1 on its own
        let point = YearlyPoint::from_exact(1, 9.5, 10.4);
        assert_eq!(point.principal_to_date, 10);
        assert_eq!(point.total_to_date, 10);
        assert_eq!(point.growth_to_date, 0);
        assert_eq!(
            point.total_to_date,
            point.principal_to_date + point.growth_to_date
        );
    }

    #[test]
    fn overflow_saturates() {
        let result = ProjectionResult::from_exact(-5.0, f64::INFINITY, Vec::new());
        assert_eq!(result.maturity_value, i64::MAX);
        assert_eq!(result.total_growth, i64::MAX);
    }

    #[test]
    fn default_is_empty() {
        let result = ProjectionResult::default();
        assert!(result.is_empty());
        assert_eq!(result.wealth_multiple(), None);
        assert_eq!(result.point(1), None);
        assert_eq!(result.returns_share(), None);
        assert_eq!(result.gain_percent(), None);
    }

    #[test]
    fn breakdown_percentages() {
        let result = ProjectionResult::from_exact(600_000.0, 1_161_695.0, Vec::new());
        let invested = result.invested_share().unwrap();
        let returns = result.returns_share().unwrap();

        assert_eq!(format!("{invested:.1}"), "51.6");
        assert_eq!(format!("{returns:.1}"), "48.4");
        assert!((invested + returns - 100.0).abs() < 1e-9);
        assert_eq!(format!("{:.1}", result.gain_percent().unwrap()), "93.6");
    }

    #[test]
    fn zero_growth_breakdown() {
        let result = ProjectionResult::from_exact(90_000.0, 90_000.0, Vec::new());
        assert_eq!(result.invested_share(), Some(100.0));
        assert_eq!(result.returns_share(), Some(0.0));
        assert_eq!(result.gain_percent(), Some(0.0));
    }

    #[test]
    fn point_lookup_is_one_based() {
        let points = vec![
            YearlyPoint::from_exact(1, 100.0, 105.0),
            YearlyPoint::from_exact(2, 200.0, 220.0),
        ];
        let result = ProjectionResult::from_exact(200.0, 220.0, points);
        assert_eq!(result.point(0), None);
        assert_eq!(result.point(2).map(|p| p.total_to_date), Some(220));
        assert_eq!(result.point(3), None);
        assert_eq!(result.wealth_multiple(), Some(1.1));
    }
}
