//! Field validation for plan inputs
//!
//! Every input field is checked on every pass; an issue on one field never
//! hides issues on another.

use crate::policy::ValidationPolicy;
use sip_model::{format_currency, Field, FieldIssues, IssueKind, SipParameters, ValidationIssue};

/// Checks plan inputs against a [`ValidationPolicy`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    /// Create a validator for a policy
    #[inline]
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Policy in use
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate all three inputs
    ///
    /// # Returns
    /// Issues grouped by field; empty when the parameters may be projected.
    #[must_use]
    pub fn validate(&self, params: &SipParameters) -> FieldIssues {
        let mut issues = FieldIssues::new();
        for field in Field::INPUTS {
            issues.extend(self.validate_field(params, field));
        }
        issues
    }

    /// Validate a single input field
    ///
    /// Under a non-accumulating policy at most one issue is returned.
    #[must_use]
    pub fn validate_field(&self, params: &SipParameters, field: Field) -> Vec<ValidationIssue> {
        let mut found = match field {
            Field::MonthlyContribution => self.contribution_issues(params.monthly_contribution),
            Field::AnnualGrowthRatePercent => self.rate_issues(params.annual_growth_rate_percent),
            Field::DurationYears => self.duration_issues(params.duration_years),
            Field::General => Vec::new(),
        };

        if !self.policy.accumulate_per_field {
            found.truncate(1);
        }
        found
    }

    fn contribution_issues(&self, amount: f64) -> Vec<ValidationIssue> {
        let field = Field::MonthlyContribution;
        let mut found = Vec::new();

        if !amount.is_finite() {
            found.push(required(field));
        }

        if self.policy.distinguish_zero_contribution {
            if amount < 0.0 {
                found.push(issue(field, IssueKind::Negative, "cannot be negative"));
            } else if amount == 0.0 {
                found.push(not_positive(field));
            }
        } else if amount <= 0.0 {
            found.push(not_positive(field));
        }

        let max = self.policy.max_monthly_contribution;
        if amount > max {
            let detail = format!("exceeds maximum allowed amount ({})", format_currency(max));
            found.push(issue(field, IssueKind::ExceedsMaximum, &detail));
        }

        found
    }

    fn rate_issues(&self, rate: f64) -> Vec<ValidationIssue> {
        let field = Field::AnnualGrowthRatePercent;
        let mut found = Vec::new();

        if !rate.is_finite() {
            found.push(required(field));
        }

        if rate < 0.0 {
            found.push(issue(field, IssueKind::Negative, "cannot be negative"));
        }

        let unrealistic = self.policy.unrealistic_rate_percent;
        let max = self.policy.max_rate_percent;
        if rate > unrealistic && rate <= max {
            let detail = format!("is unrealistic (>{unrealistic}%)");
            found.push(issue(field, IssueKind::Unrealistic, &detail));
        }

        if rate > max {
            let detail = format!("exceeds maximum allowed ({max}%)");
            found.push(issue(field, IssueKind::ExceedsMaximum, &detail));
        }

        found
    }

    fn duration_issues(&self, years: f64) -> Vec<ValidationIssue> {
        let field = Field::DurationYears;
        let mut found = Vec::new();

        if !years.is_finite() {
            found.push(required(field));
        }

        let min = self.policy.min_duration_years;
        if years < min {
            let unit = if (min - 1.0).abs() < f64::EPSILON {
                "year"
            } else {
                "years"
            };
            let detail = format!("must be at least {min} {unit}");
            found.push(issue(field, IssueKind::BelowMinimum, &detail));
        }

        let max = self.policy.max_duration_years;
        if years > max {
            let detail = format!("is unrealistic (>{max} years)");
            found.push(issue(field, IssueKind::Unrealistic, &detail));
        }

        found
    }
}

/// Validate with the default (strict) policy
#[must_use]
pub fn validate(params: &SipParameters) -> FieldIssues {
    Validator::default().validate(params)
}

fn issue(field: Field, kind: IssueKind, detail: &str) -> ValidationIssue {
    ValidationIssue::new(field, kind, format!("{} {detail}", field.label()))
}

fn required(field: Field) -> ValidationIssue {
    issue(field, IssueKind::Required, "is required")
}

fn not_positive(field: Field) -> ValidationIssue {
    issue(field, IssueKind::NotPositive, "must be greater than zero")
}
