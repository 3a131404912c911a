//! Field-scoped validation issues

use crate::params::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What rule an issue comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    /// Value absent or not a number
    Required,
    /// Value is zero (or not above zero)
    NotPositive,
    /// Value is below zero
    Negative,
    /// Value under the policy minimum
    BelowMinimum,
    /// Value over the hard maximum
    ExceedsMaximum,
    /// Value inside hard bounds but outside sane real-world ranges
    Unrealistic,
}

impl IssueKind {
    /// Category in the error taxonomy
    #[inline]
    #[must_use]
    pub const fn category(self) -> IssueCategory {
        match self {
            IssueKind::Required => IssueCategory::Missing,
            IssueKind::Unrealistic => IssueCategory::Unrealistic,
            IssueKind::NotPositive
            | IssueKind::Negative
            | IssueKind::BelowMinimum
            | IssueKind::ExceedsMaximum => IssueCategory::RangeViolation,
        }
    }
}

/// Error taxonomy
///
/// Every category blocks projection; `Unrealistic` is not advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueCategory {
    /// Value outside domain bounds
    RangeViolation,
    /// Value technically valid but implausible
    Unrealistic,
    /// Value missing or non-finite
    Missing,
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field the issue annotates
    pub field: Field,
    /// Rule that produced it
    pub kind: IssueKind,
    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    /// Create an issue
    #[inline]
    pub fn new(field: Field, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    /// Category of the underlying rule
    #[inline]
    #[must_use]
    pub fn category(&self) -> IssueCategory {
        self.kind.category()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Issues grouped by field
///
/// Within a field issues keep the order the rules produced them, so
/// [`FieldIssues::message`] is the message a form shows next to that input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldIssues {
    by_field: BTreeMap<Field, Vec<ValidationIssue>>,
}

impl FieldIssues {
    /// Create an empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue under its field
    pub fn push(&mut self, issue: ValidationIssue) {
        self.by_field.entry(issue.field).or_default().push(issue);
    }

    /// True when nothing blocks projection
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Total number of issues across all fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.values().map(Vec::len).sum()
    }

    /// Issues recorded for a field, in rule order
    #[must_use]
    pub fn for_field(&self, field: Field) -> &[ValidationIssue] {
        self.by_field.get(&field).map_or(&[], Vec::as_slice)
    }

    /// First issue for a field
    #[inline]
    #[must_use]
    pub fn first(&self, field: Field) -> Option<&ValidationIssue> {
        self.for_field(field).first()
    }

    /// Message of the first issue for a field
    #[inline]
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.first(field).map(|issue| issue.message.as_str())
    }

    /// True when the field has at least one issue
    #[inline]
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    /// Fields with at least one issue
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.by_field.keys().copied()
    }

    /// All issues, grouped by field in form order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.by_field.values().flatten()
    }

    /// Flatten into a list
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationIssue> {
        self.by_field.into_values().flatten().collect()
    }
}

impl FromIterator<ValidationIssue> for FieldIssues {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        let mut issues = Self::new();
        for issue in iter {
            issues.push(issue);
        }
        issues
    }
}

impl Extend<ValidationIssue> for FieldIssues {
    fn extend<I: IntoIterator<Item = ValidationIssue>>(&mut self, iter: I) {
        for issue in iter {
            self.push(issue);
        }
    }
}
