//! SIP Model
//!
//! Data shapes shared by the validation and projection engine.
//!
//! # Core Concepts
//!
//! - [`SipParameters`]: The three user-supplied plan inputs
//! - [`Field`]: Closed set of field identifiers issues are scoped to
//! - [`ValidationIssue`] / [`FieldIssues`]: Field-scoped validation output
//! - [`ProjectionResult`] / [`YearlyPoint`]: Rounded projection output
//!
//! # Example
//!
//! ```rust
//! use sip_model::{format_currency, Field, SipParameters};
//!
//! let params = SipParameters::default().with(Field::DurationYears, 15.0);
//! assert_eq!(params.duration_years, 15.0);
//! assert_eq!(format_currency(11_616_950.0), "₹1.16 Cr");
//! ```

#![warn(unreachable_pub)]

mod format;
mod issue;
mod money;
mod params;
mod projection;

pub use format::{format_currency, format_rupees, group_indian, CRORE, LAKH, RUPEE, THOUSAND};
pub use issue::{FieldIssues, IssueCategory, IssueKind, ValidationIssue};
pub use money::round_money;
pub use params::{
    parse_input, Field, SipParameters, DEFAULT_ANNUAL_GROWTH_RATE_PERCENT,
    DEFAULT_DURATION_YEARS, DEFAULT_MONTHLY_CONTRIBUTION, MONTHS_PER_YEAR,
};
pub use projection::{ProjectionResult, YearlyPoint};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with plan data
    pub use crate::{
        Field, FieldIssues, IssueCategory, IssueKind, ProjectionResult, SipParameters,
        ValidationIssue, YearlyPoint,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
