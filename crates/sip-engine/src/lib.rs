//! SIP Engine
//!
//! Validation and projection for systematic investment plans.
//!
//! # Overview
//!
//! The engine provides:
//! - **Validator**: Field-scoped checks against a [`ValidationPolicy`]
//! - **Projector**: Monthly-compounding annuity-due projection
//! - **ProjectionCache**: Bounded memoization keyed on the parameter tuple
//!
//! Both validator and projector are pure. Callers validate first and only
//! project when no issues were found.
//!
//! # Example
//!
//! ```rust
//! use sip_engine::{project, validate};
//! use sip_model::SipParameters;
//!
//! let params = SipParameters::new(5_000.0, 12.0, 10.0);
//! assert!(validate(&params).is_empty());
//!
//! let result = project(&params);
//! assert_eq!(result.total_principal, 600_000);
//! assert_eq!(result.maturity_value, 1_161_695);
//! assert_eq!(result.yearly_points.len(), 10);
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod policy;
pub mod projector;
pub mod validation;

// Re-exports
pub use cache::{CacheStats, ParamKey, ProjectionCache};
pub use policy::{PolicyError, RuleSet, ValidationPolicy};
pub use projector::{project, Accumulation, Projector, MAX_SERIES_YEARS};
pub use validation::{validate, Validator};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for engine operations
    pub use crate::{
        project, validate, Projector, ProjectionCache, RuleSet, ValidationPolicy, Validator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
