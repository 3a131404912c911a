//! SIP Core
//!
//! Calculator state management on top of the validation and projection
//! engine.
//!
//! # Architecture
//!
//! ```text
//! input change → SipCalculator → CalculatorState::evaluate
//!                                   ├─ Validator  → FieldIssues
//!                                   └─ (no issues) ProjectionSource → ProjectionResult
//! ```
//!
//! # Example
//!
//! ```rust
//! use sip_core::{Preset, SipCalculator, SipConfig};
//! use sip_model::Field;
//!
//! let mut calc = SipCalculator::new(SipConfig::new())?;
//! calc.update(Field::MonthlyContribution, 0.0);
//! assert!(!calc.state().is_valid());
//!
//! calc.apply_preset(Preset::Moderate);
//! assert_eq!(calc.state().result().maturity_value, 1_161_695);
//! # Ok::<(), sip_core::SipError>(())
//! ```

#![warn(missing_docs)]

pub mod calculator;
pub mod config;
pub mod controls;
pub mod error;
pub mod presets;
pub mod source;
pub mod state;

pub use calculator::SipCalculator;
pub use config::{SipConfig, DEFAULT_CACHE_CAPACITY};
pub use controls::SliderRange;
pub use error::{Result, SipError};
pub use presets::Preset;
pub use source::ProjectionSource;
pub use state::CalculatorState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
