//! Calculator configuration
//!
//! Loaded from TOML or JSON. Every section is optional:
//!
//! ```toml
//! cache_capacity = 256
//!
//! [defaults]
//! monthlyContribution = 5000
//! annualGrowthRatePercent = 12
//! durationYears = 10
//!
//! [policy]
//! min_duration_years = 1.0
//! accumulate_per_field = false
//! ```

use crate::error::{Result, SipError};
use serde::{Deserialize, Serialize};
use sip_engine::{RuleSet, ValidationPolicy, Validator};
use sip_model::SipParameters;
use std::path::Path;

/// Default number of cached projections
pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// SIP calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SipConfig {
    /// Parameters restored on reset
    pub defaults: SipParameters,
    /// Validation bounds
    pub policy: ValidationPolicy,
    /// Projection cache size; zero disables caching
    pub cache_capacity: u64,
}

impl SipConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With validation policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// With a named rule set
    #[inline]
    #[must_use]
    pub fn with_rule_set(self, rule_set: RuleSet) -> Self {
        self.with_policy(rule_set.policy())
    }

    /// With reset parameters
    #[inline]
    #[must_use]
    pub fn with_defaults(mut self, defaults: SipParameters) -> Self {
        self.defaults = defaults;
        self
    }

    /// With projection cache size
    #[inline]
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// [`SipError::Toml`] when the text is not a valid config.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse JSON text
    ///
    /// # Errors
    /// [`SipError::Json`] when the text is not a valid config.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from a `.toml` or `.json` file and check it
    ///
    /// # Errors
    /// Read, format and parse failures, plus anything [`SipConfig::validate`]
    /// rejects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SipError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&text)?,
            "json" => Self::from_json_str(&text)?,
            other => return Err(SipError::UnsupportedFormat(other.to_string())),
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded calculator config");
        Ok(config)
    }

    /// Check the policy and that the defaults satisfy it
    ///
    /// # Errors
    /// [`SipError::Policy`] for inconsistent bounds,
    /// [`SipError::InvalidDefaults`] when reset would land on invalid input.
    pub fn validate(&self) -> Result<()> {
        self.policy.check()?;

        let issues = Validator::new(self.policy).validate(&self.defaults);
        if !issues.is_empty() {
            let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
            return Err(SipError::InvalidDefaults(messages.join("; ")));
        }

        Ok(())
    }
}

impl Default for SipConfig {
    fn default() -> Self {
        Self {
            defaults: SipParameters::default(),
            policy: ValidationPolicy::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
