//! Error types for SIP Core
//!
//! Covers the infrastructure around the engine:
//! - Configuration loading and parsing
//! - Policy consistency
//! - Preset lookup
//!
//! Input problems are never errors; they are reported as validation issues.

use sip_engine::PolicyError;
use std::path::PathBuf;

/// Main SIP Core error type
#[derive(Debug, thiserror::Error)]
pub enum SipError {
    /// Config file could not be read
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file extension not recognised
    #[error("unsupported config format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// TOML config did not parse
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON config did not parse
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Policy bounds are inconsistent
    #[error("invalid policy: {0}")]
    Policy(#[from] PolicyError),

    /// Configured default parameters fail their own policy
    #[error("default parameters fail validation: {0}")]
    InvalidDefaults(String),

    /// Preset name not recognised
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

impl SipError {
    /// Check if error originates from a config file
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ConfigRead { .. } | Self::UnsupportedFormat(_) | Self::Toml(_) | Self::Json(_)
        )
    }
}

/// Result alias for SIP Core operations
pub type Result<T> = std::result::Result<T, SipError>;
