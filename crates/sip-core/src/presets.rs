//! Quick-start plan presets

use crate::error::SipError;
use serde::{Deserialize, Serialize};
use sip_model::SipParameters;
use std::fmt;
use std::str::FromStr;

/// Ready-made plans offered as starting points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// ₹2,000 at 8% for 15 years
    Conservative,
    /// ₹5,000 at 12% for 10 years
    Moderate,
    /// ₹10,000 at 15% for 20 years
    Aggressive,
    /// ₹25,000 at 18% for 25 years
    Premium,
}

impl Preset {
    /// All presets in display order
    pub const ALL: [Preset; 4] = [
        Preset::Conservative,
        Preset::Moderate,
        Preset::Aggressive,
        Preset::Premium,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Preset::Conservative => "Conservative",
            Preset::Moderate => "Moderate",
            Preset::Aggressive => "Aggressive",
            Preset::Premium => "Premium",
        }
    }

    /// Parameters the preset applies
    #[inline]
    #[must_use]
    pub const fn parameters(self) -> SipParameters {
        match self {
            Preset::Conservative => SipParameters::new(2_000.0, 8.0, 15.0),
            Preset::Moderate => SipParameters::new(5_000.0, 12.0, 10.0),
            Preset::Aggressive => SipParameters::new(10_000.0, 15.0, 20.0),
            Preset::Premium => SipParameters::new(25_000.0, 18.0, 25.0),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = SipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SipError::UnknownPreset(wanted.to_string()))
    }
}
