/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories of PDPA data-processing consent a buyer can grant.
/// Stored in `consent_records.consent_type` using the wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentType {
    PdpaBasic,
    PdpaMarketing,
    PdpaAnalytics,
    PdpaThirdParty,
}

impl ConsentType {
    pub const ALL: [ConsentType; 4] = [
        ConsentType::PdpaBasic,
        ConsentType::PdpaMarketing,
        ConsentType::PdpaAnalytics,
        ConsentType::PdpaThirdParty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentType::PdpaBasic => "PDPA_BASIC",
            ConsentType::PdpaMarketing => "PDPA_MARKETING",
            ConsentType::PdpaAnalytics => "PDPA_ANALYTICS",
            ConsentType::PdpaThirdParty => "PDPA_THIRD_PARTY",
        }
    }

    /// Comma separated list of every recognized value, for error messages.
    pub fn valid_values() -> String {
        Self::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ConsentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown consent type: {0}")]
pub struct UnknownConsentType(pub String);

impl FromStr for ConsentType {
    type Err = UnknownConsentType;

    // Exact match only; the stored values are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownConsentType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_consent_types() {
        assert_eq!("PDPA_BASIC".parse::<ConsentType>().unwrap(), ConsentType::PdpaBasic);
        assert_eq!("PDPA_THIRD_PARTY".parse::<ConsentType>().unwrap(), ConsentType::PdpaThirdParty);
    }

    #[test]
    fn rejects_unknown_or_miscased_types() {
        assert!("pdpa_basic".parse::<ConsentType>().is_err());
        assert!("".parse::<ConsentType>().is_err());
        assert!("GDPR".parse::<ConsentType>().is_err());
    }

    #[test]
    fn serde_spelling_matches_as_str() {
        for t in ConsentType::ALL {
            let json = serde_json::to_value(t).unwrap();
            assert_eq!(json, serde_json::Value::String(t.as_str().to_string()));
        }
    }

    #[test]
    fn valid_values_lists_every_type() {
        assert_eq!(
            ConsentType::valid_values(),
            "PDPA_BASIC, PDPA_MARKETING, PDPA_ANALYTICS, PDPA_THIRD_PARTY"
        );
    }
}
