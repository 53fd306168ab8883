//! Track value object - the Play Console release channel a bundle goes to

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Release track within the Play Console
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Internal testing (up to 100 testers, no review)
    #[default]
    Internal,
    /// Closed testing
    Alpha,
    /// Open testing
    Beta,
    /// Public release
    Production,
}

impl Track {
    pub const ALL: [Track; 4] = [
        Track::Internal,
        Track::Alpha,
        Track::Beta,
        Track::Production,
    ];

    /// Track name as used in the publishing API paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Internal => "internal",
            Track::Alpha => "alpha",
            Track::Beta => "beta",
            Track::Production => "production",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known track name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown track '{0}' (expected internal, alpha, beta or production)")]
pub struct UnknownTrack(pub String);

impl FromStr for Track {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Track::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownTrack(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_track_is_internal() {
        assert_eq!(Track::default(), Track::Internal);
    }

    #[test]
    fn track_parses_case_insensitively() {
        assert_eq!("Beta".parse::<Track>().unwrap(), Track::Beta);
        assert_eq!(" production ".parse::<Track>().unwrap(), Track::Production);
    }

    #[test]
    fn track_rejects_unknown_names() {
        let err = "staging".parse::<Track>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn track_serde_lowercase() {
        let track: Track = serde_json::from_str("\"alpha\"").unwrap();
        assert_eq!(track, Track::Alpha);
        assert_eq!(serde_json::to_string(&Track::Production).unwrap(), "\"production\"");
    }
}
