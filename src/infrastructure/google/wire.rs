//! androidpublisher v3 wire types
//!
//! Only the fields the deploy flow reads or writes. Unknown fields are
//! ignored on the way in.

use serde::{Deserialize, Serialize};

/// `AppEdit` resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// int64 encoded as a decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time_seconds: Option<String>,
}

/// `Bundle` resource returned by `edits.bundles.upload`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub version_code: i64,
    #[serde(default)]
    pub sha256: Option<String>,
}

/// `Track` resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track: String,
    #[serde(default)]
    pub releases: Vec<TrackRelease>,
}

/// `TrackRelease` resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRelease {
    /// int64 values, encoded as decimal strings
    #[serde(default, with = "int64_strings")]
    pub version_codes: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Error envelope of Google JSON APIs
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Google encodes int64 as JSON strings but accepts and sometimes returns
/// plain numbers; accept both, always write strings.
mod int64_strings {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Int64 {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(values: &[i64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| v.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
        Vec::<Int64>::deserialize(deserializer)?
            .into_iter()
            .map(|v| match v {
                Int64::Number(n) => Ok(n),
                Int64::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
            })
            .collect()
    }
}
