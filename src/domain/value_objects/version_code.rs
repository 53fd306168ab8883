//! Version code value object - assigned by the publishing service on upload

use serde::{Deserialize, Serialize};

/// Integer identifier the remote service assigns to an uploaded bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCode(pub i64);

impl VersionCode {
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for VersionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
