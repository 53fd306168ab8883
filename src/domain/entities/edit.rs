//! Edit session entities
//!
//! An edit is the remote service's transaction: nothing done inside it is
//! visible in the Play Console until it is committed. Every value here is
//! produced by one remote call and consumed by the next.

use crate::domain::value_objects::{Track, VersionCode};

/// A remote edit opened for one package
///
/// Carries the package name alongside the edit id so the pair cannot drift
/// apart between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: String,
    package_name: String,
    /// Seconds since epoch after which the service discards the edit
    expires_at: Option<i64>,
}

impl EditSession {
    pub fn new(id: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            package_name: package_name.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: Option<i64>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }
}

/// Outcome of a bundle upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub version_code: VersionCode,
    /// Hex SHA-256 of the bundle as reported by the service
    pub sha256: Option<String>,
}

impl UploadResult {
    pub fn new(version_code: VersionCode) -> Self {
        Self {
            version_code,
            sha256: None,
        }
    }
}

/// Release status applied to the track release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// Rolled out to everyone on the track
    Completed,
}

impl ReleaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStatus::Completed => "completed",
        }
    }
}

/// Track state confirmed by the service after assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAssignment {
    /// Track name echoed back by the service
    pub track: String,
    pub version_codes: Vec<VersionCode>,
}

/// Edit confirmed by the service after commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedEdit {
    pub id: String,
}

/// Desired release for a track: exactly one version, fully rolled out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRelease {
    pub track: Track,
    pub version_code: VersionCode,
    pub status: ReleaseStatus,
}

impl TrackRelease {
    pub fn completed(track: Track, version_code: VersionCode) -> Self {
        Self {
            track,
            version_code,
            status: ReleaseStatus::Completed,
        }
    }
}
