//! Deployment Request
//!
//! Everything a run needs, fixed before it starts.

use std::path::PathBuf;

use crate::domain::value_objects::Track;

/// Inputs of one deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// Bundle file, or directory holding exactly one bundle
    pub artifact: PathBuf,
    /// Service account key file
    pub credentials: PathBuf,
    /// Application id, e.g. `com.acme.game`
    pub package_name: String,
    /// Release track to roll out to
    pub track: Track,
}

impl DeploymentRequest {
    pub fn new(
        artifact: impl Into<PathBuf>,
        credentials: impl Into<PathBuf>,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            artifact: artifact.into(),
            credentials: credentials.into(),
            package_name: package_name.into(),
            track: Track::default(),
        }
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }
}
