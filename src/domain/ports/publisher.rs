//! Publisher ports - the remote publishing service as seen by the deploy flow
//!
//! Two traits split the remote collaborator at its natural seam:
//! - `PublisherConnector` turns a credentials file into an authenticated client
//! - `PublishingService` is that client: the four edit calls
//!
//! Test doubles implement both to script responses and failures per step.

use std::path::{Path, PathBuf};

use crate::domain::entities::{
    CommittedEdit, EditSession, ResolvedArtifact, TrackAssignment, TrackRelease, UploadResult,
};

/// Authentication failures
///
/// All of these happen before any remote mutation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("cannot read service account key {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid service account key {path}: {message}")]
    InvalidKey { path: PathBuf, message: String },

    #[error("access token request rejected: {0}")]
    TokenRejected(String),

    #[error("access token request failed: {0}")]
    Transport(String),
}

/// Failure of one remote call
///
/// Carries the service's own description of what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The service answered with an error status
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// The request never got a usable answer
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered successfully but the body was not understood
    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    /// The bundle could not be opened for streaming
    #[error("cannot read bundle {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The four calls of one edit transaction
pub trait PublishingService {
    /// Open a new edit for `package_name`
    fn open_edit(&self, package_name: &str) -> Result<EditSession, RemoteError>;

    /// Stream the bundle into the edit
    fn upload_bundle(
        &self,
        edit: &EditSession,
        artifact: &ResolvedArtifact,
    ) -> Result<UploadResult, RemoteError>;

    /// Replace the track's releases with `release`
    fn assign_track(
        &self,
        edit: &EditSession,
        release: &TrackRelease,
    ) -> Result<TrackAssignment, RemoteError>;

    /// Make everything done in the edit permanent
    fn commit_edit(&self, edit: &EditSession) -> Result<CommittedEdit, RemoteError>;
}

/// Builds an authenticated `PublishingService` from a credentials file
pub trait PublisherConnector {
    type Service: PublishingService;

    fn connect(&self, credentials: &Path) -> Result<Self::Service, AuthError>;
}
