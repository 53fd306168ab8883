//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{DeployStage, Track, VersionCode};

/// Event emitted during a deployment run
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Run started
    Started {
        artifact: PathBuf,
        package_name: String,
        track: Track,
    },

    /// A stage is about to run
    StageStarted { stage: DeployStage },

    /// Bundle chosen for upload
    ArtifactResolved { path: PathBuf, size: u64 },

    /// Access token obtained and client built
    Authenticated,

    /// Edit opened on the service
    EditOpened { edit_id: String },

    /// Bundle accepted by the service
    BundleUploaded {
        version_code: VersionCode,
        sha256: Option<String>,
    },

    /// Track release replaced
    TrackAssigned {
        track: String,
        version_code: VersionCode,
    },

    /// Edit committed
    EditCommitted { edit_id: String },

    /// Run finished, release is live on the track
    Succeeded {
        version_code: VersionCode,
        track: Track,
        edit_id: String,
    },

    /// Run aborted; `stage` is `None` when it failed before any stage started
    Failed {
        stage: Option<DeployStage>,
        error: String,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
