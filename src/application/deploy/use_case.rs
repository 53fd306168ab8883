//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Resolve the bundle from the `--aab` argument
//! 2. Authenticate with the service account key
//! 3. Open an edit
//! 4. Upload the bundle into the edit
//! 5. Point the track at the uploaded version code
//! 6. Commit the edit
//!
//! Steps run strictly in order, once each. The first failure ends the run;
//! nothing is rolled back because an uncommitted edit has no visible effect
//! and the service expires it on its own.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::TrackRelease;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, FileSystem, NoopEventSink, PublisherConnector,
    PublishingService,
};
use crate::domain::services::ArtifactResolver;
use crate::domain::value_objects::DeployStage;
use crate::error::{DeployError, DeployResult};

use super::outcome::{DeployOutcome, DeploySummary};
use super::request::DeploymentRequest;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so the sequencing can be exercised with a
/// scripted publisher and an in-memory file system.
pub struct DeployUseCase<FS, C>
where
    FS: FileSystem,
    C: PublisherConnector,
{
    resolver: ArtifactResolver<FS>,
    connector: C,
}

impl<FS, C> DeployUseCase<FS, C>
where
    FS: FileSystem,
    C: PublisherConnector,
{
    pub fn new(file_system: FS, connector: C) -> Self {
        Self {
            resolver: ArtifactResolver::new(file_system),
            connector,
        }
    }

    /// Execute the deploy use case silently
    pub fn execute(&self, request: &DeploymentRequest) -> DeployOutcome {
        self.execute_with_events(request, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    ///
    /// Never returns an error: every failure ends up in
    /// `DeployOutcome::Failed` after a `Failed` event has been emitted.
    pub fn execute_with_events(
        &self,
        request: &DeploymentRequest,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployOutcome {
        event_sink.on_event(DeployEvent::Started {
            artifact: request.artifact.clone(),
            package_name: request.package_name.clone(),
            track: request.track,
        });

        match self.run(request, event_sink.as_ref()) {
            Ok(summary) => {
                event_sink.on_event(DeployEvent::Succeeded {
                    version_code: summary.version_code,
                    track: summary.track,
                    edit_id: summary.edit_id.clone(),
                });
                DeployOutcome::Succeeded(summary)
            }
            Err(err) => {
                debug!(stage = %err.stage(), error = ?err, "deployment aborted");
                event_sink.on_event(DeployEvent::Failed {
                    stage: Some(err.stage()),
                    error: err.to_string(),
                });
                DeployOutcome::Failed(err)
            }
        }
    }

    fn run(
        &self,
        request: &DeploymentRequest,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeploySummary> {
        events.on_event(DeployEvent::StageStarted {
            stage: DeployStage::Resolving,
        });
        let artifact = self.resolver.resolve(&request.artifact)?;
        events.on_event(DeployEvent::ArtifactResolved {
            path: artifact.path().to_path_buf(),
            size: artifact.size(),
        });

        events.on_event(DeployEvent::StageStarted {
            stage: DeployStage::Authenticating,
        });
        let service = self.connector.connect(&request.credentials)?;
        events.on_event(DeployEvent::Authenticated);

        events.on_event(DeployEvent::StageStarted {
            stage: DeployStage::OpeningEdit,
        });
        let edit = service
            .open_edit(&request.package_name)
            .map_err(|e| DeployError::remote(DeployStage::OpeningEdit, e))?;
        events.on_event(DeployEvent::EditOpened {
            edit_id: edit.id().to_string(),
        });

        events.on_event(DeployEvent::StageStarted {
            stage: DeployStage::Uploading,
        });
        let upload = service
            .upload_bundle(&edit, &artifact)
            .map_err(|e| DeployError::remote(DeployStage::Uploading, e))?;
        events.on_event(DeployEvent::BundleUploaded {
            version_code: upload.version_code,
            sha256: upload.sha256.clone(),
        });

        events.on_event(DeployEvent::StageStarted {
            stage: DeployStage::AssigningTrack,
        });
        let release = TrackRelease::completed(request.track, upload.version_code);
        let assignment = service
            .assign_track(&edit, &release)
            .map_err(|e| DeployError::remote(DeployStage::AssigningTrack, e))?;
        events.on_event(DeployEvent::TrackAssigned {
            track: assignment.track,
            version_code: upload.version_code,
        });

        events.on_event(DeployEvent::StageStarted {
            stage: DeployStage::Committing,
        });
        let committed = service
            .commit_edit(&edit)
            .map_err(|e| DeployError::remote(DeployStage::Committing, e))?;
        events.on_event(DeployEvent::EditCommitted {
            edit_id: committed.id.clone(),
        });

        Ok(DeploySummary {
            artifact: artifact.path().to_path_buf(),
            edit_id: committed.id,
            version_code: upload.version_code,
            track: request.track,
        })
    }
}
