//! Error types for playdeploy
//!
//! Each layer owns a `thiserror` enum; `DeployError` is the run-level
//! taxonomy the orchestrator reports.

use thiserror::Error;

use crate::domain::ports::{AuthError, RemoteError};
use crate::domain::services::ArtifactError;
use crate::domain::value_objects::DeployStage;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Why a deployment run failed
#[derive(Error, Debug)]
pub enum DeployError {
    /// No single bundle could be resolved; nothing remote was attempted
    #[error(transparent)]
    ArtifactNotFound(#[from] ArtifactError),

    /// Credentials could not be turned into an access token
    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthError),

    /// One of the edit calls failed
    #[error("{} failed: {source}", step_name(.stage))]
    RemoteCall {
        stage: DeployStage,
        #[source]
        source: RemoteError,
    },
}

impl DeployError {
    pub fn remote(stage: DeployStage, source: RemoteError) -> Self {
        debug_assert!(stage.is_remote(), "{stage} does not call the service");
        DeployError::RemoteCall { stage, source }
    }

    /// Stage the run was in when it failed
    pub fn stage(&self) -> DeployStage {
        match self {
            DeployError::ArtifactNotFound(_) => DeployStage::Resolving,
            DeployError::Authentication(_) => DeployStage::Authenticating,
            DeployError::RemoteCall { stage, .. } => *stage,
        }
    }
}

fn step_name(stage: &DeployStage) -> &'static str {
    match stage {
        DeployStage::Resolving => "bundle lookup",
        DeployStage::Authenticating => "authentication",
        DeployStage::OpeningEdit => "creating edit",
        DeployStage::Uploading => "uploading bundle",
        DeployStage::AssigningTrack => "assigning track",
        DeployStage::Committing => "committing edit",
    }
}
