//! Deploy Outcome
//!
//! Result types for a deployment run.

use std::path::PathBuf;

use crate::domain::value_objects::{DeployStage, Track, VersionCode};
use crate::error::DeployError;

/// Details of a run that reached commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploySummary {
    pub artifact: PathBuf,
    pub edit_id: String,
    pub version_code: VersionCode,
    pub track: Track,
}

/// How a deployment run ended
#[derive(Debug)]
pub enum DeployOutcome {
    Succeeded(DeploySummary),
    Failed(DeployError),
}

impl DeployOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeployOutcome::Succeeded(_))
    }

    /// Process exit code: 0 only when the edit was committed
    pub fn exit_code(&self) -> u8 {
        match self {
            DeployOutcome::Succeeded(_) => 0,
            DeployOutcome::Failed(_) => 1,
        }
    }

    /// Stage the run failed in, if it failed
    pub fn failed_stage(&self) -> Option<DeployStage> {
        match self {
            DeployOutcome::Succeeded(_) => None,
            DeployOutcome::Failed(err) => Some(err.stage()),
        }
    }
}
