//! Deploy stage - where in the run a deployment currently is

use serde::Serialize;

/// One state of the deployment run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployStage {
    Resolving,
    Authenticating,
    OpeningEdit,
    Uploading,
    AssigningTrack,
    Committing,
}

impl DeployStage {
    pub const ALL: [DeployStage; 6] = [
        DeployStage::Resolving,
        DeployStage::Authenticating,
        DeployStage::OpeningEdit,
        DeployStage::Uploading,
        DeployStage::AssigningTrack,
        DeployStage::Committing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStage::Resolving => "resolving",
            DeployStage::Authenticating => "authenticating",
            DeployStage::OpeningEdit => "opening_edit",
            DeployStage::Uploading => "uploading",
            DeployStage::AssigningTrack => "assigning_track",
            DeployStage::Committing => "committing",
        }
    }

    /// Whether this stage talks to the publishing service
    pub fn is_remote(&self) -> bool {
        !matches!(self, DeployStage::Resolving | DeployStage::Authenticating)
    }
}

impl std::fmt::Display for DeployStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
