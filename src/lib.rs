//! playdeploy - publish Android App Bundles to Google Play from CI
//!
//! Resolves a bundle from a file or directory argument, then runs the Play
//! Developer API edit sequence: open an edit, upload the bundle, point a
//! release track at the new version code, and commit.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployOutcome, DeploySummary, DeployUseCase, DeploymentRequest};
pub use config::Config;
pub use domain::value_objects::{DeployStage, Track, VersionCode};
pub use error::{DeployError, DeployResult};
