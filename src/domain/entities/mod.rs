//! Domain Entities
//!
//! Transient values of a single deployment run.
//! - `ResolvedArtifact` - The `.aab` file chosen for upload
//! - `EditSession` - The remote transaction every call runs inside
//! - `UploadResult`, `TrackAssignment`, `CommittedEdit` - Per-step results

mod artifact;
mod edit;

pub use artifact::{has_bundle_extension, ResolvedArtifact, BUNDLE_EXTENSION};
pub use edit::{
    CommittedEdit, EditSession, ReleaseStatus, TrackAssignment, TrackRelease, UploadResult,
};
