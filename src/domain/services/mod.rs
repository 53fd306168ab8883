//! Domain Services
//!
//! Business logic that operates on domain entities through ports.

mod artifact_resolver;

pub use artifact_resolver::{ArtifactError, ArtifactResolver};
