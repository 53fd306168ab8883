//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod stage;
mod track;
mod version_code;

pub use stage::DeployStage;
pub use track::{Track, UnknownTrack};
pub use version_code::VersionCode;
