//! Domain Layer
//!
//! The core of playdeploy - deployment concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Values produced during a run (ResolvedArtifact, EditSession, UploadResult)
//! - `value_objects/` - Immutable value types (Track, VersionCode, DeployStage)
//! - `services/` - Domain services (ArtifactResolver)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
