//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod file_system;
pub mod publisher;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{EntryKind, FileSystem, FsError, FsResult};
pub use publisher::{AuthError, PublisherConnector, PublishingService, RemoteError};
