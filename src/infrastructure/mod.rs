//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `google/` - Play Developer API publisher
//! - `events/` - Console and NDJSON event sinks

pub mod events;
pub mod fs;
pub mod google;

// Re-export for convenience
pub use events::{ConsoleEventSink, ConsoleStyle, JsonEventSink};
pub use fs::LocalFs;
pub use google::{AndroidPublisherClient, GooglePlayConnector};
