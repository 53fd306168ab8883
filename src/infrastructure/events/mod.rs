//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable progress lines

mod console;
mod json;

pub use console::{ConsoleEventSink, ConsoleStyle};
pub use json::JsonEventSink;
