//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                artifact,
                package_name,
                track,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "artifact": artifact.display().to_string(),
                    "package_name": package_name,
                    "track": track,
                })
            }

            DeployEvent::StageStarted { stage } => {
                serde_json::json!({
                    "event": "stage_start",
                    "command": "deploy",
                    "stage": stage,
                })
            }

            DeployEvent::ArtifactResolved { path, size } => {
                serde_json::json!({
                    "event": "artifact_resolved",
                    "command": "deploy",
                    "path": path.display().to_string(),
                    "size": size,
                })
            }

            DeployEvent::Authenticated => {
                serde_json::json!({
                    "event": "authenticated",
                    "command": "deploy",
                })
            }

            DeployEvent::EditOpened { edit_id } => {
                serde_json::json!({
                    "event": "edit_opened",
                    "command": "deploy",
                    "edit_id": edit_id,
                })
            }

            DeployEvent::BundleUploaded {
                version_code,
                sha256,
            } => {
                serde_json::json!({
                    "event": "bundle_uploaded",
                    "command": "deploy",
                    "version_code": version_code,
                    "sha256": sha256,
                })
            }

            DeployEvent::TrackAssigned {
                track,
                version_code,
            } => {
                serde_json::json!({
                    "event": "track_assigned",
                    "command": "deploy",
                    "track": track,
                    "version_code": version_code,
                })
            }

            DeployEvent::EditCommitted { edit_id } => {
                serde_json::json!({
                    "event": "edit_committed",
                    "command": "deploy",
                    "edit_id": edit_id,
                })
            }

            DeployEvent::Succeeded {
                version_code,
                track,
                edit_id,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "success",
                    "version_code": version_code,
                    "track": track,
                    "edit_id": edit_id,
                })
            }

            DeployEvent::Failed { stage, error } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "failed",
                    "stage": stage,
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }
}
