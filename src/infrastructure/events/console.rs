//! Console Event Sink
//!
//! Human-readable progress lines for terminals and CI logs.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::DeployStage;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::theme::{dim, Icon};

const RULE_WIDTH: usize = 40;

/// Output switches for the console sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleStyle {
    pub color: bool,
    pub unicode: bool,
    /// Also emit a GitHub Actions `::error` command on failure
    pub annotations: bool,
}

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    style: ConsoleStyle,
}

impl ConsoleEventSink {
    pub fn stdout(style: ConsoleStyle) -> Self {
        Self::with_writer(io::stdout(), style)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, style: ConsoleStyle) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            style,
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.render(self.style.color, self.style.unicode)
    }

    fn rule(&self) -> String {
        let ch = if self.style.unicode { "─" } else { "-" };
        dim(&ch.repeat(RULE_WIDTH), self.style.color)
    }

    fn render(&self, event: DeployEvent) -> Vec<String> {
        match event {
            DeployEvent::Started {
                artifact,
                package_name,
                track,
            } => vec![
                self.rule(),
                format!("{} Deploying to Google Play", self.icon(Icon::Deploy)),
                self.rule(),
                format!("Bundle:  {}", artifact.display()),
                format!("Package: {}", package_name),
                format!("Track:   {}", track),
            ],

            DeployEvent::StageStarted { stage } => match stage_label(stage) {
                Some(label) => vec![format!("{} {}...", self.icon(Icon::Progress), label)],
                None => Vec::new(),
            },

            DeployEvent::ArtifactResolved { path, size } => vec![format!(
                "{} Found bundle: {} {}",
                self.icon(Icon::Success),
                path.display(),
                dim(&format!("({})", format_size(size)), self.style.color)
            )],

            DeployEvent::Authenticated => Vec::new(),

            DeployEvent::EditOpened { edit_id } => vec![format!(
                "  {} Edit ID: {}",
                self.icon(Icon::Arrow),
                edit_id
            )],

            DeployEvent::BundleUploaded { version_code, .. } => vec![format!(
                "{} Uploaded, version code {}",
                self.icon(Icon::Success),
                version_code
            )],

            DeployEvent::TrackAssigned { track, .. } => vec![format!(
                "{} Assigned to track: {}",
                self.icon(Icon::Success),
                track
            )],

            DeployEvent::EditCommitted { edit_id } => vec![format!(
                "{} Committed edit {}",
                self.icon(Icon::Success),
                edit_id
            )],

            DeployEvent::Succeeded {
                version_code,
                track,
                ..
            } => vec![
                self.rule(),
                format!("{} Deploy succeeded", self.icon(Icon::Success)),
                format!("Version {} deployed to {} track", version_code, track),
                self.rule(),
            ],

            DeployEvent::Failed { error, .. } => {
                let mut lines = vec![
                    self.rule(),
                    format!("{} Deploy failed", self.icon(Icon::Error)),
                    format!("Error: {}", error),
                    self.rule(),
                ];
                if self.style.annotations {
                    lines.push(github_actions_annotation(
                        AnnotationLevel::Error,
                        &error,
                        None,
                        Some("Google Play deploy failed"),
                    ));
                }
                lines
            }
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let lines = self.render(event);
        if lines.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }
}

/// Progress label for stages that talk to the service
fn stage_label(stage: DeployStage) -> Option<&'static str> {
    match stage {
        DeployStage::Resolving => None,
        DeployStage::Authenticating => Some("Authenticating with Google Play"),
        DeployStage::OpeningEdit => Some("Creating edit"),
        DeployStage::Uploading => Some("Uploading bundle"),
        DeployStage::AssigningTrack => Some("Assigning track"),
        DeployStage::Committing => Some("Committing edit"),
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
