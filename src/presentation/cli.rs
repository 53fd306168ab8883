//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--aab`, `--service-account` and `--package-name` are required
//! - `--track` is optional; when omitted the configured default applies
//!   (`internal` unless `[deploy] track` or `PLAYDEPLOY_TRACK` say otherwise)

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::Track;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Upload an Android App Bundle to a Google Play release track
#[derive(Parser, Debug)]
#[command(name = "playdeploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Exit status is 0 when the edit was committed and 1 on any failure.\n\nExample:\n  playdeploy --aab Builds/Android/1.0.0 --service-account key.json --package-name com.acme.game"
)]
pub struct Cli {
    /// Bundle file, or a directory containing exactly one *.aab
    #[arg(long, value_name = "PATH")]
    pub aab: PathBuf,

    /// Service account JSON key with Play publishing access
    #[arg(long, value_name = "PATH")]
    pub service_account: PathBuf,

    /// Application id of the app, e.g. com.acme.game
    #[arg(long, value_name = "NAME")]
    pub package_name: String,

    /// Release track [default: internal]
    #[arg(long, value_enum)]
    pub track: Option<Track>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: ./playdeploy.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Track for this run: the flag if given, else the configured default
    pub fn resolved_track(&self, configured: Track) -> Track {
        self.track.unwrap_or(configured)
    }
}
