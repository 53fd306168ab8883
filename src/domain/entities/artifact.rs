//! ResolvedArtifact entity - the single bundle file chosen for a run

use std::path::{Path, PathBuf};

/// File extension of Android App Bundles
pub const BUNDLE_EXTENSION: &str = ".aab";

/// A concrete `.aab` file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    path: PathBuf,
    size: u64,
}

impl ResolvedArtifact {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size in bytes at resolution time
    pub fn size(&self) -> u64 {
        self.size
    }

    /// File name for display (falls back to the full path)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Whether a file name carries the bundle extension
///
/// Matching is case-sensitive, the same as a `*.aab` shell glob.
pub fn has_bundle_extension(name: &str) -> bool {
    name.ends_with(BUNDLE_EXTENSION)
}
