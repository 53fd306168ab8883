//! Local File System Implementation
//!
//! Implements the FileSystem port for the local disk.

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};
use std::path::{Path, PathBuf};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn entry(&self, path: &Path) -> Option<EntryKind> {
        // metadata() follows symlinks, so a link to a bundle counts as a file
        let meta = std::fs::metadata(path).ok()?;
        Some(if meta.is_file() {
            EntryKind::File { size: meta.len() }
        } else if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        })
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::at(path, e))? {
            let entry = entry.map_err(|e| FsError::at(path, e))?;
            children.push(entry.path());
        }
        Ok(children)
    }
}
