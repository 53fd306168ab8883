//! FileSystem port - read-only view of the local disk
//!
//! Bundle resolution only needs to know what sits at a path and what a
//! directory contains. Keeping that behind a trait lets the resolver be
//! exercised against an in-memory tree.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Path does not exist
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Attach the path an I/O error happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (symlinks followed)
    File { size: u64 },
    Directory,
    /// Sockets, fifos, devices
    Other,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - test doubles - in-memory trees
pub trait FileSystem {
    /// Kind of entry at `path`, or `None` when nothing exists there
    fn entry(&self, path: &Path) -> Option<EntryKind>;

    /// Immediate children of a directory, in whatever order the listing yields
    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;
}
