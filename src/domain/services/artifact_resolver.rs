//! Artifact Resolver
//!
//! Turns the `--aab` argument into exactly one bundle file. Accepted inputs:
//! - a bundle file: `path/to/game.aab`
//! - a folder holding one bundle: `path/to/folder`
//! - a build-output leaf: `Builds/Android/1.0.0`
//!
//! Only the directory passed in is inspected. There is no recursion and no
//! version disambiguation: a directory with several bundles is rejected
//! rather than resolved by listing order.

use std::path::{Path, PathBuf};

use crate::domain::entities::{has_bundle_extension, ResolvedArtifact};
use crate::domain::ports::{EntryKind, FileSystem, FsError};

/// Why no single bundle could be selected
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("bundle not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("bundle not found in directory {}: no *.aab files", .0.display())]
    NoBundleInDirectory(PathBuf),

    #[error(
        "multiple bundles found in {}: {} (pass the bundle file path instead)",
        .dir.display(),
        join_names(.candidates)
    )]
    AmbiguousBundles {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error("cannot list {}: {source}", .dir.display())]
    Unreadable {
        dir: PathBuf,
        #[source]
        source: FsError,
    },
}

fn join_names(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves a file-or-directory argument to a single bundle
pub struct ArtifactResolver<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> ArtifactResolver<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Resolve `path` to the bundle that should be uploaded
    ///
    /// An existing `.aab` file is returned as given, whatever else sits next
    /// to it. A directory must contain exactly one `*.aab` regular file.
    pub fn resolve(&self, path: &Path) -> Result<ResolvedArtifact, ArtifactError> {
        match self.fs.entry(path) {
            Some(EntryKind::File { size }) if is_bundle_name(path) => {
                Ok(ResolvedArtifact::new(path, size))
            }
            Some(EntryKind::Directory) => self.resolve_in_directory(path),
            _ => Err(ArtifactError::NotFound(path.to_path_buf())),
        }
    }

    fn resolve_in_directory(&self, dir: &Path) -> Result<ResolvedArtifact, ArtifactError> {
        let entries = self
            .fs
            .list_dir(dir)
            .map_err(|source| ArtifactError::Unreadable {
                dir: dir.to_path_buf(),
                source,
            })?;

        let mut candidates: Vec<ResolvedArtifact> = entries
            .into_iter()
            .filter(|p| is_glob_candidate(p))
            .filter_map(|p| match self.fs.entry(&p) {
                Some(EntryKind::File { size }) => Some(ResolvedArtifact::new(p, size)),
                _ => None,
            })
            .collect();

        match candidates.len() {
            0 => Err(ArtifactError::NoBundleInDirectory(dir.to_path_buf())),
            1 => Ok(candidates.remove(0)),
            _ => {
                let mut paths: Vec<PathBuf> =
                    candidates.iter().map(|c| c.path().to_path_buf()).collect();
                paths.sort();
                Err(ArtifactError::AmbiguousBundles {
                    dir: dir.to_path_buf(),
                    candidates: paths,
                })
            }
        }
    }
}

fn is_bundle_name(path: &Path) -> bool {
    path.file_name()
        .map(|n| has_bundle_extension(&n.to_string_lossy()))
        .unwrap_or(false)
}

/// `*.aab` glob semantics: dot-files are never matched by `*`
fn is_glob_candidate(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            !name.starts_with('.') && has_bundle_extension(&name)
        }
        None => false,
    }
}
