//! Filesystem port used by the resolver to classify and enumerate paths.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// What a path turned out to be when the gateway looked at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileRecord {
    /// Nothing exists at the path.
    Missing,
    /// The path is a directory; its files come from [`FileSystem::list_dir`].
    Directory,
    /// The path is a readable text file.
    File {
        /// Full UTF-8 content of the file.
        content: String,
        /// Directory that relative directive paths are resolved against.
        parent: PathBuf,
    },
}

/// Provides filesystem access to the dependency resolver.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Classifies `path` as missing, a directory, or a file with its content.
    ///
    /// A path that does not exist is `Ok(FileRecord::Missing)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but cannot be read as UTF-8 text.
    fn classify(&self, path: &Path)
        -> Result<FileRecord, Box<dyn std::error::Error + Send + Sync>>;

    /// Lists every entry below a directory, descending into subdirectories.
    ///
    /// Hidden entries (names starting with `.`) are skipped, and hidden
    /// directories are not descended into. Returned paths are `path` joined
    /// with the entry's relative location; order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>>;
}
