//! Error types for resolution and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Why a resolution run was aborted. The first failure anywhere in the
/// traversal ends the run; there are no partial results.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A referenced path (or the entry itself) does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The path exists but its content could not be read as text.
    #[error("unable to read {}: {reason}", path.display())]
    Unreadable {
        /// The file that failed to read.
        path: PathBuf,
        /// Message from the filesystem layer.
        reason: String,
    },

    /// A referenced directory could not be enumerated.
    #[error("unable to scan directory {}: {reason}", path.display())]
    DirectoryEnumerationFailed {
        /// The directory that failed to list.
        path: PathBuf,
        /// Message from the filesystem layer.
        reason: String,
    },
}

impl ResolveError {
    /// The path the error is about.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Unreadable { path, .. }
            | Self::DirectoryEnumerationFailed { path, .. } => path,
        }
    }
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file extension is empty (or only a dot).
    #[error("file extension must not be empty")]
    InvalidExtension,

    /// The directive keyword is empty or contains whitespace.
    #[error("invalid directive keyword {0:?}: must be non-empty and contain no whitespace")]
    InvalidKeyword(String),

    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`crate::config::FileConfig`].
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Any failure from the library entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid keyword or extension.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The traversal was aborted.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let err = ResolveError::NotFound { path: PathBuf::from("/src/missing.ext") };
        assert_eq!(err.to_string(), "file not found: /src/missing.ext");
        assert_eq!(err.path(), std::path::Path::new("/src/missing.ext"));

        let err = ResolveError::DirectoryEnumerationFailed {
            path: PathBuf::from("/src/locked"),
            reason: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "unable to scan directory /src/locked: permission denied");
    }

    #[test]
    fn top_level_error_is_transparent() {
        let err: Error = ConfigError::InvalidExtension.into();
        assert_eq!(err.to_string(), "file extension must not be empty");
        assert!(matches!(err, Error::Config(_)));
    }
}
