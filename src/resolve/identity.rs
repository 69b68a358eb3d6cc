//! Canonical file identities used as the deduplication key.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// An absolute, lexically normalized path.
///
/// `.` components are dropped and `..` components fold into their parent, so
/// `src/nested/../a.ext` and `src/a.ext` are the same identity. Symlinks are
/// not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileIdentity(PathBuf);

impl FileIdentity {
    /// Normalizes `path` lexically. Callers pass absolute paths; a relative
    /// path stays relative.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => normalized.push(".."),
                },
                other => normalized.push(other.as_os_str()),
            }
        }
        Self(normalized)
    }

    /// Resolves a user-supplied path against the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is empty or the working directory is unavailable.
    pub fn from_entry(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(&std::path::absolute(path)?))
    }

    /// Identity of `reference` resolved against this directory.
    #[must_use]
    pub fn join(&self, reference: &str) -> Self {
        Self::new(&self.0.join(reference))
    }

    /// Borrow as a [`Path`].
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The final path component, if any and if it is valid UTF-8.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|name| name.to_str())
    }

    /// Returns `true` if the final component ends with `suffix`.
    ///
    /// Compares raw bytes, so names that are not valid UTF-8 still match.
    #[must_use]
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.0
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
    }

    /// Unwrap into the underlying [`PathBuf`].
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_dot_and_parent_components() {
        let id = FileIdentity::new(Path::new("/src/./nested/../lib/a.ext"));
        assert_eq!(id.as_path(), Path::new("/src/lib/a.ext"));
    }

    #[test]
    fn parent_of_root_stays_at_root() {
        let id = FileIdentity::new(Path::new("/../../a.ext"));
        assert_eq!(id.as_path(), Path::new("/a.ext"));
    }

    #[test]
    fn directory_reference_and_expansion_agree() {
        let dir = FileIdentity::new(Path::new("/src"));
        assert_eq!(dir.join("nested/"), FileIdentity::new(Path::new("/src/nested")));
        assert_eq!(
            dir.join("nested/../nested/a.ext"),
            FileIdentity::new(Path::new("/src/nested/a.ext"))
        );
    }

    #[test]
    fn from_entry_makes_relative_paths_absolute() {
        let id = FileIdentity::from_entry(Path::new("some/./file.ext")).unwrap();
        assert!(id.as_path().is_absolute());
        assert!(id.as_path().ends_with("some/file.ext"));
        assert_eq!(id.file_name(), Some("file.ext"));
    }

    #[test]
    fn has_suffix_checks_the_last_component_only() {
        assert!(FileIdentity::new(Path::new("/src/a.swift.txt")).has_suffix(".swift.txt"));
        assert!(!FileIdentity::new(Path::new("/src/a.swift")).has_suffix(".swift.txt"));
        assert!(!FileIdentity::new(Path::new("/src.ext/readme")).has_suffix(".ext"));
        assert!(!FileIdentity::new(Path::new("/")).has_suffix(".ext"));
    }

    #[cfg(unix)]
    #[test]
    fn has_suffix_accepts_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let id = FileIdentity::new(Path::new(OsStr::from_bytes(b"/src/\xff\xfe.ext")));
        assert_eq!(id.file_name(), None);
        assert!(id.has_suffix(".ext"));
    }

    #[test]
    fn from_entry_rejects_empty_path() {
        assert!(FileIdentity::from_entry(Path::new("")).is_err());
    }
}
