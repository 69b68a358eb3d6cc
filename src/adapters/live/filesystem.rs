//! Live filesystem adapter using `std::fs` and `walkdir`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::ports::filesystem::{FileRecord, FileSystem};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn classify(
        &self,
        path: &Path,
    ) -> Result<FileRecord, Box<dyn std::error::Error + Send + Sync>> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            // A file used as a directory component (`util.ext/inner.ext`) is ENOTDIR.
            Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Ok(FileRecord::Missing);
            }
            Err(err) => return Err(err.into()),
        };
        if metadata.is_dir() {
            return Ok(FileRecord::Directory);
        }

        let content = std::fs::read_to_string(path)?;
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(FileRecord::File { content, parent })
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        if !path.is_dir() {
            return Err(format!("not a directory: {}", path.display()).into());
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(path).min_depth(1).follow_links(false);
        for entry in walker.into_iter().filter_entry(|e| !is_hidden(e)) {
            entries.push(entry?.into_path());
        }
        entries.sort();
        Ok(entries)
    }
}

// The walk root itself may be hidden (e.g. a scratch dir); only entries below it count.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let record = LiveFileSystem.classify(&dir.path().join("nope.ext")).unwrap();
        assert_eq!(record, FileRecord::Missing);
    }

    #[test]
    fn classify_path_below_a_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("util.ext");
        std::fs::write(&file, "util\n").unwrap();

        let record = LiveFileSystem.classify(&file.join("inner.ext")).unwrap();
        assert_eq!(record, FileRecord::Missing);
    }

    #[test]
    fn classify_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.ext");
        std::fs::write(&file, "a file\n").unwrap();

        assert_eq!(LiveFileSystem.classify(dir.path()).unwrap(), FileRecord::Directory);
        assert_eq!(
            LiveFileSystem.classify(&file).unwrap(),
            FileRecord::File { content: "a file\n".to_string(), parent: dir.path().to_path_buf() }
        );
    }

    #[test]
    fn classify_rejects_non_utf8_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("binary.ext");
        std::fs::write(&file, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        assert!(LiveFileSystem.classify(&file).is_err());
    }

    #[test]
    fn list_dir_recurses_and_skips_hidden_entries() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("nested/deeper")).unwrap();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::write(root.join("a.ext"), "").unwrap();
        std::fs::write(root.join(".hidden.ext"), "").unwrap();
        std::fs::write(root.join(".git/config.ext"), "").unwrap();
        std::fs::write(root.join("nested/deeper/b.ext"), "").unwrap();

        let entries = LiveFileSystem.list_dir(root).unwrap();

        assert_eq!(
            entries,
            vec![
                root.join("a.ext"),
                root.join("nested"),
                root.join("nested/deeper"),
                root.join("nested/deeper/b.ext"),
            ]
        );
    }

    #[test]
    fn list_dir_on_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.ext");
        std::fs::write(&file, "").unwrap();

        assert!(LiveFileSystem.list_dir(&file).is_err());
    }
}
