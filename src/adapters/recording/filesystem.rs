//! Recording adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::cassette::format::GatewayMethod;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{FileRecord, FileSystem};

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl FileSystem for RecordingFileSystem {
    fn classify(
        &self,
        path: &Path,
    ) -> Result<FileRecord, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.classify(path);
        let mut guard = self.recorder.lock().expect("recorder lock poisoned");
        guard.record(GatewayMethod::Classify, path, &result);
        result
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.list_dir(path);
        let mut guard = self.recorder.lock().expect("recorder lock poisoned");
        guard.record(GatewayMethod::ListDir, path, &result);
        result
    }
}
