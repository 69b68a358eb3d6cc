//! Recording session shared between the CLI and the recording adapter.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;

/// File name of the filesystem cassette inside a recording directory.
pub const FS_CASSETTE: &str = "fs.cassette.yaml";

/// Owns the recorder for one command run.
///
/// The recording adapter holds a clone of [`RecordingSession::fs`]; it must be
/// dropped before [`RecordingSession::finish`] is called.
pub struct RecordingSession {
    /// Recorder for filesystem gateway interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Create a session writing `<dir>/fs.cassette.yaml`.
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        let name = format!("stitch-{}", chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(dir.join(FS_CASSETTE), name);
        Self { fs: Arc::new(Mutex::new(recorder)) }
    }

    /// Write the cassette to disk and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter still holds the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.fs)
            .map_err(|_| "Recording adapter for fs still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for fs poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write fs cassette: {e}"))
    }
}
