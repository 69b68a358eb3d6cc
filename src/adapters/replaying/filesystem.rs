//! Replaying adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::cassette::format::{decode_result, GatewayMethod};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{FileRecord, FileSystem};

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn output(&self, method: GatewayMethod, path: &Path) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction(method, path).output.clone()
    }
}

impl FileSystem for ReplayingFileSystem {
    fn classify(
        &self,
        path: &Path,
    ) -> Result<FileRecord, Box<dyn std::error::Error + Send + Sync>> {
        decode_result(&self.output(GatewayMethod::Classify, path), "fs::classify")
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        decode_result(&self.output(GatewayMethod::ListDir, path), "fs::list_dir")
    }
}
