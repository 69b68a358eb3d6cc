//! Service context bundling the port trait objects a command needs.

use std::path::Path;

use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects for one command run.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Filesystem gateway used for all resolution I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context reading the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a live context whose filesystem calls are recorded into `dir`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    #[must_use]
    pub fn recording_at(dir: &Path) -> (Self, RecordingSession) {
        let session = RecordingSession::new(dir);
        let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), session.fs.clone());
        (Self { fs: Box::new(fs) }, session)
    }

    /// Creates a context that answers filesystem calls from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(cassette: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::load(cassette)?;
        Ok(Self { fs: Box::new(ReplayingFileSystem::new(replayer)) })
    }
}
