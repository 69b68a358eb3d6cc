//! Diagnostic logging setup.

use tracing::Level;

/// Installs a stderr subscriber: `DEBUG` when `verbose`, otherwise `WARN`.
///
/// Stdout carries command output only. Calling this more than once is
/// harmless; later calls keep the first subscriber.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
