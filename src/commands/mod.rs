//! Command dispatch and handlers.

pub mod build;
pub mod concat;
pub mod list;

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::{FileConfig, Settings};
use crate::context::ServiceContext;
use crate::resolve::{Resolver, VisitLedger};

/// Environment variable naming a directory to record filesystem calls into.
pub const RECORD_ENV: &str = "STITCH_RECORD";

/// Dispatch a parsed command to its handler and print the result to stdout.
///
/// When `STITCH_RECORD` is set to a directory path, every filesystem call is
/// recorded to `fs.cassette.yaml` in that directory.
///
/// # Errors
///
/// Returns an error string if configuration, resolution or output fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let (ctx, session) = if let Ok(dir) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(Path::new(&dir));
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let cwd = env::current_dir().map_err(|e| format!("Failed to read working directory: {e}"))?;
    let result = dispatch_with_context(cli, &ctx, &cwd);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        drop(ctx);
        finish_recording(session)?;
    }

    let output = result?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("Failed to write output: {e}"))
}

/// Run a command with the given service context, returning its output.
///
/// `cwd` is where the default config file is looked up.
///
/// # Errors
///
/// Returns an error string if configuration or resolution fails.
pub fn dispatch_with_context(
    cli: &Cli,
    ctx: &ServiceContext,
    cwd: &Path,
) -> Result<String, String> {
    let file = FileConfig::discover(cli.config.as_deref(), cwd).map_err(|e| e.to_string())?;
    let settings =
        Settings::merge(&cli.command.args().overrides(), &file).map_err(|e| e.to_string())?;
    debug!(keyword = %settings.keyword, suffix = %settings.suffix, "settings resolved");

    let input = &cli.command.args().input;
    match &cli.command {
        Command::Build(_) => build::run(ctx, input, &settings),
        Command::Concat(_) => concat::run(ctx, input, &settings),
        Command::List(_) => list::run(ctx, input, &settings),
    }
}

/// Resolve `input` with the context's filesystem and the given settings.
fn resolve(ctx: &ServiceContext, input: &Path, settings: &Settings) -> Result<VisitLedger, String> {
    Resolver::new(ctx.fs.as_ref(), settings.directive())
        .resolve(input)
        .map_err(|e| e.to_string())
}

/// Finish a recording session and report where the cassette went.
fn finish_recording(session: RecordingSession) -> Result<PathBuf, String> {
    let cassette = session.finish()?;
    eprintln!("Recording saved to: {}", cassette.display());
    Ok(cassette)
}
