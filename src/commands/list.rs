//! `stitch list` command.

use std::fmt::Write;
use std::path::Path;

use crate::assemble;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `list` command: one resolved path per line, dependencies first.
///
/// # Errors
///
/// Returns an error string if resolution fails.
pub fn run(ctx: &ServiceContext, input: &Path, settings: &Settings) -> Result<String, String> {
    let ledger = super::resolve(ctx, input, settings)?;
    let mut out = String::new();
    for file in assemble::file_list(&ledger) {
        let _ = writeln!(out, "{file}");
    }
    Ok(out)
}
