//! `stitch concat` command.

use std::path::Path;

use crate::assemble;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `concat` command: raw file contents, dependencies first.
///
/// # Errors
///
/// Returns an error string if resolution fails.
pub fn run(ctx: &ServiceContext, input: &Path, settings: &Settings) -> Result<String, String> {
    let ledger = super::resolve(ctx, input, settings)?;
    Ok(assemble::bundle(&ledger))
}
