//! Core library entry for the `stitch` CLI.
//!
//! `stitch` follows textual import directives (`import util.swift`,
//! `import lib/`) from an entry file and assembles every reachable file,
//! dependencies first.

pub mod adapters;
pub mod assemble;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod directive;
pub mod error;
pub mod logging;
pub mod ports;
pub mod resolve;

use std::path::Path;

use clap::Parser;

use crate::adapters::live::LiveFileSystem;
use crate::config::{normalize_extension, validate_keyword};
use crate::directive::Directive;
use crate::resolve::Resolver;

pub use crate::error::Error;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli)
}

/// Resolves `entry` on the real filesystem and returns the raw bundle: each
/// file's content preceded by a newline, dependencies first.
///
/// `extension` may be given with or without its leading dot.
///
/// # Errors
///
/// Returns [`Error::Config`] for an invalid keyword or extension and
/// [`Error::Resolve`] when the traversal fails.
pub fn bundle_file(entry: &Path, keyword: &str, extension: &str) -> Result<String, Error> {
    let directive = Directive::new(validate_keyword(keyword)?, normalize_extension(extension)?);
    let ledger = Resolver::new(&LiveFileSystem, directive).resolve(entry)?;
    Ok(assemble::bundle(&ledger))
}
