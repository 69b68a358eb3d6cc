//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

/// Top-level CLI parser for `stitch`.
#[derive(Debug, Parser)]
#[command(name = "stitch", version, about = "Bundle source files by following import directives")]
pub struct Cli {
    /// YAML config file (defaults to ./stitch.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log resolution steps to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one source file: every dependency first, directive lines commented out.
    Build(ResolveArgs),
    /// Print the raw content of every resolved file, dependencies first.
    Concat(ResolveArgs),
    /// Print resolved file paths, dependencies first.
    List(ResolveArgs),
}

impl Command {
    /// Arguments shared by every subcommand.
    #[must_use]
    pub fn args(&self) -> &ResolveArgs {
        match self {
            Self::Build(args) | Self::Concat(args) | Self::List(args) => args,
        }
    }
}

/// Entry point and directive syntax for a resolution.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Entry point file (or directory).
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Extension of imported files, with or without the leading dot.
    #[arg(short, long, env = "STITCH_EXT")]
    pub ext: Option<String>,

    /// Keyword that starts a directive line.
    #[arg(short, long, env = "STITCH_KEYWORD")]
    pub keyword: Option<String>,

    /// Line-comment prefix used to disable directives in `build` output.
    #[arg(long, env = "STITCH_COMMENT_PREFIX", value_name = "PREFIX")]
    pub comment_prefix: Option<String>,
}

impl ResolveArgs {
    /// Settings given on the command line or through the environment.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            keyword: self.keyword.clone(),
            ext: self.ext.clone(),
            comment_prefix: self.comment_prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parses_build_subcommand() {
        let cli = Cli::parse_from(["stitch", "build", "--input", "main.swift", "--ext", "swift.txt"]);
        assert!(matches!(cli.command, Command::Build(_)));
        assert_eq!(cli.command.args().input, Path::new("main.swift"));
        assert_eq!(cli.command.args().ext.as_deref(), Some("swift.txt"));
    }

    #[test]
    fn parses_short_flags_and_globals() {
        let cli = Cli::parse_from(["stitch", "list", "-i", "a.ext", "-k", "use", "-v"]);
        assert!(matches!(cli.command, Command::List(_)));
        assert!(cli.verbose);
        assert_eq!(cli.command.args().overrides().keyword.as_deref(), Some("use"));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["stitch", "concat"]).is_err());
    }
}
