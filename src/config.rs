//! Layered configuration for a resolution run.
//!
//! Precedence, highest first: command-line flags, `STITCH_*` environment
//! variables (both merged by clap), the YAML config file, built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::directive::Directive;
use crate::error::ConfigError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "stitch.yaml";

/// Default directive keyword.
pub const DEFAULT_KEYWORD: &str = "import";

/// Default file extension.
pub const DEFAULT_EXTENSION: &str = "swift";

/// Default line-comment prefix used by executable bundles.
pub const DEFAULT_COMMENT_PREFIX: &str = "//";

/// Contents of a `stitch.yaml` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directive keyword.
    pub keyword: Option<String>,
    /// File extension, with or without the leading dot.
    pub ext: Option<String>,
    /// Prefix used to comment out directive lines.
    pub comment_prefix: Option<String>,
}

impl FileConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        // An empty file parses as YAML null; treat it as "no settings".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Loads `explicit` if given, otherwise `stitch.yaml` from `dir` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed. A missing
    /// default file is not an error.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "using config file");
            return Self::load(&default_path);
        }
        Ok(Self::default())
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Directive keyword.
    pub keyword: Option<String>,
    /// File extension.
    pub ext: Option<String>,
    /// Comment prefix.
    pub comment_prefix: Option<String>,
}

/// Fully resolved, validated settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directive keyword.
    pub keyword: String,
    /// File suffix including the leading dot (e.g. `.swift`).
    pub suffix: String,
    /// Prefix used to comment out directive lines.
    pub comment_prefix: String,
}

impl Settings {
    /// Merges overrides over the file config over defaults, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword or extension is invalid.
    pub fn merge(overrides: &Overrides, file: &FileConfig) -> Result<Self, ConfigError> {
        let pick = |over: &Option<String>, from_file: &Option<String>, default: &str| {
            over.clone().or_else(|| from_file.clone()).unwrap_or_else(|| default.to_string())
        };

        let keyword = pick(&overrides.keyword, &file.keyword, DEFAULT_KEYWORD);
        let ext = pick(&overrides.ext, &file.ext, DEFAULT_EXTENSION);
        let comment_prefix =
            pick(&overrides.comment_prefix, &file.comment_prefix, DEFAULT_COMMENT_PREFIX);

        Ok(Self {
            keyword: validate_keyword(&keyword)?,
            suffix: normalize_extension(&ext)?,
            comment_prefix,
        })
    }

    /// Directive matcher for these settings.
    #[must_use]
    pub fn directive(&self) -> Directive {
        Directive::new(self.keyword.clone(), self.suffix.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            suffix: format!(".{DEFAULT_EXTENSION}"),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }
}

/// Turns `swift`, `.swift` or `swift.txt` into a leading-dot suffix.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidExtension`] if nothing remains after the dot.
pub fn normalize_extension(ext: &str) -> Result<String, ConfigError> {
    let bare = ext.trim().trim_start_matches('.');
    if bare.is_empty() {
        return Err(ConfigError::InvalidExtension);
    }
    Ok(format!(".{bare}"))
}

/// Checks that a keyword can start a directive line.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidKeyword`] if it is empty or contains whitespace.
pub fn validate_keyword(keyword: &str) -> Result<String, ConfigError> {
    if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidKeyword(keyword.to_string()));
    }
    Ok(keyword.to_string())
}
