//! Directive parsing: finds `<keyword> <path>` lines in source text.
//!
//! A directive is a line that starts with the keyword, a single space, and a
//! run of path characters (word characters, `/` and `.`). The captured path
//! must end either in the configured file suffix or in `/`, the latter
//! naming a directory. Anything after the captured path is ignored.

use std::collections::HashSet;

/// Configured directive syntax: the keyword and the file suffix it imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    keyword: String,
    suffix: String,
}

impl Directive {
    /// Creates a directive matcher. `suffix` is matched literally (e.g. `.swift`).
    #[must_use]
    pub fn new(keyword: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), suffix: suffix.into() }
    }

    /// The file suffix directive paths (and directory expansions) must end with.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the path captured from `line`, if the line is a directive.
    #[must_use]
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.strip_prefix(self.keyword.as_str())?.strip_prefix(' ')?;

        let run = rest
            .char_indices()
            .find(|&(_, c)| !is_path_char(c))
            .map_or(rest.len(), |(i, _)| i);

        // Longest prefix of the run that is followed by the suffix or a `/`.
        rest[..run].char_indices().rev().find_map(|(i, c)| {
            let end = i + c.len_utf8();
            let tail = &rest[end..];
            if tail.starts_with(self.suffix.as_str()) {
                Some(&rest[..end + self.suffix.len()])
            } else if tail.starts_with('/') {
                Some(&rest[..=end])
            } else {
                None
            }
        })
    }

    /// Extracts referenced paths from `content`, in order of first appearance.
    ///
    /// Duplicates are dropped. Lines that are not directives are ignored.
    #[must_use]
    pub fn extract_references<'a>(&self, content: &'a str) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        content
            .lines()
            .filter_map(|line| self.parse_line(line))
            .filter(|path| seen.insert(*path))
            .collect()
    }

    /// Returns `content` with every directive line prefixed by `"<prefix> "`.
    ///
    /// All other text, including line endings, is left untouched.
    #[must_use]
    pub fn comment_out(&self, content: &str, prefix: &str) -> String {
        let mut out = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            let body = line.strip_suffix('\n').unwrap_or(line);
            let body = body.strip_suffix('\r').unwrap_or(body);
            if self.parse_line(body).is_some() {
                out.push_str(prefix);
                out.push(' ');
            }
            out.push_str(line);
        }
        out
    }
}

/// Returns `true` if `path` names a directory (trailing `/`).
#[must_use]
pub fn is_directory_reference(path: &str) -> bool {
    path.ends_with('/')
}

fn is_path_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '/' || c == '.'
}
