//! Dependency graph walk: follows directives from an entry file.

use std::path::Path;

use tracing::{debug, trace, warn};

use super::identity::FileIdentity;
use super::ledger::VisitLedger;
use crate::directive::{is_directory_reference, Directive};
use crate::error::ResolveError;
use crate::ports::{FileRecord, FileSystem};

/// One entry on the work stack.
struct Target {
    identity: FileIdentity,
    /// Referenced with a trailing `/`; only a directory satisfies it.
    directory: bool,
}

/// Resolves an entry file's transitive directive references.
///
/// All I/O goes through the [`FileSystem`] port. The resolver keeps no state
/// between calls; each [`Resolver::resolve`] builds a fresh ledger.
pub struct Resolver<'a> {
    fs: &'a dyn FileSystem,
    directive: Directive,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver reading through `fs` and matching `directive`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, directive: Directive) -> Self {
        Self { fs, directive }
    }

    /// Visits `entry` and everything it transitively references.
    ///
    /// The walk is depth-first and pre-order: a file enters the ledger before
    /// any of its references are visited, and a file already in the ledger is
    /// never scanned again. That guard is what terminates cycles. Files from
    /// a directory expansion are visited in path order. A work stack replaces
    /// recursion, so deep trees cannot exhaust the call stack.
    ///
    /// # Errors
    ///
    /// Fails on the first missing path, unreadable file or directory that
    /// cannot be listed; nothing visited so far is returned.
    pub fn resolve(&self, entry: &Path) -> Result<VisitLedger, ResolveError> {
        let entry = FileIdentity::from_entry(entry)
            .map_err(|_| ResolveError::NotFound { path: entry.to_path_buf() })?;

        let mut ledger = VisitLedger::default();
        let mut pending = vec![Target { identity: entry, directory: false }];
        while let Some(target) = pending.pop() {
            self.visit(target, &mut ledger, &mut pending)?;
        }

        debug!(files = ledger.len(), "resolution complete");
        Ok(ledger)
    }

    /// Processes one stack entry, pushing whatever it references.
    ///
    /// References are pushed in reverse so they pop in captured order.
    fn visit(
        &self,
        Target { identity: target, directory }: Target,
        ledger: &mut VisitLedger,
        pending: &mut Vec<Target>,
    ) -> Result<(), ResolveError> {
        // Only files enter the ledger, so a hit here is a known file. A
        // directory reference must still be classified to be rejected.
        if !directory && ledger.contains(&target) {
            trace!(path = %target, "already visited");
            return Ok(());
        }

        let record = self.fs.classify(target.as_path()).map_err(|e| {
            ResolveError::Unreadable { path: target.clone().into_path_buf(), reason: e.to_string() }
        })?;

        match record {
            FileRecord::Missing => Err(ResolveError::NotFound { path: target.into_path_buf() }),
            FileRecord::Directory => {
                let files = self.expand_directory(&target)?;
                pending.extend(
                    files.into_iter().rev().map(|identity| Target { identity, directory: false }),
                );
                Ok(())
            }
            FileRecord::File { .. } if directory => {
                debug!(path = %target, "directory reference names a file");
                Err(ResolveError::NotFound { path: target.into_path_buf() })
            }
            FileRecord::File { content, parent } => {
                let parent = FileIdentity::new(&parent);
                let references: Vec<Target> = self
                    .directive
                    .extract_references(&content)
                    .into_iter()
                    .map(|reference| Target {
                        identity: parent.join(reference),
                        directory: is_directory_reference(reference),
                    })
                    .collect();

                debug!(path = %target, references = references.len(), "visited file");
                ledger.insert(target, content);
                pending.extend(references.into_iter().rev());
                Ok(())
            }
        }
    }

    /// Lists the files below `dir` whose names end with the directive suffix,
    /// sorted by path.
    fn expand_directory(&self, dir: &FileIdentity) -> Result<Vec<FileIdentity>, ResolveError> {
        let entries = self.fs.list_dir(dir.as_path()).map_err(|e| {
            ResolveError::DirectoryEnumerationFailed {
                path: dir.clone().into_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let suffix = self.directive.suffix();
        let mut files: Vec<FileIdentity> = entries
            .iter()
            .map(|entry| FileIdentity::new(entry))
            .filter(|entry| entry.has_suffix(suffix))
            .collect();
        files.sort();
        files.dedup();

        if files.is_empty() {
            warn!(path = %dir, suffix, "directory reference matched no files");
        } else {
            debug!(path = %dir, matched = files.len(), total = entries.len(), "expanded directory");
        }
        Ok(files)
    }
}
