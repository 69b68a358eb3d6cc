//! The visit ledger: every file read during one resolution, in visit order.

use std::collections::HashSet;

use super::identity::FileIdentity;

/// One scanned file and the content it had when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Which file was visited.
    pub identity: FileIdentity,
    /// Raw content as read during the visit.
    pub content: String,
}

/// Insertion-ordered set of visited files with O(1) membership checks.
///
/// A file appears at most once. Insertion order is self-before-dependencies
/// (the entry file comes first); [`VisitLedger::dependency_first`] walks it
/// backwards, which is the order every output uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitLedger {
    visits: Vec<Visit>,
    seen: HashSet<FileIdentity>,
}

impl VisitLedger {
    /// Returns `true` if `identity` has already been visited.
    #[must_use]
    pub fn contains(&self, identity: &FileIdentity) -> bool {
        self.seen.contains(identity)
    }

    /// Records a visit. Returns `false` (and changes nothing) if the file
    /// was already recorded.
    pub fn insert(&mut self, identity: FileIdentity, content: String) -> bool {
        if !self.seen.insert(identity.clone()) {
            return false;
        }
        self.visits.push(Visit { identity, content });
        true
    }

    /// Number of visited files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if no file was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Visits in insertion order (dependents before their dependencies).
    pub fn iter(&self) -> std::slice::Iter<'_, Visit> {
        self.visits.iter()
    }

    /// Visits with dependencies before the files that import them.
    pub fn dependency_first(&self) -> std::iter::Rev<std::slice::Iter<'_, Visit>> {
        self.visits.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn id(path: &str) -> FileIdentity {
        FileIdentity::new(Path::new(path))
    }

    #[test]
    fn insert_is_idempotent_per_identity() {
        let mut ledger = VisitLedger::default();
        assert!(ledger.insert(id("/a.ext"), "first".into()));
        assert!(!ledger.insert(id("/a.ext"), "second".into()));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.iter().next().unwrap().content, "first");
    }

    #[test]
    fn dependency_first_reverses_insertion_order() {
        let mut ledger = VisitLedger::default();
        ledger.insert(id("/a.ext"), String::new());
        ledger.insert(id("/b.ext"), String::new());
        ledger.insert(id("/c.ext"), String::new());

        let order: Vec<_> = ledger.dependency_first().filter_map(|v| v.identity.file_name()).collect();
        assert_eq!(order, vec!["c.ext", "b.ext", "a.ext"]);
        assert!(ledger.contains(&id("/b.ext")));
        assert!(!ledger.contains(&id("/d.ext")));
    }
}
