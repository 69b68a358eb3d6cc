//! Output assembly from a resolved ledger.
//!
//! Every output lists dependencies before the files that import them. No
//! function here does I/O; content was captured when each file was visited.

use crate::directive::Directive;
use crate::resolve::{FileIdentity, VisitLedger};

/// Resolved files, dependencies first.
#[must_use]
pub fn file_list(ledger: &VisitLedger) -> Vec<FileIdentity> {
    ledger.dependency_first().map(|visit| visit.identity.clone()).collect()
}

/// Raw concatenation of every file, each preceded by a newline.
#[must_use]
pub fn bundle(ledger: &VisitLedger) -> String {
    let mut out = String::new();
    for visit in ledger.dependency_first() {
        out.push('\n');
        out.push_str(&visit.content);
    }
    out
}

/// Single-source bundle: files joined by a newline, with every directive
/// line commented out using `comment_prefix`.
#[must_use]
pub fn executable(ledger: &VisitLedger, directive: &Directive, comment_prefix: &str) -> String {
    ledger
        .dependency_first()
        .map(|visit| directive.comment_out(&visit.content, comment_prefix))
        .collect::<Vec<_>>()
        .join("\n")
}
