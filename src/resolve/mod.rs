//! Dependency resolution: walks directive references from an entry file.
//!
//! The walker visits files depth-first, records each one once in a
//! [`VisitLedger`], and expands directory references into the matching files
//! beneath them. Outputs are derived from the ledger by [`crate::assemble`].

pub mod identity;
pub mod ledger;
pub mod walker;

pub use identity::FileIdentity;
pub use ledger::{Visit, VisitLedger};
pub use walker::Resolver;
