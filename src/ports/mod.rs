//! Port traits defining external boundaries.
//!
//! The resolver reaches the outside world only through these traits.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{FileRecord, FileSystem};
