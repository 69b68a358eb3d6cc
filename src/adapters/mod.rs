//! Adapter implementations of the port traits.
//!
//! `live` touches the real disk, `recording` wraps a live adapter and writes
//! a cassette, `replaying` answers from a cassette without any I/O.

pub mod live;
pub mod recording;
pub mod replaying;
