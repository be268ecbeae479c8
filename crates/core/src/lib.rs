//! hunter-core
//!
//! Core library for locating candidate checksum fields in raw binary images
//! (firmware dumps and similar).
//!
//! The pipeline: scan the image for heuristic section boundaries (ends of
//! long 0x00/0xFF runs), widen each boundary into a neighborhood of candidate
//! addresses, then for every ordered candidate pair compute a set of simple
//! checksums over the enclosed range and search the image for bytes matching
//! the result. A stored checksum protecting that range shows up as a
//! byte-for-byte match.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, Python bindings, etc.).

pub mod addresses;
pub mod checksum;
pub mod config;
pub mod discover;
pub mod error;
pub mod image;
pub mod index;
pub mod model;
pub mod scan;
pub mod search;

pub use error::ScanError;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
