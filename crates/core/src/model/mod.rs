//! Shared records produced by the scanning pipeline.

use serde::{Deserialize, Serialize};

/// A reported match: bytes at `found_at` equal the checksum computed over
/// `[start, end)` with the named algorithm.
///
/// Immutable once produced; the reporting layer decides how to format it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub algorithm: String,
    pub start: u32,
    pub end: u32,
    pub found_at: u32,
    /// Raw result bytes as they appear in the image (little-endian).
    pub value: Vec<u8>,
}

/// Diagnostic counters for one orchestrator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Candidate addresses produced by discovery, before spreading.
    pub candidates_discovered: usize,
    /// Candidate addresses after spreading.
    pub candidates_spread: usize,
    /// Ordered pairs actually checksummed.
    pub pairs_checked: usize,
    /// Pairs skipped because the end lay within the spread width of the start.
    pub pairs_near: usize,
    /// Pairs skipped because the range fell outside the image.
    pub pairs_invalid: usize,
    /// Individual checksum computations performed.
    pub checksums_computed: usize,
    /// Findings emitted to the sink.
    pub findings: usize,
}
