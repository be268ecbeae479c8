//! Checksum algorithms and their incremental-recompute cache.
//!
//! Algorithms are deliberately simple and classic: the point is brute-force
//! search speed over candidate ranges, not error-detection strength. Each
//! instance owns its cache slot, so instances can be handed to separate
//! workers without any shared mutable state.

pub mod adler32;
pub mod sum32;

pub use adler32::Adler32;
pub use sum32::Sum32;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::image::Image;

/// Selectable checksum variants.
///
/// `Crc32Reserved` is an extension point carried over from the original
/// tool; it has no specified polynomial and cannot be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Sum32,
    Adler32,
    Crc32Reserved,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] =
        [AlgorithmKind::Sum32, AlgorithmKind::Adler32, AlgorithmKind::Crc32Reserved];

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Sum32 => "sum32",
            AlgorithmKind::Adler32 => "adler32",
            AlgorithmKind::Crc32Reserved => "crc32",
        }
    }

    /// Whether the kind can actually be instantiated.
    pub fn is_implemented(&self) -> bool {
        !matches!(self, AlgorithmKind::Crc32Reserved)
    }

    /// Create a fresh algorithm instance with an empty cache slot.
    ///
    /// Selecting the reserved variant is rejected here, at configuration
    /// time: a placeholder returning a constant would flood the run with
    /// meaningless findings.
    pub fn instantiate(&self) -> Result<Box<dyn ChecksumAlgorithm>, ScanError> {
        match self {
            AlgorithmKind::Sum32 => Ok(Box::new(Sum32::new())),
            AlgorithmKind::Adler32 => Ok(Box::new(Adler32::new())),
            AlgorithmKind::Crc32Reserved => Err(ScanError::UnimplementedAlgorithm("crc32")),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum32" => Ok(AlgorithmKind::Sum32),
            "adler32" => Ok(AlgorithmKind::Adler32),
            "crc32" => Ok(AlgorithmKind::Crc32Reserved),
            other => Err(ScanError::InvalidConfig(format!("unknown algorithm '{other}'"))),
        }
    }
}

/// A checksum over a half-open byte range of the image.
///
/// `compute` takes `&mut self` because each instance carries the cache slot
/// for the incremental optimization; results are identical with or without
/// a cache hit.
pub trait ChecksumAlgorithm {
    fn name(&self) -> &'static str;

    /// Result width in bytes.
    fn width(&self) -> usize {
        4
    }

    /// Compute the checksum over `[start, end)`, little-endian result bytes.
    ///
    /// An empty range (`start == end`) is valid and yields the algorithm's
    /// initial value.
    fn compute(&mut self, image: &Image<'_>, start: u32, end: u32) -> Result<Vec<u8>, ScanError>;
}

/// Partial state for the most recently computed range of one instance.
///
/// Only the call pattern "same start, non-decreasing end" hits the cache;
/// that is exactly the order the orchestrator's pair loop produces. Any
/// other pattern is a miss and recomputes from `start`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CacheSlot<S> {
    start: u32,
    end: u32,
    state: S,
}

impl<S: Copy> CacheSlot<S> {
    pub(crate) fn new(start: u32, end: u32, state: S) -> Self {
        Self { start, end, state }
    }

    /// If the cached range is a prefix of `[start, end)`, return the offset
    /// to resume from and the state accumulated up to it.
    pub(crate) fn resume(&self, start: u32, end: u32) -> Option<(u32, S)> {
        if self.start == start && self.end <= end {
            Some((self.end, self.state))
        } else {
            None
        }
    }
}

/// Validate a compute range. Unlike `Image::slice`, an empty range is fine.
pub(crate) fn check_range(image: &Image<'_>, start: u32, end: u32) -> Result<(), ScanError> {
    if end < start || end > image.size() {
        return Err(ScanError::InvalidRange { start, end, size: image.size() });
    }
    Ok(())
}
