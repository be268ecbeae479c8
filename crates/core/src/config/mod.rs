//! Scan configuration.
//!
//! Defaults match the constants the heuristics were tuned with; frontends
//! may override any of them or load a whole config from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::checksum::AlgorithmKind;
use crate::error::ScanError;

/// Run length a 0x00/0xFF sequence must exceed before its end counts as a
/// candidate boundary.
pub const DEFAULT_SEQ_THRESHOLD: u32 = 64;
/// Neighborhood half-width used when spreading candidate addresses.
pub const DEFAULT_SPREAD_WIDTH: u32 = 64;
/// Hard cap on the candidate address set.
pub const DEFAULT_MAX_ADDRESSES: usize = 1024 * 1024;

/// Serializable configuration for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Run-length threshold for boundary discovery.
    pub seq_threshold: u32,
    /// Spread width; also the minimum distance between a pair's start and end.
    pub spread_width: u32,
    /// Capacity of the candidate address set.
    pub max_addresses: usize,
    /// Algorithms to run over each candidate range.
    pub algorithms: Vec<AlgorithmKind>,
    /// Stop after this many findings (checked between pairs).
    pub max_findings: Option<usize>,
    /// Report only the first occurrence of each distinct result value
    /// instead of every occurrence.
    pub first_match_only: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            seq_threshold: DEFAULT_SEQ_THRESHOLD,
            spread_width: DEFAULT_SPREAD_WIDTH,
            max_addresses: DEFAULT_MAX_ADDRESSES,
            algorithms: vec![AlgorithmKind::Sum32, AlgorithmKind::Adler32],
            max_findings: None,
            first_match_only: false,
        }
    }
}

impl ScanConfig {
    /// Reject configurations that cannot drive a meaningful run.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.seq_threshold == 0 {
            return Err(ScanError::InvalidConfig("seq_threshold must be at least 1".into()));
        }
        if self.spread_width == 0 {
            return Err(ScanError::InvalidConfig("spread_width must be at least 1".into()));
        }
        if self.max_addresses == 0 {
            return Err(ScanError::InvalidConfig("max_addresses must be at least 1".into()));
        }
        if self.algorithms.is_empty() {
            return Err(ScanError::InvalidConfig("at least one algorithm must be enabled".into()));
        }
        for kind in &self.algorithms {
            if !kind.is_implemented() {
                return Err(ScanError::UnimplementedAlgorithm(kind.name()));
            }
        }
        Ok(())
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scan config {}", path.display()))?;
        let config: ScanConfig = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse scan config {}", path.display()))?;
        Ok(config)
    }
}
