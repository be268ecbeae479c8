//! Orchestrator: drives checksum computation and occurrence search over
//! every ordered candidate pair.
//!
//! The pair loop holds the start address fixed while the end address walks
//! the set, which is exactly the pattern the algorithms' incremental cache
//! accelerates. Reorder the loops and everything still works, it just
//! recomputes from scratch each time.

use crate::addresses::AddressSet;
use crate::checksum::ChecksumAlgorithm;
use crate::config::ScanConfig;
use crate::discover::discover;
use crate::error::ScanError;
use crate::image::Image;
use crate::index::ByteIndex;
use crate::model::{Finding, ScanStats};
use crate::search::{find_occurrences, ValueCache};

/// Receives findings as the orchestrator produces them.
///
/// The core never formats or prints; the reporting layer implements this.
pub trait FindingSink {
    fn record(&mut self, finding: Finding);
}

impl FindingSink for Vec<Finding> {
    fn record(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Ties together image, byte index, configuration, and algorithm instances
/// for one run.
///
/// `Image` and `ByteIndex` are read-only and may be shared; the algorithm
/// instances (and their cache slots) belong to this scanner alone, so
/// sharding the pair space across scanners is safe.
pub struct Scanner<'a> {
    image: Image<'a>,
    index: &'a ByteIndex,
    config: &'a ScanConfig,
    algorithms: Vec<Box<dyn ChecksumAlgorithm>>,
    value_cache: Option<ValueCache>,
}

impl<'a> Scanner<'a> {
    /// Validate the config and instantiate its algorithms.
    pub fn new(
        image: Image<'a>,
        index: &'a ByteIndex,
        config: &'a ScanConfig,
    ) -> Result<Self, ScanError> {
        config.validate()?;
        let algorithms = config
            .algorithms
            .iter()
            .map(|kind| kind.instantiate())
            .collect::<Result<Vec<_>, _>>()?;
        let value_cache = config.first_match_only.then(ValueCache::new);
        Ok(Self { image, index, config, algorithms, value_cache })
    }

    /// Full pipeline: discovery, spreading, then the pair loop.
    pub fn run(&mut self, sink: &mut dyn FindingSink) -> Result<ScanStats, ScanError> {
        let mut addresses =
            AddressSet::new(self.config.max_addresses, self.image.size());
        discover(&self.image, self.config.seq_threshold, &mut addresses)?;

        let mut stats = ScanStats { candidates_discovered: addresses.len(), ..Default::default() };

        addresses.spread(self.config.spread_width)?;
        stats.candidates_spread = addresses.len();

        // The set is frozen from here on.
        self.run_pairs(&addresses, sink, &mut stats)?;
        Ok(stats)
    }

    /// Pair loop over an already-built (frozen) address set.
    ///
    /// Pairs whose end lies within the spread width of the start are almost
    /// certainly artifacts of the spreading itself and are skipped. Ranges
    /// falling outside the image are counted and skipped; aggregate coverage
    /// matters, not any single pair.
    pub fn run_pairs(
        &mut self,
        addresses: &AddressSet,
        sink: &mut dyn FindingSink,
        stats: &mut ScanStats,
    ) -> Result<(), ScanError> {
        'pairs: for a_start in addresses.iter() {
            for a_end in addresses.iter() {
                if let Some(max) = self.config.max_findings {
                    if stats.findings >= max {
                        break 'pairs;
                    }
                }
                if a_end <= a_start.saturating_add(self.config.spread_width) {
                    stats.pairs_near += 1;
                    continue;
                }
                if a_end > self.image.size() {
                    stats.pairs_invalid += 1;
                    continue;
                }
                stats.pairs_checked += 1;

                for algorithm in &mut self.algorithms {
                    let value = match algorithm.compute(&self.image, a_start, a_end) {
                        Ok(value) => value,
                        Err(ScanError::InvalidRange { .. }) => {
                            stats.pairs_invalid += 1;
                            break;
                        }
                        Err(other) => return Err(other),
                    };
                    stats.checksums_computed += 1;

                    match &mut self.value_cache {
                        Some(cache) => {
                            if let Some(offset) =
                                cache.first_occurrence(&self.image, self.index, &value)
                            {
                                stats.findings += 1;
                                sink.record(Finding {
                                    algorithm: algorithm.name().to_string(),
                                    start: a_start,
                                    end: a_end,
                                    found_at: offset,
                                    value: value.clone(),
                                });
                            }
                        }
                        None => {
                            for offset in find_occurrences(&self.image, self.index, &value) {
                                stats.findings += 1;
                                sink.record(Finding {
                                    algorithm: algorithm.name().to_string(),
                                    start: a_start,
                                    end: a_end,
                                    found_at: offset,
                                    value: value.clone(),
                                });
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
