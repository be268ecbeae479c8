//! Candidate address set and neighborhood spreading.
//!
//! The set preserves insertion order (so iteration is deterministic and
//! matches the order candidates were discovered), rejects duplicates, and
//! enforces an explicit capacity instead of writing past a fixed buffer.
//! Every member is bounded by the image size.

use std::collections::HashSet;

use crate::error::ScanError;

/// Insertion-ordered, deduplicated set of candidate addresses.
#[derive(Debug, Clone)]
pub struct AddressSet {
    addrs: Vec<u32>,
    seen: HashSet<u32>,
    /// Hard cap on the number of members; exceeding it is an error.
    capacity: usize,
    /// Largest admissible address (the image size).
    bound: u32,
}

impl AddressSet {
    pub fn new(capacity: usize, bound: u32) -> Self {
        Self { addrs: Vec::new(), seen: HashSet::new(), capacity, bound }
    }

    /// Insert an address.
    ///
    /// Returns `Ok(true)` if the address was added, `Ok(false)` if it was
    /// already present or lies beyond the image bound (spreading overshoots
    /// near the image end; such addresses could never terminate a valid
    /// range, so they are not recorded). A full set is an error — the
    /// candidate list must never be silently truncated.
    pub fn insert(&mut self, addr: u32) -> Result<bool, ScanError> {
        if addr > self.bound || self.seen.contains(&addr) {
            return Ok(false);
        }
        if self.addrs.len() >= self.capacity {
            return Err(ScanError::CapacityExceeded { limit: self.capacity });
        }
        self.seen.insert(addr);
        self.addrs.push(addr);
        Ok(true)
    }

    pub fn contains(&self, addr: u32) -> bool {
        self.seen.contains(&addr)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.addrs.iter().copied()
    }

    /// Widen every current member into a neighborhood of `width - 1`
    /// addresses on each side.
    ///
    /// Boundary detection is imprecise by a few bytes, so a single guessed
    /// boundary becomes `a ± j` for `j in 1..width`, never underflowing
    /// below zero. The member list is snapshotted first: addresses added by
    /// the spread are not themselves spread again.
    pub fn spread(&mut self, width: u32) -> Result<(), ScanError> {
        let snapshot = self.addrs.clone();
        for addr in snapshot {
            for j in 1..width {
                self.insert(addr.saturating_add(j))?;
                if addr >= j {
                    self.insert(addr - j)?;
                }
            }
        }
        Ok(())
    }
}
