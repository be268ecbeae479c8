//! Occurrence search: find every offset whose bytes match a checksum result.
//!
//! The byte index reduces the scan to the bucket of the needle's first byte;
//! only the remaining bytes are verified by direct comparison. Valid for any
//! needle width >= 1.

use std::collections::HashMap;

use crate::image::Image;
use crate::index::ByteIndex;

/// All offsets where `needle` occurs in the image, ascending.
///
/// Bucket entries too close to the image end for the full needle are
/// skipped. An empty needle matches nothing.
pub fn find_occurrences(image: &Image<'_>, index: &ByteIndex, needle: &[u8]) -> Vec<u32> {
    let mut matches = Vec::new();
    if needle.is_empty() {
        return matches;
    }

    let bytes = image.bytes();
    for &offset in index.offsets_of(needle[0]) {
        let start = offset as usize;
        let end = start + needle.len();
        if end > bytes.len() {
            // Bucket offsets are ascending; everything after also overruns.
            break;
        }
        if bytes[start + 1..end] == needle[1..] {
            matches.push(offset);
        }
    }
    matches
}

/// Reference full-buffer scan; the index-based search must agree with it.
pub fn naive_scan(image: &Image<'_>, needle: &[u8]) -> Vec<u32> {
    if needle.is_empty() {
        return Vec::new();
    }
    image
        .bytes()
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(offset, _)| offset as u32)
        .collect()
}

/// Bounded cache from literal result value to its first occurrence.
///
/// Many ranges legitimately produce the same checksum (padding-heavy images
/// especially); when only one representative location per literal value is
/// needed, this skips the repeated bucket walks. Misses are cached too, so a
/// value absent from the image is scanned for at most once. The entry cap
/// keeps memory bounded for adversarial images; once full, new values fall
/// back to a plain search.
#[derive(Debug)]
pub struct ValueCache {
    entries: HashMap<Vec<u8>, Option<u32>>,
    max_entries: usize,
}

impl ValueCache {
    pub const DEFAULT_MAX_ENTRIES: usize = 65536;

    pub fn new() -> Self {
        Self::with_max_entries(Self::DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self { entries: HashMap::new(), max_entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First offset where `needle` occurs, consulting the cache before the
    /// index.
    pub fn first_occurrence(
        &mut self,
        image: &Image<'_>,
        index: &ByteIndex,
        needle: &[u8],
    ) -> Option<u32> {
        if let Some(&cached) = self.entries.get(needle) {
            return cached;
        }
        let found = find_occurrences(image, index, needle).first().copied();
        if self.entries.len() < self.max_entries {
            self.entries.insert(needle.to_vec(), found);
        }
        found
    }
}

impl Default for ValueCache {
    fn default() -> Self {
        Self::new()
    }
}
