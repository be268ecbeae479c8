//! Inverted index from byte value to the offsets holding that value.
//!
//! Built by one linear pass over the image and immutable afterwards. The
//! occurrence search only has to walk the bucket for a result's first byte
//! instead of the whole image — for a roughly uniform byte distribution that
//! is a 256x reduction per lookup, which dominates the tool's runtime.

use crate::image::Image;

/// 256 buckets of ascending offsets, one per byte value.
#[derive(Debug, Clone)]
pub struct ByteIndex {
    buckets: Vec<Vec<u32>>,
}

impl ByteIndex {
    /// Index every offset of the image.
    pub fn build(image: &Image<'_>) -> Self {
        let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); 256];
        for (offset, &byte) in image.bytes().iter().enumerate() {
            buckets[byte as usize].push(offset as u32);
        }
        Self { buckets }
    }

    /// All offsets holding `value`, in ascending order.
    pub fn offsets_of(&self, value: u8) -> &[u32] {
        &self.buckets[value as usize]
    }

    /// Per-value occurrence counts (the byte distribution of the image).
    pub fn histogram(&self) -> [u32; 256] {
        let mut counts = [0u32; 256];
        for (value, bucket) in self.buckets.iter().enumerate() {
            counts[value] = bucket.len() as u32;
        }
        counts
    }
}
