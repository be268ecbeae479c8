use crate::checksum::{check_range, CacheSlot, ChecksumAlgorithm};
use crate::error::ScanError;
use crate::image::Image;

/// Largest prime below 2^16, per the Adler-32 definition.
const MOD_ADLER: u32 = 65521;

/// Standard Adler-32, restricted to the requested range rather than the
/// whole image.
#[derive(Debug, Default)]
pub struct Adler32 {
    cache: Option<CacheSlot<(u32, u32)>>,
}

impl Adler32 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChecksumAlgorithm for Adler32 {
    fn name(&self) -> &'static str {
        "adler32"
    }

    fn compute(&mut self, image: &Image<'_>, start: u32, end: u32) -> Result<Vec<u8>, ScanError> {
        check_range(image, start, end)?;

        let (from, (mut s1, mut s2)) = self
            .cache
            .as_ref()
            .and_then(|slot| slot.resume(start, end))
            .unwrap_or((start, (1, 0)));

        for &byte in &image.bytes()[from as usize..end as usize] {
            s1 = (s1 + u32::from(byte)) % MOD_ADLER;
            s2 = (s2 + s1) % MOD_ADLER;
        }

        self.cache = Some(CacheSlot::new(start, end, (s1, s2)));
        Ok(((s2 << 16) | s1).to_le_bytes().to_vec())
    }
}
