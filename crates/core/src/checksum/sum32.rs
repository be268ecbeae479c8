use crate::checksum::{check_range, CacheSlot, ChecksumAlgorithm};
use crate::error::ScanError;
use crate::image::Image;

/// Wrapping 32-bit byte sum, the checksum most commonly found guarding
/// firmware sections.
#[derive(Debug, Default)]
pub struct Sum32 {
    cache: Option<CacheSlot<u32>>,
}

impl Sum32 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChecksumAlgorithm for Sum32 {
    fn name(&self) -> &'static str {
        "sum32"
    }

    fn compute(&mut self, image: &Image<'_>, start: u32, end: u32) -> Result<Vec<u8>, ScanError> {
        check_range(image, start, end)?;

        let (from, mut sum) = self
            .cache
            .as_ref()
            .and_then(|slot| slot.resume(start, end))
            .unwrap_or((start, 0));

        for &byte in &image.bytes()[from as usize..end as usize] {
            sum = sum.wrapping_add(u32::from(byte));
        }

        self.cache = Some(CacheSlot::new(start, end, sum));
        Ok(sum.to_le_bytes().to_vec())
    }
}
