//! Heuristic discovery of candidate boundary addresses.
//!
//! Firmware sections are conventionally padded with 0xFF (erased flash) or
//! 0x00 fill, so the byte immediately after a long run of either value is a
//! plausible section/field boundary. The two padding conventions are
//! mutually exclusive, so the image gets one pass per tracked value; both
//! passes feed the same deduplicated set.

use crate::addresses::AddressSet;
use crate::error::ScanError;
use crate::image::Image;

/// Scan the image and collect candidate boundary addresses.
///
/// Address 0 is always seeded: the image start is a boundary by definition.
/// In each pass a run counter tracks consecutive occurrences of the padding
/// value; once it exceeds `seq_threshold` the pass arms itself, and the
/// offset of the first byte breaking the run (the transition point, not the
/// run start) is recorded.
pub fn discover(
    image: &Image<'_>,
    seq_threshold: u32,
    set: &mut AddressSet,
) -> Result<(), ScanError> {
    set.insert(0)?;
    run_pass(image, 0xff, seq_threshold, set)?;
    run_pass(image, 0x00, seq_threshold, set)?;
    Ok(())
}

/// One linear pass tracking runs of a single padding value.
fn run_pass(
    image: &Image<'_>,
    tracked: u8,
    seq_threshold: u32,
    set: &mut AddressSet,
) -> Result<(), ScanError> {
    let mut sequence: u32 = 0;
    let mut dump_pending = false;

    for (addr, &byte) in image.bytes().iter().enumerate() {
        if byte == tracked {
            sequence += 1;
        } else {
            if dump_pending {
                set.insert(addr as u32)?;
                dump_pending = false;
            }
            sequence = 0;
        }
        if sequence > seq_threshold {
            dump_pending = true;
        }
    }
    Ok(())
}
