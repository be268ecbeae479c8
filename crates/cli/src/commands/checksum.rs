use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::Serialize;

use checksum_hunter::{hex_bytes, load_image_bytes, parse_address};
use hunter_core::checksum::{AlgorithmKind, ChecksumAlgorithm};
use hunter_core::image::Image;
use hunter_core::index::ByteIndex;
use hunter_core::search::find_occurrences;

#[derive(Debug, Serialize)]
struct ChecksumOutput {
    algorithm: String,
    start: u32,
    end: u32,
    value: String,
    occurrences: Option<Vec<u32>>,
}

/// Compute one checksum over an explicit range; useful for verifying a
/// finding or probing a suspected field by hand.
pub fn checksum_command(
    image_path: &str,
    start: &str,
    end: &str,
    algorithm: &str,
    search: bool,
    json: bool,
) -> Result<()> {
    let start = parse_address(start)?;
    let end = parse_address(end)?;
    if end < start {
        return Err(anyhow!("Range end {end:#x} precedes start {start:#x}"));
    }

    let kind: AlgorithmKind = algorithm.parse()?;
    let mut instance = kind.instantiate()?;

    let bytes = load_image_bytes(&PathBuf::from(image_path))?;
    let image = Image::new(&bytes)?;

    let value = instance.compute(&image, start, end)?;
    let occurrences = if search {
        let index = ByteIndex::build(&image);
        Some(find_occurrences(&image, &index, &value))
    } else {
        None
    };

    if json {
        let output = ChecksumOutput {
            algorithm: kind.name().to_string(),
            start,
            end,
            value: hex_bytes(&value),
            occurrences,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} over [{:#010x}, {:#010x}) = {}", kind.name(), start, end, hex_bytes(&value));
    if let Some(offsets) = occurrences {
        if offsets.is_empty() {
            println!("No occurrences in image.");
        } else {
            println!("Occurrences:");
            for offset in offsets {
                println!("  {:#010x}", offset);
            }
        }
    }

    Ok(())
}
