use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use checksum_hunter::load_image_bytes;
use hunter_core::addresses::AddressSet;
use hunter_core::discover::discover;
use hunter_core::image::Image;

#[derive(Debug, Serialize)]
struct CandidateListing {
    image_size: u32,
    threshold: u32,
    spread_width: Option<u32>,
    count: usize,
    addresses: Vec<u32>,
}

/// List candidate boundary addresses, optionally after spreading.
pub fn candidates_command(
    image_path: &str,
    threshold: u32,
    spread: bool,
    spread_width: u32,
    json: bool,
) -> Result<()> {
    let bytes = load_image_bytes(&PathBuf::from(image_path))?;
    let image = Image::new(&bytes)?;

    let mut set =
        AddressSet::new(hunter_core::config::DEFAULT_MAX_ADDRESSES, image.size());
    discover(&image, threshold, &mut set)?;
    let discovered = set.len();
    if spread {
        set.spread(spread_width)?;
    }

    if json {
        let listing = CandidateListing {
            image_size: image.size(),
            threshold,
            spread_width: spread.then_some(spread_width),
            count: set.len(),
            addresses: set.iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Candidate addresses ({} discovered, {} total):", discovered, set.len());
    for addr in set.iter() {
        println!("  {:#010x}", addr);
    }

    Ok(())
}
