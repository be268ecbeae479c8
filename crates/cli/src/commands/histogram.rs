use std::path::PathBuf;

use anyhow::Result;

use checksum_hunter::load_image_bytes;
use hunter_core::image::Image;
use hunter_core::index::ByteIndex;

/// Print the per-byte-value occurrence counts of an image.
pub fn histogram_command(image_path: &str, json: bool) -> Result<()> {
    let bytes = load_image_bytes(&PathBuf::from(image_path))?;
    let image = Image::new(&bytes)?;
    let index = ByteIndex::build(&image);
    let counts = index.histogram();

    if json {
        println!("{}", serde_json::to_string_pretty(&counts.to_vec())?);
        return Ok(());
    }

    // Eight columns per row, 0x00 through 0xff.
    println!("Byte distribution [0x00 - 0xff]:");
    for (value, count) in counts.iter().enumerate() {
        print!("{:7} ", count);
        if value % 8 == 7 {
            println!();
        }
    }

    Ok(())
}
