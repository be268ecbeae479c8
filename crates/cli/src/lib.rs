use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use sha2::{Digest, Sha256};

/// Read an image file fully into memory.
///
/// Mapping/reading is the frontend's responsibility; the core only borrows
/// the buffer. Empty files are rejected up front since nothing useful can
/// be discovered in them.
pub fn load_image_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    if bytes.is_empty() {
        return Err(anyhow!("Image file is empty: {}", path.display()));
    }
    Ok(bytes)
}

/// Compute the SHA-256 hash of a file and return it as a hex string.
pub fn sha256_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open image for hashing: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];

    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("Failed to read image for hashing: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let digest = hasher.finalize();
    Ok(format!("{:x}", digest))
}

/// Parse an address given as decimal or 0x-prefixed hex.
pub fn parse_address(s: &str) -> Result<u32> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse::<u32>()
    };
    parsed.map_err(|_| anyhow!("Invalid address: {s}"))
}

/// Render raw value bytes as lowercase hex, in image byte order.
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
