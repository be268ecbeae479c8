use anyhow::Result;
use serde::Serialize;

use hunter_core::checksum::AlgorithmKind;

#[derive(Debug, Serialize)]
struct AlgorithmInfo {
    name: &'static str,
    available: bool,
}

/// List known checksum algorithms and their availability.
pub fn algorithms_command(json: bool) -> Result<()> {
    let infos: Vec<AlgorithmInfo> = AlgorithmKind::ALL
        .iter()
        .map(|kind| AlgorithmInfo { name: kind.name(), available: kind.is_implemented() })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("Algorithms:");
    for info in infos {
        let status = if info.available { "available" } else { "reserved (not implemented)" };
        println!("- {} ({})", info.name, status);
    }

    Ok(())
}
