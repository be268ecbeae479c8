use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use serde::Serialize;

use checksum_hunter::{hex_bytes, load_image_bytes, sha256_file};
use hunter_core::checksum::AlgorithmKind;
use hunter_core::config::ScanConfig;
use hunter_core::image::Image;
use hunter_core::index::ByteIndex;
use hunter_core::model::{Finding, ScanStats};
use hunter_core::scan::Scanner;

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to the image file.
    #[arg(long)]
    pub image: String,

    /// Optional JSON config file; command-line flags override its values.
    #[arg(long)]
    pub config: Option<String>,

    /// Run-length threshold for boundary discovery.
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Neighborhood width for candidate spreading.
    #[arg(long)]
    pub spread_width: Option<u32>,

    /// Capacity of the candidate address set.
    #[arg(long)]
    pub max_addresses: Option<usize>,

    /// Comma-separated algorithm names (e.g., `sum32,adler32`).
    #[arg(long)]
    pub algorithms: Option<String>,

    /// Stop after this many findings.
    #[arg(long)]
    pub max_findings: Option<usize>,

    /// Report only the first occurrence of each distinct result value.
    #[arg(long, default_value_t = false)]
    pub first_match_only: bool,

    /// Write a full JSON scan report to this path.
    #[arg(long)]
    pub report: Option<String>,

    /// Print diagnostic counters after the findings.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Emit findings as JSON instead of human-readable text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Everything worth persisting about one scan run.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub tool_version: String,
    pub image_path: String,
    pub image_size: u32,
    pub image_sha256: String,
    pub started_at: String,
    pub finished_at: String,
    pub config: ScanConfig,
    pub stats: ScanStats,
    pub findings: Vec<Finding>,
}

/// Merge the config file (if any) with command-line overrides.
fn resolve_config(args: &ScanArgs) -> Result<ScanConfig> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::from_json_file(Path::new(path))?,
        None => ScanConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.seq_threshold = threshold;
    }
    if let Some(width) = args.spread_width {
        config.spread_width = width;
    }
    if let Some(max) = args.max_addresses {
        config.max_addresses = max;
    }
    if let Some(list) = &args.algorithms {
        config.algorithms = parse_algorithm_list(list)?;
    }
    if args.max_findings.is_some() {
        config.max_findings = args.max_findings;
    }
    if args.first_match_only {
        config.first_match_only = true;
    }
    Ok(config)
}

/// Parse a comma-separated algorithm list.
pub fn parse_algorithm_list(list: &str) -> Result<Vec<AlgorithmKind>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<AlgorithmKind>().map_err(anyhow::Error::from))
        .collect()
}

/// Run the full pipeline over an image file.
pub fn scan_command(args: &ScanArgs) -> Result<()> {
    let image_path = PathBuf::from(&args.image);
    let config = resolve_config(args)?;

    let bytes = load_image_bytes(&image_path)?;
    let image = Image::new(&bytes)?;
    let index = ByteIndex::build(&image);

    let started_at = Utc::now().to_rfc3339();
    let mut scanner = Scanner::new(image, &index, &config)?;
    let mut findings: Vec<Finding> = Vec::new();
    let stats = scanner.run(&mut findings)?;
    let finished_at = Utc::now().to_rfc3339();

    if args.json {
        let serialized = serde_json::to_string_pretty(&findings)?;
        println!("{}", serialized);
    } else {
        println!("Findings:");
        if findings.is_empty() {
            println!("(none)");
        }
        for finding in &findings {
            println!(
                "- {} over [{:#010x}, {:#010x}) = {} stored at {:#010x}",
                finding.algorithm,
                finding.start,
                finding.end,
                hex_bytes(&finding.value),
                finding.found_at
            );
        }
    }

    if args.verbose && !args.json {
        println!();
        println!("Stats:");
        println!("  Candidates discovered: {}", stats.candidates_discovered);
        println!("  Candidates after spread: {}", stats.candidates_spread);
        println!("  Pairs checked: {}", stats.pairs_checked);
        println!("  Pairs skipped (near): {}", stats.pairs_near);
        println!("  Pairs skipped (invalid): {}", stats.pairs_invalid);
        println!("  Checksums computed: {}", stats.checksums_computed);
        println!("  Findings: {}", stats.findings);
    }

    if let Some(report_path) = &args.report {
        let report = ScanReport {
            tool_version: hunter_core::version().to_string(),
            image_path: image_path.display().to_string(),
            image_size: image.size(),
            image_sha256: sha256_file(&image_path)?,
            started_at,
            finished_at,
            config,
            stats,
            findings,
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write scan report: {report_path}"))?;
        if !args.json {
            println!();
            println!("Report written to {report_path}");
        }
    }

    Ok(())
}
