use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    algorithms_command, candidates_command, checksum_command, histogram_command, scan_command,
    ScanArgs,
};

/// Checksum-field hunter CLI.
///
/// This CLI is a thin wrapper around `hunter-core` (exposed in code as
/// `hunter_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "checksum-hunter",
    version,
    about = "Locate candidate checksum fields in raw binary images",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline: discover candidate boundaries, spread them,
    /// checksum every surviving range, and search the image for matches.
    Scan(ScanArgs),

    /// List candidate boundary addresses found by run-length discovery.
    ///
    /// Shows what the scan would use as range starts/ends, before any
    /// checksumming happens.
    Candidates {
        /// Path to the image file.
        #[arg(long)]
        image: String,

        /// Run-length threshold for boundary discovery.
        #[arg(long, default_value_t = hunter_core::config::DEFAULT_SEQ_THRESHOLD)]
        threshold: u32,

        /// Also spread each candidate into its neighborhood.
        #[arg(long, default_value_t = false)]
        spread: bool,

        /// Neighborhood width used with --spread.
        #[arg(long, default_value_t = hunter_core::config::DEFAULT_SPREAD_WIDTH)]
        spread_width: u32,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the image's byte distribution (per-value occurrence counts).
    Histogram {
        /// Path to the image file.
        #[arg(long)]
        image: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Compute one checksum over an explicit range, optionally searching
    /// the image for the result.
    Checksum {
        /// Path to the image file.
        #[arg(long)]
        image: String,

        /// Range start (decimal or 0x hex), inclusive.
        #[arg(long)]
        start: String,

        /// Range end (decimal or 0x hex), exclusive.
        #[arg(long)]
        end: String,

        /// Algorithm name (see `algorithms`).
        #[arg(long, default_value = "sum32")]
        algorithm: String,

        /// Also search the image for the computed value.
        #[arg(long, default_value_t = false)]
        search: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the known checksum algorithms and whether each is available.
    Algorithms {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan(args) => scan_command(&args)?,
        Command::Candidates { image, threshold, spread, spread_width, json } => {
            candidates_command(&image, threshold, spread, spread_width, json)?
        }
        Command::Histogram { image, json } => histogram_command(&image, json)?,
        Command::Checksum { image, start, end, algorithm, search, json } => {
            checksum_command(&image, &start, &end, &algorithm, search, json)?
        }
        Command::Algorithms { json } => algorithms_command(json)?,
    }

    Ok(())
}
