//! Sigil CLI - Command-line tool for sealing and verifying report PNGs.
//!
//! This is the main entry point for the Sigil command-line application.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use sigil::png::Error as PngError;
use sigil::prelude::*;
use sigil::report::Error as ReportError;

/// Sigil - tamper-evident sealing for combat-report PNG exports
#[derive(Parser)]
#[command(name = "sigil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a verification chunk into a PNG
    Seal {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// JSON file with the report metadata
        #[arg(short, long)]
        metadata: PathBuf,

        /// Output file (defaults to <input>.sealed.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check whether a PNG's embedded statistics are authentic
    Verify {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the embedded metadata record without judging it
    Extract {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List the chunks of a PNG
    Chunks {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Recompute and check each chunk's CRC
        #[arg(long)]
        check_crc: bool,
    },
}

/// Metadata fields supplied by the exporter. The hash is always recomputed
/// here, never taken from the request.
#[derive(Deserialize)]
struct SealRequest {
    timestamp: String,
    duration: u64,
    players: Vec<PlayerRecord>,
    version: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seal {
            input,
            metadata,
            output,
        } => {
            cmd_seal(&input, &metadata, output.as_ref())?;
        }
        Commands::Verify { input, json } => {
            cmd_verify(&input, json)?;
        }
        Commands::Extract { input } => {
            cmd_extract(&input)?;
        }
        Commands::Chunks { input, check_crc } => {
            cmd_chunks(&input, check_crc)?;
        }
    }

    Ok(())
}

fn cmd_seal(input: &PathBuf, metadata_path: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    println!("Sealing: {}", input.display());

    let png = fs::read(input).context("Failed to read input PNG")?;
    let request = fs::read_to_string(metadata_path).context("Failed to read metadata file")?;
    let request: SealRequest =
        serde_json::from_str(&request).context("Failed to parse metadata JSON")?;

    let metadata = ParseMetadata::new(
        request.timestamp,
        request.duration,
        request.players,
        request.version,
    )
    .context("Failed to build metadata record")?;

    let sealed = embed_metadata(&png, &metadata).context("Failed to embed metadata")?;

    let default_output = input.with_extension("sealed.png");
    let output = output.unwrap_or(&default_output);
    fs::write(output, &sealed).context("Failed to write output file")?;

    println!(
        "Embedded {} player records, hash {}",
        metadata.players.len(),
        metadata.hash
    );
    println!("Wrote {} bytes to {}", sealed.len(), output.display());

    Ok(())
}

fn cmd_verify(input: &PathBuf, json: bool) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;

    match verify_image(&data) {
        Ok(verdict) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                print_verdict(&verdict);
            }
        }
        Err(e) => {
            // Structural failures are classifications of untrusted input,
            // not program errors.
            let status = match &e {
                ReportError::Png(PngError::InvalidSignature { .. }) => "not_a_png",
                ReportError::Png(PngError::TruncatedChunk { .. })
                | ReportError::Png(PngError::UnexpectedEof { .. }) => "truncated",
                ReportError::Png(PngError::ChunkTooLarge { .. })
                | ReportError::MissingSeparator
                | ReportError::MalformedPayload(_) => "malformed",
                _ => return Err(e).context("Verification failed"),
            };
            if json {
                let value = serde_json::json!({
                    "status": status,
                    "error": e.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Status: {}", status.replace('_', " ").to_uppercase());
                println!("  {}", e);
            }
        }
    }

    Ok(())
}

fn cmd_extract(input: &PathBuf) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;

    match verify_image(&data).context("Failed to scan PNG")? {
        Verdict::NotVerifiable => anyhow::bail!("no verification chunk found"),
        Verdict::Authentic { metadata, .. } | Verdict::Tampered { metadata, .. } => {
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
    }

    Ok(())
}

fn cmd_chunks(input: &PathBuf, check_crc: bool) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;

    let mut count = 0;
    for chunk in ChunkIter::new(&data).context("Failed to open PNG")? {
        let chunk = chunk.context("Failed to walk chunks")?;

        if check_crc {
            let status = if chunk.crc_valid() { "ok" } else { "BAD" };
            println!(
                "{:>10} {:>10} {} {:#010x} {}",
                chunk.offset,
                chunk.length,
                chunk.type_str(),
                chunk.crc,
                status
            );
        } else {
            println!(
                "{:>10} {:>10} {} {:#010x}",
                chunk.offset,
                chunk.length,
                chunk.type_str(),
                chunk.crc
            );
        }
        count += 1;
    }

    println!("\nTotal: {} chunks", count);

    Ok(())
}

fn print_verdict(verdict: &Verdict) {
    match verdict {
        Verdict::NotVerifiable => {
            println!("Status: NOT VERIFIABLE");
            println!("  No verification chunk present; this file was never sealed.");
        }
        Verdict::Authentic { metadata, hash } => {
            println!("Status: AUTHENTIC");
            println!("  Hash: {}", hash);
            print_metadata(metadata);
        }
        Verdict::Tampered {
            metadata,
            expected,
            actual,
        } => {
            println!("Status: TAMPERED");
            println!("  Claimed hash:    {}", expected);
            println!("  Calculated hash: {}", actual);
            print_metadata(metadata);
        }
    }
}

fn print_metadata(metadata: &ParseMetadata) {
    println!("  Exported: {} (v{})", metadata.timestamp, metadata.version);
    println!("  Duration: {}s", metadata.duration);
    for player in &metadata.players {
        // Number's Display ignores width specifiers, so pad via strings.
        let dps = player.dps.to_string();
        let damage = player.damage.to_string();
        println!(
            "    {:<24} {:>12} dps {:>14} damage  {}",
            player.name, dps, damage, player.profession
        );
    }
}
