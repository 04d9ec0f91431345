//! Pack command - run a single packing job and report the result

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    analysis::PackingReport,
    cli::{config::PackConfig, output},
    error::Error,
    export::CsvExporter,
    packer::{Packer, Strategy},
};

/// On-disk shape of the `--summary` JSON file.
#[derive(Debug, Serialize)]
struct PackingSummaryFile<'a> {
    config: PackConfig,
    report: &'a PackingReport,
}

#[derive(Parser, Debug)]
#[command(about = "Pack a weight list into fixed-capacity boxes")]
pub struct PackArgs {
    /// Item weights to pack, in order
    #[arg(required_unless_present = "input")]
    pub weights: Vec<f64>,

    /// Shared capacity for every opened box
    #[arg(long, short = 'c')]
    pub capacity: f64,

    /// Placement strategy (first-fit or best-fit)
    #[arg(long, short = 's', default_value_t = Strategy::FirstFit)]
    pub strategy: Strategy,

    /// Read weights from a file (comma- or whitespace-separated) instead
    /// of positional arguments
    #[arg(long, conflicts_with = "weights")]
    pub input: Option<PathBuf>,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Export the per-container breakdown to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Parse a comma- or whitespace-separated weight list.
pub(crate) fn parse_weight_list(raw: &str) -> Result<Vec<f64>> {
    let tokens: Vec<&str> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(Error::ParseWeights {
            input: raw.trim().to_string(),
            reason: "no weights found".to_string(),
        }
        .into());
    }

    tokens
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                Error::ParseWeights {
                    input: raw.trim().to_string(),
                    reason: format!("'{token}' is not a number"),
                }
                .into()
            })
        })
        .collect()
}

/// Resolve the weight list from positional arguments or an input file.
pub(crate) fn resolve_weights(weights: &[f64], input: Option<&Path>) -> Result<Vec<f64>> {
    match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow!("failed to read weights from {}: {e}", path.display()))?;
            parse_weight_list(&raw)
        }
        None => Ok(weights.to_vec()),
    }
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("packing_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

pub fn execute(args: PackArgs) -> Result<()> {
    let weights = resolve_weights(&args.weights, args.input.as_deref())?;

    let mut packer = Packer::with_capacity(args.capacity, args.strategy)?;
    packer.pack_values(&weights)?;

    let report = PackingReport::from_packer(&packer);
    output::print_report(&report);

    if let Some(raw_path) = &args.summary {
        let path = sanitize_summary_path(raw_path);
        let file = File::create(&path)
            .map_err(|e| anyhow!("failed to create summary file {}: {e}", path.display()))?;
        let summary = PackingSummaryFile {
            config: PackConfig {
                capacity: args.capacity,
                strategy: args.strategy,
            },
            report: &report,
        };
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to: {}", path.display());
    }

    if let Some(path) = &args.csv {
        let rows = CsvExporter::export(&report, path)?;
        println!("\nExported {rows} container rows to: {}", path.display());
    }

    Ok(())
}
