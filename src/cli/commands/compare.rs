//! Compare command - run both strategies on the same weights side-by-side

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::PackingReport,
    cli::{
        commands::pack::resolve_weights,
        output::{self, format_percent},
    },
    export::CsvExporter,
    packer::{Packer, Strategy},
};

#[derive(Parser, Debug)]
#[command(about = "Compare first-fit and best-fit on the same weights")]
pub struct CompareArgs {
    /// Item weights to pack, in order
    #[arg(required_unless_present = "input")]
    pub weights: Vec<f64>,

    /// Shared capacity for every opened box
    #[arg(long, short = 'c')]
    pub capacity: f64,

    /// Read weights from a file (comma- or whitespace-separated) instead
    /// of positional arguments
    #[arg(long, conflicts_with = "weights")]
    pub input: Option<PathBuf>,

    /// Export the best-performing strategy's breakdown to CSV
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let weights = resolve_weights(&args.weights, args.input.as_deref())?;

    let strategies = [Strategy::FirstFit, Strategy::BestFit];
    let mut reports = Vec::with_capacity(strategies.len());

    for strategy in strategies {
        let mut packer = Packer::with_capacity(args.capacity, strategy)?;
        packer.pack_values(&weights)?;
        reports.push(PackingReport::from_packer(&packer));
    }

    output::print_section(&format!(
        "Strategy Comparison (capacity: {}, {} items)",
        args.capacity,
        weights.len()
    ));

    println!(
        "{:12} {:>8} {:>14} {:>14}",
        "Strategy", "Boxes", "Total weight", "Avg fill"
    );
    for report in &reports {
        println!(
            "{:12} {:>8} {:>14} {:>14}",
            report.strategy,
            report.container_count,
            report.total_weight,
            format_percent(report.average_fill_ratio)
        );
    }

    for report in &reports {
        output::print_subsection(&format!("{} breakdown", report.strategy));
        for summary in &report.containers {
            let items = summary
                .items
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "Box {}: [{}] (used: {}/{}, {})",
                summary.index,
                items,
                summary.load,
                summary.capacity,
                format_percent(summary.fill_ratio)
            );
        }
    }

    // Fewer boxes wins; equal counts favor the earlier (first-fit) report.
    let best = reports
        .iter()
        .min_by_key(|report| report.container_count)
        .expect("two reports are always present");
    println!(
        "\nFewest boxes: {} ({} boxes)",
        best.strategy, best.container_count
    );

    if let Some(path) = &args.output {
        let rows = CsvExporter::export(best, path)?;
        println!("Exported {rows} container rows to: {}", path.display());
    }

    Ok(())
}
