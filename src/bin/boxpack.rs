//! boxpack CLI - Greedy shipment box packing
//!
//! This CLI provides a unified interface for:
//! - Packing a weight list with first-fit or best-fit
//! - Comparing the two strategies side-by-side
//! - Exporting results as JSON summaries or CSV breakdowns

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boxpack")]
#[command(version, about = "Greedy shipment box packer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a weight list into fixed-capacity boxes
    Pack(boxpack::cli::commands::pack::PackArgs),

    /// Compare first-fit and best-fit on the same weights
    Compare(boxpack::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack(args) => boxpack::cli::commands::pack::execute(args),
        Commands::Compare(args) => boxpack::cli::commands::compare::execute(args),
    }
}
