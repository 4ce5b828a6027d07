//! Command implementations for the sales CLI.
//!
//! Provides subcommands for inspecting a sales CSV outside the browser:
//! printing the chart specification a selection would render, and a
//! per-region breakdown.

use clap::Subcommand;

pub mod chart;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print the line chart specification for a region as JSON
    Chart {
        /// Path to the sales CSV (date,sales,region)
        #[arg(short = 'c', long)]
        csv: String,

        /// Region to plot: north, east, south, west or all
        #[arg(short = 'r', long, default_value = "all")]
        region: sales_data::Region,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print row count, total sales and date span for every region
    Summary {
        /// Path to the sales CSV (date,sales,region)
        #[arg(short = 'c', long)]
        csv: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Chart {
            csv,
            region,
            pretty,
        } => chart::run_chart(&csv, region, pretty, &mut stdout),
        Command::Summary { csv } => summary::run_summary(&csv, &mut stdout),
    }
}
