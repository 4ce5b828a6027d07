//! Sales CLI - command line tool for inspecting sales data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sales-cli",
    version,
    about = "Sales Data Visualizer toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sales_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sales_cmd::run(cli.command)
}
