//! UKQ CLI - Command line tool for querying USGS earthquake data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ukq-cli",
    version,
    about = "UK earthquake data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ukq_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ukq_cmd::run(cli.command).await
}
