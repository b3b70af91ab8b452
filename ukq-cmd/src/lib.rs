//! Command implementations for the UKQ CLI.
//!
//! Provides subcommands for querying the USGS FDSN event service and
//! for re-reporting from a previously written snapshot.

use clap::Subcommand;

pub mod query;
pub mod report;
pub mod snapshot;

#[derive(Subcommand)]
pub enum Command {
    /// Query the FDSN event service, snapshot the response, and report
    Query {
        /// Output path for the raw GeoJSON snapshot
        #[arg(short = 's', long, default_value = "earthquake.json")]
        snapshot: String,

        /// Query start date, YYYY-MM-DD
        #[arg(long)]
        start_date: Option<String>,

        /// Query end date, YYYY-MM-DD
        #[arg(long)]
        end_date: Option<String>,

        /// Minimum magnitude to include
        #[arg(long)]
        min_magnitude: Option<f64>,

        /// Sort order: time, time-asc, magnitude, magnitude-asc
        #[arg(long)]
        order_by: Option<String>,
    },

    /// Report summary statistics from an existing snapshot
    Report {
        /// Path to a previously written GeoJSON snapshot
        #[arg(short = 's', long, default_value = "earthquake.json")]
        snapshot: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            snapshot,
            start_date,
            end_date,
            min_magnitude,
            order_by,
        } => query::run_query(&snapshot, start_date, end_date, min_magnitude, order_by).await,
        Command::Report { snapshot } => report::run_report(&snapshot),
    }
}
