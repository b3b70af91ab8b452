//! Earthquakes-per-year bar chart.
//!
//! Renders the events-per-year breakdown from a previously written
//! GeoJSON snapshot as an SVG bar chart. This consumes the snapshot
//! produced by `ukq-cli query` and never talks to the network itself.

use clap::Parser;
use log::info;
use plotters::prelude::*;
use ukq_fdsn::catalog::Catalog;
use ukq_stats::yearly;

#[derive(Parser)]
#[command(
    name = "chart-quake-years",
    version,
    about = "Events-per-year bar chart from a UKQ snapshot"
)]
struct Cli {
    /// Path to a GeoJSON snapshot written by `ukq-cli query`
    #[arg(short = 's', long, default_value = "earthquake.json")]
    snapshot: String,

    /// Output SVG path
    #[arg(short = 'o', long, default_value = "quakes-per-year.svg")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.snapshot)?;
    let raw: serde_json::Value = serde_json::from_str(&text)?;
    let catalog = Catalog::try_from(&raw)?;
    let counts = yearly::counts(&catalog);

    let Some((&first_year, _)) = counts.first_key_value() else {
        anyhow::bail!("snapshot holds no events to chart");
    };
    let last_year = counts.last_key_value().map(|(y, _)| *y).unwrap_or(first_year);
    let max_count = counts.values().copied().max().unwrap_or(1) as u32;

    let root = SVGBackend::new(&cli.output, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Earthquakes per year", ("sans-serif", 28.0))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(
            (first_year..last_year + 1).into_segmented(),
            0u32..max_count + 1,
        )?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Year")
        .y_desc("Events")
        .draw()?;
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.6).filled())
            .data(counts.iter().map(|(year, count)| (*year, *count as u32))),
    )?;
    root.present()?;

    info!(
        "Wrote {} covering {} to {}",
        cli.output, first_year, last_year
    );
    Ok(())
}
