//! Full query implementation for UK earthquake data.

use std::time::Duration;

use anyhow::Context;
use log::info;
use ukq_fdsn::catalog::Catalog;
use ukq_fdsn::query::EventQuery;
use ukq_utils::dates;

use crate::{report, snapshot};

/// Run a full query of the USGS FDSN event service.
///
/// Fetches one catalog, writes the raw GeoJSON snapshot, and prints the
/// summary report to stdout. Any failure propagates and aborts the run;
/// there is no retry and no partial output.
pub async fn run_query(
    snapshot_path: &str,
    start_date: Option<String>,
    end_date: Option<String>,
    min_magnitude: Option<f64>,
    order_by: Option<String>,
) -> anyhow::Result<()> {
    let mut query = EventQuery::default();
    if let Some(s) = start_date {
        query.start_date = dates::parse_date(&s)?;
    }
    if let Some(s) = end_date {
        query.end_date = dates::parse_date(&s)?;
    }
    if let Some(magnitude) = min_magnitude {
        query.min_magnitude = magnitude;
    }
    if let Some(order) = order_by {
        query.order_by = order.parse().map_err(anyhow::Error::msg)?;
    }

    // A stalled connection must not hang the run forever
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    info!(
        "Querying events from {} to {}",
        query.start_date, query.end_date
    );

    let raw = query.fetch_raw(&client).await?;
    snapshot::write_snapshot(snapshot_path, &raw)
        .with_context(|| format!("writing snapshot to {snapshot_path}"))?;
    info!("Wrote snapshot to {}", snapshot_path);

    let catalog = Catalog::try_from(&raw)?;
    report::print_report(&catalog)?;
    Ok(())
}
