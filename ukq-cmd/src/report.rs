//! Human-readable report formatting for catalog statistics.
//!
//! Rendering functions return strings so they can be asserted on in
//! tests; only `print_report` and `run_report` touch stdout.

use ukq_fdsn::catalog::Catalog;
use ukq_fdsn::error::Result;
use ukq_stats::{summary, yearly};

/// Render the headline summary: total count plus the strongest event.
pub fn render_summary(catalog: &Catalog) -> Result<String> {
    let strongest = summary::strongest(catalog)?;
    let mut out = String::new();
    out.push_str(&format!(
        "Loaded {} earthquakes\n",
        summary::total_events(catalog)
    ));
    out.push_str(&format!(
        "The strongest earthquake was at ({}, {}) with magnitude {}\n",
        strongest.longitude, strongest.latitude, strongest.magnitude
    ));
    Ok(out)
}

/// Render the events-per-year table.
pub fn render_yearly_counts(catalog: &Catalog) -> String {
    let mut out = String::from("Events per year:\n");
    for (year, count) in yearly::counts(catalog) {
        out.push_str(&format!("  {year}  {count}\n"));
    }
    out
}

/// Render the `(year, magnitude)` listing, one pair per line, in
/// catalog order.
pub fn render_year_magnitudes(catalog: &Catalog) -> String {
    let mut out = String::from("Year and magnitude of each event:\n");
    for (year, magnitude) in yearly::year_magnitude_pairs(catalog) {
        out.push_str(&format!("  ({year}, {magnitude})\n"));
    }
    out
}

/// Print the full report to stdout.
pub fn print_report(catalog: &Catalog) -> Result<()> {
    print!("{}", render_summary(catalog)?);
    print!("{}", render_yearly_counts(catalog));
    print!("{}", render_year_magnitudes(catalog));
    Ok(())
}

/// Report from an existing snapshot file instead of a live query.
pub fn run_report(snapshot_path: &str) -> anyhow::Result<()> {
    let raw = crate::snapshot::read_snapshot(snapshot_path)?;
    let catalog = Catalog::try_from(&raw)?;
    print_report(&catalog)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render_summary, render_year_magnitudes, render_yearly_counts};
    use ukq_fdsn::catalog::Catalog;
    use ukq_fdsn::event::Event;

    fn catalog() -> Catalog {
        Catalog {
            count: 3,
            events: vec![
                Event {
                    magnitude: 4.2,
                    longitude: -3.0,
                    latitude: 53.0,
                    time_millis: 980_000_000_000, // 2001
                },
                Event {
                    magnitude: 5.9,
                    longitude: -2.15,
                    latitude: 52.52,
                    time_millis: 1_000_000_000_000, // 2001
                },
                Event {
                    magnitude: 5.9,
                    longitude: 1.35,
                    latitude: 51.29,
                    time_millis: 1_020_000_000_000, // 2002
                },
            ],
        }
    }

    #[test]
    fn test_render_summary() {
        let summary = render_summary(&catalog()).unwrap();
        assert!(summary.starts_with("Loaded 3 earthquakes\n"));
        // first of the 5.9 tie wins, so its location is reported
        assert!(summary.contains("at (-2.15, 52.52) with magnitude 5.9"));
    }

    #[test]
    fn test_render_summary_empty_catalog_fails() {
        let empty = Catalog {
            count: 0,
            events: vec![],
        };
        assert!(render_summary(&empty).is_err());
    }

    #[test]
    fn test_render_yearly_counts() {
        let table = render_yearly_counts(&catalog());
        assert!(table.contains("  2001  2\n"));
        assert!(table.contains("  2002  1\n"));
    }

    #[test]
    fn test_render_year_magnitudes_in_catalog_order() {
        let listing = render_year_magnitudes(&catalog());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines[1..],
            ["  (2001, 4.2)", "  (2001, 5.9)", "  (2002, 5.9)"]
        );
    }
}
