//! Aggregate statistics over earthquake catalogs.
//!
//! This crate turns a fetched catalog into the summary figures consumed
//! by the CLI report and the chart applications. All functions are pure
//! reads over the catalog; nothing here touches the network or disk.

/// Catalog-level summary statistics.
pub mod summary {
    use serde::{Deserialize, Serialize};
    use ukq_fdsn::catalog::Catalog;
    use ukq_fdsn::error::FdsnError;

    /// The strongest event in a catalog: its magnitude and epicenter.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Strongest {
        pub magnitude: f64,
        pub longitude: f64,
        pub latitude: f64,
    }

    /// Total number of events in the catalog.
    ///
    /// Returns the service-reported count, which `Catalog` construction
    /// has already validated against the event sequence length.
    pub fn total_events(catalog: &Catalog) -> usize {
        catalog.count
    }

    /// Magnitude and location of the strongest event.
    ///
    /// Single scan with a strict `>` comparison: on an exact magnitude
    /// tie the earliest event in catalog order is retained, and later
    /// equal events do not replace it.
    pub fn strongest(catalog: &Catalog) -> Result<Strongest, FdsnError> {
        let first = catalog.events.first().ok_or(FdsnError::EmptyCatalog)?;
        let mut best = Strongest {
            magnitude: first.magnitude,
            longitude: first.longitude,
            latitude: first.latitude,
        };
        for event in &catalog.events[1..] {
            if event.magnitude > best.magnitude {
                best = Strongest {
                    magnitude: event.magnitude,
                    longitude: event.longitude,
                    latitude: event.latitude,
                };
            }
        }
        Ok(best)
    }
}

/// Per-year groupings of counts and magnitudes.
pub mod yearly {
    use std::collections::BTreeMap;
    use ukq_fdsn::catalog::Catalog;

    /// Number of events per calendar year, UTC.
    ///
    /// Only years that actually occur in the catalog appear as keys;
    /// quiet years are not zero-filled.
    pub fn counts(catalog: &Catalog) -> BTreeMap<i32, usize> {
        let mut result: BTreeMap<i32, usize> = BTreeMap::new();
        for event in &catalog.events {
            *result.entry(event.year()).or_insert(0) += 1;
        }
        result
    }

    /// Magnitudes observed per calendar year, in catalog order within
    /// each year.
    pub fn magnitudes(catalog: &Catalog) -> BTreeMap<i32, Vec<f64>> {
        let mut result: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for event in &catalog.events {
            result.entry(event.year()).or_default().push(event.magnitude);
        }
        result
    }

    /// `(year, magnitude)` for every event, in catalog order. The
    /// magnitude is always taken from the same event whose year was
    /// computed.
    pub fn year_magnitude_pairs(catalog: &Catalog) -> Vec<(i32, f64)> {
        catalog
            .events
            .iter()
            .map(|event| (event.year(), event.magnitude))
            .collect()
    }
}
