//! Raw snapshot persistence for fetched catalogs.
//!
//! The snapshot keeps the service response in its original GeoJSON
//! structure so it can be inspected later or re-reported offline.
//! Nothing in the query pipeline reads it back; the `report` subcommand
//! and the chart apps do.

use std::fs;

use serde_json::Value;
use ukq_fdsn::error::Result;

/// Write the raw response to `path`, replacing any existing file.
pub fn write_snapshot(path: &str, raw: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(raw)?;
    fs::write(path, text)?;
    Ok(())
}

/// Read a previously written snapshot back into its JSON structure.
pub fn read_snapshot(path: &str) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::{read_snapshot, write_snapshot};
    use serde_json::json;

    #[test]
    fn test_snapshot_round_trip() {
        let raw = json!({
            "metadata": { "count": 1 },
            "features": [{
                "properties": { "mag": 2.6, "time": 959_947_810_640i64 },
                "geometry": { "coordinates": [-3.07, 53.84, 10.0] }
            }]
        });
        let path = std::env::temp_dir().join("ukq-snapshot-round-trip.json");
        let path = path.to_str().unwrap();

        write_snapshot(path, &raw).unwrap();
        let reread = read_snapshot(path).unwrap();
        assert_eq!(reread, raw);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_snapshot_overwrites_existing_file() {
        let path = std::env::temp_dir().join("ukq-snapshot-overwrite.json");
        let path = path.to_str().unwrap();

        write_snapshot(path, &json!({ "metadata": { "count": 9 } })).unwrap();
        let replacement = json!({ "metadata": { "count": 0 }, "features": [] });
        write_snapshot(path, &replacement).unwrap();
        assert_eq!(read_snapshot(path).unwrap(), replacement);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_missing_snapshot_is_io_error() {
        let missing = std::env::temp_dir().join("ukq-snapshot-does-not-exist.json");
        assert!(matches!(
            read_snapshot(missing.to_str().unwrap()),
            Err(ukq_fdsn::error::FdsnError::Io(_))
        ));
    }
}
