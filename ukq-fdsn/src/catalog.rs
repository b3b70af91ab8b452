use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FdsnError;
use crate::event::Event;

/// The full result set of one event query.
///
/// `count` is the service-reported `metadata.count`. The events array is
/// treated as the authoritative sequence: construction fails with a
/// schema error if the two disagree, so a catalog never carries an
/// inconsistent count.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub count: usize,
    /// Events in service order (ascending time for `orderby=time-asc`).
    pub events: Vec<Event>,
}

impl Catalog {
    /// Parse a raw response body into a catalog.
    pub fn parse(body: &str) -> Result<Catalog, FdsnError> {
        let raw: Value = serde_json::from_str(body)?;
        Catalog::try_from(&raw)
    }
}

impl TryFrom<&Value> for Catalog {
    type Error = FdsnError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        let count = raw
            .pointer("/metadata/count")
            .and_then(Value::as_u64)
            .ok_or_else(|| FdsnError::Schema("metadata.count".to_string()))?
            as usize;
        let features = raw
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| FdsnError::Schema("features".to_string()))?;
        let events = features
            .iter()
            .map(Event::try_from)
            .collect::<Result<Vec<Event>, FdsnError>>()?;
        if events.len() != count {
            return Err(FdsnError::Schema(format!(
                "metadata.count is {} but features holds {} events",
                count,
                events.len()
            )));
        }
        Ok(Catalog { count, events })
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::error::FdsnError;
    use serde_json::json;

    // Trimmed-down response from the FDSN event-query endpoint for the
    // British Isles bounding box.
    const STR_RESULT: &str = include_str!("../../fixtures/sample_quakes.geojson");

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::parse(STR_RESULT).unwrap();
        assert_eq!(catalog.count, 4);
        assert_eq!(catalog.events.len(), 4);
        assert_eq!(catalog.events[0].magnitude, 2.6);
        assert_eq!(catalog.events[0].location(), (-3.07, 53.84));
    }

    #[test]
    fn test_events_keep_service_order() {
        let catalog = Catalog::parse(STR_RESULT).unwrap();
        let times: Vec<i64> = catalog.events.iter().map(|e| e.time_millis).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        assert!(matches!(
            Catalog::parse("{\"metadata\": "),
            Err(FdsnError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_count_is_schema_error() {
        let raw = json!({ "metadata": {}, "features": [] });
        match Catalog::try_from(&raw) {
            Err(FdsnError::Schema(field)) => assert_eq!(field, "metadata.count"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_features_is_schema_error() {
        let raw = json!({ "metadata": { "count": 0 } });
        match Catalog::try_from(&raw) {
            Err(FdsnError::Schema(field)) => assert_eq!(field, "features"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_count_mismatch_is_schema_error() {
        let raw = json!({ "metadata": { "count": 7 }, "features": [] });
        match Catalog::try_from(&raw) {
            Err(FdsnError::Schema(message)) => {
                assert!(message.contains("metadata.count is 7"), "{message}");
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_parses() {
        let raw = json!({ "metadata": { "count": 0 }, "features": [] });
        let catalog = Catalog::try_from(&raw).unwrap();
        assert_eq!(catalog.count, 0);
        assert!(catalog.events.is_empty());
    }
}
