use serde::{Deserialize, Serialize};
use serde_json::Value;
use ukq_utils::dates;

use crate::error::FdsnError;

/// A single earthquake record from the FDSN event service.
///
/// Only the fields the toolkit aggregates over are carried. The third
/// GeoJSON coordinate (depth) is discarded at parse time.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Magnitude; negative for very small events per the service's convention.
    pub magnitude: f64,
    /// Epicenter longitude in degrees.
    pub longitude: f64,
    /// Epicenter latitude in degrees.
    pub latitude: f64,
    /// Occurrence time in milliseconds since the Unix epoch, UTC.
    pub time_millis: i64,
}

impl Event {
    /// Epicenter as a (longitude, latitude) pair.
    pub fn location(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// Calendar year of the event, UTC.
    pub fn year(&self) -> i32 {
        dates::utc_year_for_millis(self.time_millis)
    }
}

impl TryFrom<&Value> for Event {
    type Error = FdsnError;

    fn try_from(feature: &Value) -> Result<Self, Self::Error> {
        let magnitude = feature
            .pointer("/properties/mag")
            .and_then(Value::as_f64)
            .ok_or_else(|| FdsnError::Schema("properties.mag".to_string()))?;
        let coordinates = feature
            .pointer("/geometry/coordinates")
            .and_then(Value::as_array)
            .ok_or_else(|| FdsnError::Schema("geometry.coordinates".to_string()))?;
        if coordinates.len() < 2 {
            return Err(FdsnError::Schema(
                "geometry.coordinates needs at least longitude and latitude".to_string(),
            ));
        }
        let longitude = coordinates[0]
            .as_f64()
            .ok_or_else(|| FdsnError::Schema("geometry.coordinates[0]".to_string()))?;
        let latitude = coordinates[1]
            .as_f64()
            .ok_or_else(|| FdsnError::Schema("geometry.coordinates[1]".to_string()))?;
        let time_millis = feature
            .pointer("/properties/time")
            .and_then(Value::as_i64)
            .ok_or_else(|| FdsnError::Schema("properties.time".to_string()))?;
        Ok(Event {
            magnitude,
            longitude,
            latitude,
            time_millis,
        })
    }
}
