use chrono::NaiveDate;
use ukq_utils::dates;

#[cfg(feature = "api")]
use crate::error::FdsnError;
#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::Client;
#[cfg(feature = "api")]
use serde_json::Value;

/// USGS FDSN event-query endpoint, GeoJSON variant.
pub const EVENT_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query.geojson";

/// Bounding box of the standing British Isles survey, degrees.
pub const UK_MIN_LATITUDE: f64 = 50.008;
pub const UK_MAX_LATITUDE: f64 = 58.723;
pub const UK_MIN_LONGITUDE: f64 = -9.756;
pub const UK_MAX_LONGITUDE: f64 = 1.67;

/// Sort orders recognized by the FDSN event service.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrderBy {
    /// Newest first (service default)
    Time,
    /// Oldest first
    TimeAsc,
    /// Largest magnitude first
    Magnitude,
    /// Smallest magnitude first
    MagnitudeAsc,
}

impl OrderBy {
    /// The `orderby` token the service expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Time => "time",
            OrderBy::TimeAsc => "time-asc",
            OrderBy::Magnitude => "magnitude",
            OrderBy::MagnitudeAsc => "magnitude-asc",
        }
    }
}

impl std::str::FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(OrderBy::Time),
            "time-asc" => Ok(OrderBy::TimeAsc),
            "magnitude" => Ok(OrderBy::Magnitude),
            "magnitude-asc" => Ok(OrderBy::MagnitudeAsc),
            other => Err(format!("unrecognized orderby value: {other}")),
        }
    }
}

/// Parameters for one FDSN event query.
///
/// The defaults reproduce the standing UK survey: magnitude 1+ events
/// inside the British Isles bounding box, 2000-01-01 through 2018-10-11,
/// oldest first.
#[derive(Debug, PartialEq, Clone)]
pub struct EventQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_magnitude: f64,
    pub order_by: OrderBy,
}

impl Default for EventQuery {
    fn default() -> Self {
        EventQuery {
            start_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2018, 10, 11).unwrap(),
            min_latitude: UK_MIN_LATITUDE,
            max_latitude: UK_MAX_LATITUDE,
            min_longitude: UK_MIN_LONGITUDE,
            max_longitude: UK_MAX_LONGITUDE,
            min_magnitude: 1.0,
            order_by: OrderBy::TimeAsc,
        }
    }
}

impl EventQuery {
    /// Render the query as FDSN request parameters.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("starttime", dates::format_date(&self.start_date)),
            ("endtime", dates::format_date(&self.end_date)),
            ("minlatitude", self.min_latitude.to_string()),
            ("maxlatitude", self.max_latitude.to_string()),
            ("minlongitude", self.min_longitude.to_string()),
            ("maxlongitude", self.max_longitude.to_string()),
            ("minmagnitude", self.min_magnitude.to_string()),
            ("orderby", self.order_by.as_str().to_string()),
        ]
    }

    /// Issue the query against the FDSN service and parse the body as JSON.
    ///
    /// One attempt, no retry. The caller owns the client and whatever
    /// timeout is configured on it. A non-success status or transport
    /// failure is a network error; a body that is not well-formed JSON
    /// is a parse error.
    #[cfg(feature = "api")]
    pub async fn fetch_raw(&self, client: &Client) -> Result<Value, FdsnError> {
        info!(
            "Fetching events {} to {}, magnitude {}+",
            self.start_date, self.end_date, self.min_magnitude
        );
        let response = client
            .get(EVENT_QUERY_URL)
            .query(&self.params())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
