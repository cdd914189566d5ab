use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::location::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    pub venue_latitude: f64,
    pub venue_longitude: f64,
    #[serde(default)]
    pub expected_attendance: u32,
}

impl EventRecord {
    pub fn venue(&self) -> GeoPoint {
        GeoPoint::new(self.venue_latitude, self.venue_longitude)
    }

    pub fn attendance(&self) -> f64 {
        f64::from(self.expected_attendance)
    }
}
