use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The tenant's storefront and the radius within which events matter to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessLocation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl BusinessLocation {
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            latitude,
            longitude,
            radius_km,
            timezone: default_timezone(),
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl Default for BusinessLocation {
    fn default() -> Self {
        Self::new(0.0, 0.0, 5.0)
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Partial update submitted from the location settings form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdateInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
}
