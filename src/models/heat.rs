use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::event::EventRecord;

/// Visual traffic category of a calendar day. Variants are ordered from
/// quietest to busiest.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum HeatTier {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl HeatTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatTier::None => "none",
            HeatTier::Low => "low",
            HeatTier::Medium => "medium",
            HeatTier::High => "high",
            HeatTier::Critical => "critical",
        }
    }

    /// Calendar cell color; quiet days are left uncolored.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            HeatTier::None => None,
            HeatTier::Low => Some("green"),
            HeatTier::Medium => Some("yellow"),
            HeatTier::High => Some("orange"),
            HeatTier::Critical => Some("red"),
        }
    }
}

impl fmt::Display for HeatTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for HeatTier {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "none" => Ok(HeatTier::None),
            "low" => Ok(HeatTier::Low),
            "medium" => Ok(HeatTier::Medium),
            "high" => Ok(HeatTier::High),
            "critical" => Ok(HeatTier::Critical),
            other => Err(format!("unsupported heat tier: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayHeatScore {
    pub date: NaiveDate,
    pub score: f64,
    pub tier: HeatTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub event_count: usize,
    pub has_campaign: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffingRecommendation {
    pub date: NaiveDate,
    pub base_staff: u32,
    pub additional_staff: u32,
    pub total_staff: u32,
    pub qualifying_events: usize,
}

/// An event paired with its venue distance from the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearbyEvent {
    #[serde(flatten)]
    pub event: EventRecord,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayForecast {
    pub date: NaiveDate,
    pub heat: DayHeatScore,
    pub staffing: StaffingRecommendation,
    pub events: Vec<NearbyEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarForecastSummary {
    pub total_events: usize,
    pub busy_days: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_date: Option<NaiveDate>,
    pub peak_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarForecastResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub timezone: String,
    pub days: Vec<CalendarDayForecast>,
    pub summary: CalendarForecastSummary,
}

/// Calendar request: either an explicit range or a `YYYY-MM` month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQuery {
    /// Overrides the location's own radius.
    #[serde(default)]
    pub radius_km: Option<f64>,
    /// Only events starting at or after this instant.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearbyEventsResponse {
    pub radius_km: f64,
    pub total: usize,
    pub events: Vec<NearbyEvent>,
}
