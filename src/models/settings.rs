use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};

/// Tuning constants for heat scoring and staffing. Defaults reproduce the
/// dashboard's historical behaviour exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringSettings {
    /// Evaluated nearest first; the first bracket containing the distance wins.
    pub distance_brackets: Vec<DistanceBracket>,
    pub fallback_multiplier: f64,
    pub attendance_divisor: f64,
    pub campaign_boost: f64,
    pub tier_thresholds: TierThresholds,
    pub staffing: StaffingPolicy,
    pub max_range_days: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            distance_brackets: vec![
                DistanceBracket::new(0.5, 0.15),
                DistanceBracket::new(1.0, 0.10),
                DistanceBracket::new(2.0, 0.05),
            ],
            fallback_multiplier: 0.02,
            attendance_divisor: 100.0,
            campaign_boost: 1.3,
            tier_thresholds: TierThresholds::default(),
            staffing: StaffingPolicy::default(),
            max_range_days: 92,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistanceBracket {
    pub max_distance_km: f64,
    pub multiplier: f64,
}

impl DistanceBracket {
    pub fn new(max_distance_km: f64, multiplier: f64) -> Self {
        Self {
            max_distance_km,
            multiplier,
        }
    }
}

/// Minimum score (inclusive) for each tier above `none`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TierThresholds {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            critical: 15.0,
            high: 10.0,
            medium: 5.0,
            low: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffingPolicy {
    pub base_staff: u32,
    pub radius_km: f64,
    pub attendance_ratio: f64,
    pub attendees_per_staff: f64,
}

impl Default for StaffingPolicy {
    fn default() -> Self {
        Self {
            base_staff: 2,
            radius_km: 2.0,
            attendance_ratio: 0.05,
            attendees_per_staff: 30.0,
        }
    }
}

impl ScoringSettings {
    pub fn validate(&self) -> AppResult<()> {
        if self.distance_brackets.is_empty() {
            return Err(AppError::validation("at least one distance bracket is required"));
        }

        let mut previous: Option<f64> = None;
        for (index, bracket) in self.distance_brackets.iter().enumerate() {
            if !bracket.max_distance_km.is_finite() || bracket.max_distance_km < 0.0 {
                return Err(AppError::validation_with_details(
                    "bracket distance must be a non-negative number",
                    json!({ "index": index, "maxDistanceKm": bracket.max_distance_km }),
                ));
            }
            if let Some(prev) = previous {
                if bracket.max_distance_km <= prev {
                    return Err(AppError::validation_with_details(
                        "distance brackets must be strictly ascending",
                        json!({ "index": index, "maxDistanceKm": bracket.max_distance_km }),
                    ));
                }
            }
            ensure_non_negative("bracket multiplier", bracket.multiplier)?;
            previous = Some(bracket.max_distance_km);
        }

        ensure_non_negative("fallback multiplier", self.fallback_multiplier)?;
        ensure_positive("attendance divisor", self.attendance_divisor)?;

        if !self.campaign_boost.is_finite() || self.campaign_boost < 1.0 {
            return Err(AppError::validation_with_details(
                "campaign boost must be at least 1",
                json!({ "campaignBoost": self.campaign_boost }),
            ));
        }

        let t = &self.tier_thresholds;
        ensure_non_negative("low threshold", t.low)?;
        if !(t.critical > t.high && t.high > t.medium && t.medium > t.low) || !t.critical.is_finite()
        {
            return Err(AppError::validation_with_details(
                "tier thresholds must be strictly descending from critical to low",
                json!({
                    "critical": t.critical,
                    "high": t.high,
                    "medium": t.medium,
                    "low": t.low,
                }),
            ));
        }

        ensure_non_negative("staffing radius", self.staffing.radius_km)?;
        ensure_non_negative("staffing attendance ratio", self.staffing.attendance_ratio)?;
        ensure_positive("attendees per staff", self.staffing.attendees_per_staff)?;

        if self.max_range_days == 0 {
            return Err(AppError::validation("max range days must be at least 1"));
        }

        Ok(())
    }
}

fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::validation_with_details(
            format!("{field} must be a non-negative number"),
            json!({ "field": field, "value": value }),
        ))
    }
}

fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::validation_with_details(
            format!("{field} must be greater than zero"),
            json!({ "field": field, "value": value }),
        ))
    }
}
