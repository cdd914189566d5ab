use chrono::NaiveDate;
use tracing::debug;

use crate::models::campaign::CampaignRecord;
use crate::models::event::EventRecord;
use crate::models::heat::{DayHeatScore, HeatTier};
use crate::models::location::GeoPoint;
use crate::models::settings::ScoringSettings;

/// Scores how much event-driven foot traffic a business can expect on a
/// calendar day.
///
/// Each event contributes `attendance * multiplier / divisor`, where the
/// multiplier comes from the first distance bracket containing the venue. Any
/// campaign on the day scales the total by the campaign boost. The score is
/// then bucketed into a [`HeatTier`].
#[derive(Debug, Clone, Default)]
pub struct HeatScoreService {
    settings: ScoringSettings,
}

impl HeatScoreService {
    pub fn new(settings: ScoringSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    pub fn distance_multiplier(&self, distance_km: f64) -> f64 {
        self.settings
            .distance_brackets
            .iter()
            .find(|bracket| distance_km <= bracket.max_distance_km)
            .map(|bracket| bracket.multiplier)
            .unwrap_or(self.settings.fallback_multiplier)
    }

    pub fn tier_for_score(&self, score: f64) -> HeatTier {
        let thresholds = &self.settings.tier_thresholds;
        if score >= thresholds.critical {
            HeatTier::Critical
        } else if score >= thresholds.high {
            HeatTier::High
        } else if score >= thresholds.medium {
            HeatTier::Medium
        } else if score >= thresholds.low {
            HeatTier::Low
        } else {
            HeatTier::None
        }
    }

    /// Unboosted sum of per-event contributions.
    pub fn event_score<'e, E>(&self, location: GeoPoint, events: E) -> (f64, usize)
    where
        E: IntoIterator<Item = &'e EventRecord>,
    {
        events.into_iter().fold((0.0, 0), |(score, count), event| {
            let multiplier = self.distance_multiplier(location.distance_km(&event.venue()));
            (
                score + event.attendance() * multiplier / self.settings.attendance_divisor,
                count + 1,
            )
        })
    }

    pub fn score_day<'e, 'c, E, C>(
        &self,
        date: NaiveDate,
        location: GeoPoint,
        events: E,
        campaigns: C,
    ) -> DayHeatScore
    where
        E: IntoIterator<Item = &'e EventRecord>,
        C: IntoIterator<Item = &'c CampaignRecord>,
    {
        let (mut score, event_count) = self.event_score(location, events);
        let has_campaign = campaigns.into_iter().next().is_some();
        if has_campaign {
            score *= self.settings.campaign_boost;
        }

        let tier = self.tier_for_score(score);

        debug!(
            target: "app::heat",
            %date,
            score,
            tier = %tier,
            event_count,
            has_campaign,
            "day heat scored"
        );

        DayHeatScore {
            date,
            score,
            tier,
            color: tier.color().map(str::to_string),
            event_count,
            has_campaign,
        }
    }
}
