use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::campaign::CampaignRecord;
use crate::models::event::EventRecord;
use crate::models::heat::{
    CalendarDayForecast, CalendarForecastResponse, CalendarForecastSummary, HeatTier, NearbyEvent,
};
use crate::models::snapshot::DashboardSnapshot;
use crate::services::heat_score_service::HeatScoreService;
use crate::services::proximity::nearby_with_distance;
use crate::services::settings_service::SettingsService;
use crate::services::staffing_service::StaffingService;
use crate::utils::time::{dates_between, inclusive_days, local_date, month_range, parse_timezone};

/// Builds per-day heat and staffing forecasts for the dashboard calendar.
pub struct CalendarForecastService {
    settings: Arc<SettingsService>,
}

impl CalendarForecastService {
    pub fn new(settings: Arc<SettingsService>) -> Self {
        Self { settings }
    }

    /// Forecast every day of `[start_date, end_date]` in the business's
    /// local time zone. The business location comes from the settings form;
    /// the snapshot supplies events and campaigns.
    pub fn forecast_range(
        &self,
        snapshot: &DashboardSnapshot,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<CalendarForecastResponse> {
        let scoring = self.settings.scoring();
        let span = inclusive_days(start_date, end_date)?;
        if span > scoring.max_range_days {
            return Err(AppError::validation_with_details(
                "date range exceeds the maximum forecast window",
                json!({ "days": span, "maxRangeDays": scoring.max_range_days }),
            ));
        }

        let location = self.settings.location();
        let tz = parse_timezone(&location.timezone)?;
        let center = location.point();

        let nearby = nearby_with_distance(center, location.radius_km, &snapshot.events);

        let mut events_by_day: BTreeMap<NaiveDate, Vec<&NearbyEvent>> = BTreeMap::new();
        for entry in &nearby {
            let date = local_date(entry.event.start_time, tz);
            if date >= start_date && date <= end_date {
                events_by_day.entry(date).or_default().push(entry);
            }
        }

        // Staffing has its own radius, independent of the business radius.
        let mut staffing_events_by_day: BTreeMap<NaiveDate, Vec<&EventRecord>> = BTreeMap::new();
        for event in &snapshot.events {
            let date = local_date(event.start_time, tz);
            if date >= start_date && date <= end_date {
                staffing_events_by_day.entry(date).or_default().push(event);
            }
        }

        let mut campaigns_by_day: BTreeMap<NaiveDate, Vec<&CampaignRecord>> = BTreeMap::new();
        for campaign in &snapshot.campaigns {
            let date = local_date(campaign.recommended_start, tz);
            if date >= start_date && date <= end_date {
                campaigns_by_day.entry(date).or_default().push(campaign);
            }
        }

        let heat = HeatScoreService::new(scoring.clone());
        let staffing = StaffingService::new(scoring.staffing);

        let days: Vec<CalendarDayForecast> = dates_between(start_date, end_date)
            .map(|date| {
                let day_events: &[&NearbyEvent] =
                    events_by_day.get(&date).map(Vec::as_slice).unwrap_or(&[]);
                let day_campaigns: &[&CampaignRecord] =
                    campaigns_by_day.get(&date).map(Vec::as_slice).unwrap_or(&[]);
                let day_staffing_events: &[&EventRecord] =
                    staffing_events_by_day.get(&date).map(Vec::as_slice).unwrap_or(&[]);

                CalendarDayForecast {
                    date,
                    heat: heat.score_day(
                        date,
                        center,
                        day_events.iter().map(|entry| &entry.event),
                        day_campaigns.iter().copied(),
                    ),
                    staffing: staffing.recommend(
                        date,
                        center,
                        day_staffing_events.iter().copied(),
                    ),
                    events: day_events.iter().map(|entry| (*entry).clone()).collect(),
                }
            })
            .collect();

        let summary = summarize(&days);

        info!(
            target: "app::calendar",
            %start_date,
            %end_date,
            timezone = tz.name(),
            nearby_events = nearby.len(),
            busy_days = summary.busy_days,
            "calendar forecast generated"
        );

        Ok(CalendarForecastResponse {
            start_date,
            end_date,
            timezone: tz.name().to_string(),
            days,
            summary,
        })
    }

    pub fn forecast_month(
        &self,
        snapshot: &DashboardSnapshot,
        year: i32,
        month: u32,
    ) -> AppResult<CalendarForecastResponse> {
        let (first, last) = month_range(year, month)?;
        self.forecast_range(snapshot, first, last)
    }

    pub fn forecast_day(
        &self,
        snapshot: &DashboardSnapshot,
        date: NaiveDate,
    ) -> AppResult<CalendarDayForecast> {
        self.forecast_range(snapshot, date, date)?
            .days
            .into_iter()
            .next()
            .ok_or_else(|| AppError::other("single-day forecast produced no day"))
    }

    /// Events within `radius_km` of the business, optionally only those
    /// starting at or after `from`, in input order and truncated to `limit`.
    pub fn nearby_events(
        &self,
        snapshot: &DashboardSnapshot,
        radius_km: f64,
        from: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Vec<NearbyEvent> {
        let selected: Vec<NearbyEvent> =
            nearby_with_distance(self.settings.location().point(), radius_km, &snapshot.events)
                .into_iter()
                .filter(|entry| from.map_or(true, |from| entry.event.start_time >= from))
                .take(limit)
                .collect();

        debug!(
            target: "app::calendar",
            radius_km,
            limit,
            returned = selected.len(),
            "nearby events selected"
        );

        selected
    }
}

fn summarize(days: &[CalendarDayForecast]) -> CalendarForecastSummary {
    let mut summary = CalendarForecastSummary::default();

    for day in days {
        summary.total_events += day.heat.event_count;
        if day.heat.tier >= HeatTier::Medium {
            summary.busy_days += 1;
        }
        if day.heat.score > summary.peak_score {
            summary.peak_score = day.heat.score;
            summary.peak_date = Some(day.date);
        }
    }

    summary
}
