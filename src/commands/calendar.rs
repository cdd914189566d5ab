use crate::error::AppError;
use crate::models::heat::{
    CalendarDayForecast, CalendarForecastResponse, CalendarQuery, DayHeatScore,
    NearbyEventsResponse, NearbyQuery, StaffingRecommendation,
};
use crate::models::snapshot::DashboardSnapshot;
use crate::utils::time::{parse_date, parse_month};

use super::{AppState, CommandResult};

pub fn calendar_forecast_fetch(
    state: &AppState,
    snapshot: &DashboardSnapshot,
    query: CalendarQuery,
) -> CommandResult<CalendarForecastResponse> {
    let calendar = state.calendar();

    let response = match (query.month, query.start_date, query.end_date) {
        (Some(month), None, None) => {
            let (year, month) = parse_month(&month)?;
            calendar.forecast_month(snapshot, year, month)?
        }
        (None, Some(start), Some(end)) => {
            calendar.forecast_range(snapshot, parse_date(&start)?, parse_date(&end)?)?
        }
        _ => {
            return Err(AppError::validation(
                "provide either month or both startDate and endDate",
            )
            .into())
        }
    };

    Ok(response)
}

pub fn day_forecast_fetch(
    state: &AppState,
    snapshot: &DashboardSnapshot,
    date: &str,
) -> CommandResult<CalendarDayForecast> {
    let date = parse_date(date)?;
    Ok(state.calendar().forecast_day(snapshot, date)?)
}

pub fn day_heat_fetch(
    state: &AppState,
    snapshot: &DashboardSnapshot,
    date: &str,
) -> CommandResult<DayHeatScore> {
    day_forecast_fetch(state, snapshot, date).map(|day| day.heat)
}

pub fn staffing_fetch(
    state: &AppState,
    snapshot: &DashboardSnapshot,
    date: &str,
) -> CommandResult<StaffingRecommendation> {
    day_forecast_fetch(state, snapshot, date).map(|day| day.staffing)
}

pub fn nearby_events_fetch(
    state: &AppState,
    snapshot: &DashboardSnapshot,
    query: Option<NearbyQuery>,
) -> CommandResult<NearbyEventsResponse> {
    let query = query.unwrap_or_default();
    let radius_km = match query.radius_km {
        Some(radius) if !radius.is_finite() || radius < 0.0 => {
            return Err(AppError::validation_with_details(
                "radius must be a non-negative number",
                serde_json::json!({ "radiusKm": radius }),
            )
            .into())
        }
        Some(radius) => radius,
        None => state.settings().location().radius_km,
    };

    let events = state.calendar().nearby_events(
        snapshot,
        radius_km,
        query.from,
        query.limit.unwrap_or(usize::MAX),
    );

    Ok(NearbyEventsResponse {
        radius_km,
        total: events.len(),
        events,
    })
}
