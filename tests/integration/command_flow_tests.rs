use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use eventradar_app_lib::commands::calendar::{
    calendar_forecast_fetch, day_heat_fetch, nearby_events_fetch, staffing_fetch,
};
use eventradar_app_lib::commands::settings::{
    settings_location_get, settings_location_update, settings_scoring_get,
    settings_scoring_update,
};
use eventradar_app_lib::commands::AppState;
use eventradar_app_lib::load_snapshot;
use eventradar_app_lib::models::heat::{CalendarQuery, HeatTier, NearbyQuery};
use eventradar_app_lib::models::location::LocationUpdateInput;
use eventradar_app_lib::models::settings::ScoringSettings;
use eventradar_app_lib::models::snapshot::DashboardSnapshot;
use serde_json::json;

fn setup() -> (AppState, DashboardSnapshot) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("stockholm_snapshot.json");
    let snapshot = load_snapshot(&path).expect("demo snapshot");
    let state = AppState::new(ScoringSettings::default(), snapshot.location.clone());
    (state, snapshot)
}

#[test]
fn test_calendar_by_month_and_by_range_agree() {
    let (state, snapshot) = setup();

    let by_month = calendar_forecast_fetch(
        &state,
        &snapshot,
        CalendarQuery {
            month: Some("2025-06".to_string()),
            ..CalendarQuery::default()
        },
    )
    .unwrap();

    let query: CalendarQuery =
        serde_json::from_value(json!({ "startDate": "2025-06-01", "endDate": "2025-06-30" }))
            .unwrap();
    let by_range = calendar_forecast_fetch(&state, &snapshot, query).unwrap();

    assert_eq!(by_month, by_range);
}

#[test]
fn test_calendar_rejects_ambiguous_query() {
    let (state, snapshot) = setup();

    let err = calendar_forecast_fetch(
        &state,
        &snapshot,
        CalendarQuery {
            start_date: Some("2025-06-01".to_string()),
            month: Some("2025-06".to_string()),
            ..CalendarQuery::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");

    let err = calendar_forecast_fetch(&state, &snapshot, CalendarQuery::default()).unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn test_calendar_bad_dates_report_details() {
    let (state, snapshot) = setup();

    let err = calendar_forecast_fetch(
        &state,
        &snapshot,
        CalendarQuery {
            start_date: Some("06/01/2025".to_string()),
            end_date: Some("2025-06-30".to_string()),
            month: None,
        },
    )
    .unwrap_err();

    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(err.details.as_ref().unwrap()["value"], "06/01/2025");
}

#[test]
fn test_day_heat_and_staffing_commands() {
    let (state, snapshot) = setup();

    let heat = day_heat_fetch(&state, &snapshot, "2025-06-07").unwrap();
    assert_eq!(heat.tier, HeatTier::Critical);

    let staffing = staffing_fetch(&state, &snapshot, "2025-06-14").unwrap();
    assert_eq!(staffing.total_staff, 17);

    let err = staffing_fetch(&state, &snapshot, "not-a-date").unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn test_nearby_events_default_and_override_radius() {
    let (state, snapshot) = setup();

    let default_radius = nearby_events_fetch(&state, &snapshot, None).unwrap();
    assert_eq!(default_radius.radius_km, 5.0);
    assert_eq!(default_radius.total, 4);

    let wide = nearby_events_fetch(
        &state,
        &snapshot,
        Some(NearbyQuery {
            radius_km: Some(20.0),
            ..NearbyQuery::default()
        }),
    )
    .unwrap();
    assert_eq!(wide.total, 5);

    let tight = nearby_events_fetch(
        &state,
        &snapshot,
        Some(NearbyQuery {
            radius_km: Some(0.5),
            ..NearbyQuery::default()
        }),
    )
    .unwrap();
    assert_eq!(tight.total, 1);
    assert_eq!(tight.events[0].event.id, "evt-arena");

    let err = nearby_events_fetch(
        &state,
        &snapshot,
        Some(NearbyQuery {
            radius_km: Some(-1.0),
            ..NearbyQuery::default()
        }),
    )
    .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn test_nearby_events_upcoming_with_limit() {
    let (state, snapshot) = setup();

    let upcoming = nearby_events_fetch(
        &state,
        &snapshot,
        Some(NearbyQuery {
            radius_km: None,
            from: Some(Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap()),
            limit: Some(1),
        }),
    )
    .unwrap();

    assert_eq!(upcoming.total, 1);
    assert_eq!(upcoming.events[0].event.id, "evt-market");
}

#[test]
fn test_location_settings_round_trip() {
    let (state, _snapshot) = setup();

    let location = settings_location_get(&state).unwrap();
    assert_eq!(location.timezone, "Europe/Stockholm");

    let input: LocationUpdateInput =
        serde_json::from_value(json!({ "radiusKm": 3.0, "name": "Kafé Söder II" })).unwrap();
    let updated = settings_location_update(&state, input).unwrap();
    assert_eq!(updated.radius_km, 3.0);
    assert_eq!(updated.name, "Kafé Söder II");
    assert_eq!(settings_location_get(&state).unwrap(), updated);

    let err = settings_location_update(
        &state,
        LocationUpdateInput {
            latitude: Some(91.0),
            ..LocationUpdateInput::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(settings_location_get(&state).unwrap(), updated);
}

#[test]
fn test_location_update_moves_every_proximity_result() {
    let (state, snapshot) = setup();

    let before = nearby_events_fetch(&state, &snapshot, None).unwrap();
    assert_eq!(before.total, 4);

    let shrink: LocationUpdateInput = serde_json::from_value(json!({ "radiusKm": 0.5 })).unwrap();
    settings_location_update(&state, shrink).unwrap();

    let shrunk = nearby_events_fetch(&state, &snapshot, None).unwrap();
    assert_eq!(shrunk.radius_km, 0.5);
    assert_eq!(shrunk.total, 1);
    assert_eq!(shrunk.events[0].event.id, "evt-arena");

    let moved: LocationUpdateInput =
        serde_json::from_value(json!({ "latitude": -45.0, "longitude": 100.0 })).unwrap();
    settings_location_update(&state, moved).unwrap();

    assert_eq!(nearby_events_fetch(&state, &snapshot, None).unwrap().total, 0);
    let heat = day_heat_fetch(&state, &snapshot, "2025-06-07").unwrap();
    assert_eq!(heat.score, 0.0);
    assert_eq!(heat.tier, HeatTier::None);
    assert!(heat.has_campaign);
    let staffing = staffing_fetch(&state, &snapshot, "2025-06-07").unwrap();
    assert_eq!(staffing.total_staff, 2);
}

#[test]
fn test_scoring_settings_update_affects_calendar() {
    let (state, snapshot) = setup();

    let mut tuned = settings_scoring_get(&state).unwrap();
    tuned.campaign_boost = 1.0;
    settings_scoring_update(&state, tuned).unwrap();

    let heat = day_heat_fetch(&state, &snapshot, "2025-06-07").unwrap();
    assert!((heat.score - 15.0).abs() < 1e-9);

    let mut invalid = ScoringSettings::default();
    invalid.distance_brackets.clear();
    let err = settings_scoring_update(&state, invalid).unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(settings_scoring_get(&state).unwrap().campaign_boost, 1.0);
}

#[test]
fn test_command_error_serializes_camel_case() {
    let (state, snapshot) = setup();

    let err = day_heat_fetch(&state, &snapshot, "2025-13-01").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].is_string());
    assert!(json["details"].is_object());
}
