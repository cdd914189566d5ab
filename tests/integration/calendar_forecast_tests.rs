use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use eventradar_app_lib::load_snapshot;
use eventradar_app_lib::models::heat::HeatTier;
use eventradar_app_lib::models::settings::ScoringSettings;
use eventradar_app_lib::models::snapshot::DashboardSnapshot;
use eventradar_app_lib::services::calendar_service::CalendarForecastService;
use eventradar_app_lib::services::settings_service::SettingsService;

fn demo_snapshot() -> DashboardSnapshot {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("stockholm_snapshot.json");
    load_snapshot(&path).expect("demo snapshot should parse")
}

fn setup_service(snapshot: &DashboardSnapshot) -> CalendarForecastService {
    let settings = Arc::new(SettingsService::new(
        ScoringSettings::default(),
        snapshot.location.clone(),
    ));
    CalendarForecastService::new(settings)
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

#[test]
fn test_month_view_covers_every_day() {
    let snapshot = demo_snapshot();
    let service = setup_service(&snapshot);

    let response = service.forecast_month(&snapshot, 2025, 6).unwrap();

    assert_eq!(response.start_date, june(1));
    assert_eq!(response.end_date, june(30));
    assert_eq!(response.days.len(), 30);
    assert_eq!(response.timezone, "Europe/Stockholm");

    // The airport expo is 12 km away, outside the 5 km radius.
    assert_eq!(response.summary.total_events, 4);
    assert_eq!(response.summary.busy_days, 1);
    assert_eq!(response.summary.peak_date, Some(june(7)));
    assert!((response.summary.peak_score - 19.5).abs() < 1e-9);
}

#[test]
fn test_concert_day_is_critical_with_campaign() {
    let snapshot = demo_snapshot();
    let service = setup_service(&snapshot);

    let day = service.forecast_day(&snapshot, june(7)).unwrap();

    assert!(day.heat.has_campaign);
    assert_eq!(day.heat.tier, HeatTier::Critical);
    assert!((day.heat.score - 19.5).abs() < 1e-9);
    assert_eq!(day.staffing.additional_staff, 17);
    assert_eq!(day.staffing.total_staff, 19);
    assert_eq!(day.events.len(), 1);
    assert!((day.events[0].distance_km - 0.3).abs() < 1e-3);
}

#[test]
fn test_market_and_marathon_share_a_day() {
    let snapshot = demo_snapshot();
    let service = setup_service(&snapshot);

    let day = service.forecast_day(&snapshot, june(14)).unwrap();

    assert_eq!(day.heat.event_count, 2);
    assert!((day.heat.score - 4.6).abs() < 1e-9);
    assert_eq!(day.heat.tier, HeatTier::Low);
    assert_eq!(day.heat.color.as_deref(), Some("green"));
    // ceil(600 * 0.05 / 30) + ceil(8000 * 0.05 / 30)
    assert_eq!(day.staffing.additional_staff, 15);
    assert_eq!(day.staffing.qualifying_events, 2);

    let ids: Vec<&str> = day.events.iter().map(|entry| entry.event.id.as_str()).collect();
    assert_eq!(ids, vec!["evt-market", "evt-run"]);
}

#[test]
fn test_distant_day_scores_low_without_extra_staff() {
    let snapshot = demo_snapshot();
    let service = setup_service(&snapshot);

    let day = service.forecast_day(&snapshot, june(20)).unwrap();

    assert_eq!(day.heat.event_count, 1);
    assert!((day.heat.score - 0.8).abs() < 1e-9);
    assert_eq!(day.heat.tier, HeatTier::None);
    assert_eq!(day.staffing.qualifying_events, 0);
    assert_eq!(day.staffing.total_staff, 2);
}

#[test]
fn test_tuned_settings_change_the_forecast() {
    let snapshot = demo_snapshot();
    let settings = Arc::new(SettingsService::new(
        ScoringSettings::default(),
        snapshot.location.clone(),
    ));
    let service = CalendarForecastService::new(Arc::clone(&settings));

    let before = service.forecast_day(&snapshot, june(14)).unwrap();
    assert_eq!(before.heat.tier, HeatTier::Low);

    let mut tuned = ScoringSettings::default();
    tuned.tier_thresholds.medium = 4.0;
    tuned.tier_thresholds.low = 1.0;
    settings.replace_scoring(tuned).unwrap();

    let after = service.forecast_day(&snapshot, june(14)).unwrap();
    assert_eq!(after.heat.tier, HeatTier::Medium);
}

#[test]
fn test_forecast_serializes_for_the_dashboard() {
    let snapshot = demo_snapshot();
    let service = setup_service(&snapshot);

    let response = service.forecast_range(&snapshot, june(6), june(8)).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["startDate"], "2025-06-06");
    assert_eq!(json["days"].as_array().unwrap().len(), 3);
    assert_eq!(json["days"][1]["heat"]["tier"], "critical");
    assert_eq!(json["days"][1]["heat"]["color"], "red");
    assert_eq!(json["days"][1]["staffing"]["totalStaff"], 19);
    assert_eq!(json["days"][1]["events"][0]["id"], "evt-arena");
    assert!(json["days"][1]["events"][0]["distanceKm"].is_number());
    assert!(json["days"][0]["heat"].get("color").is_none());
}
