use tracing::debug;

use crate::models::event::EventRecord;
use crate::models::heat::NearbyEvent;
use crate::models::location::GeoPoint;

/// Events whose venue lies within `radius_km` of `center` (inclusive), in
/// input order.
pub fn filter_within_radius<'a>(
    center: GeoPoint,
    radius_km: f64,
    events: &'a [EventRecord],
) -> Vec<&'a EventRecord> {
    let nearby: Vec<&EventRecord> = events
        .iter()
        .filter(|event| center.distance_km(&event.venue()) <= radius_km)
        .collect();

    debug!(
        target: "app::geo",
        radius_km,
        total = events.len(),
        nearby = nearby.len(),
        "proximity filter applied"
    );

    nearby
}

/// Same selection as [`filter_within_radius`], keeping the computed distance
/// for display.
pub fn nearby_with_distance(
    center: GeoPoint,
    radius_km: f64,
    events: &[EventRecord],
) -> Vec<NearbyEvent> {
    events
        .iter()
        .filter_map(|event| {
            let distance_km = center.distance_km(&event.venue());
            (distance_km <= radius_km).then(|| NearbyEvent {
                event: event.clone(),
                distance_km,
            })
        })
        .collect()
}
