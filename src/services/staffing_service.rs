use chrono::NaiveDate;
use tracing::debug;

use crate::models::event::EventRecord;
use crate::models::heat::StaffingRecommendation;
use crate::models::location::GeoPoint;
use crate::models::settings::StaffingPolicy;

/// Advisory headcount for a day. Events within the policy radius each add
/// `ceil(attendance * ratio / attendees_per_staff)` on top of the base staff.
#[derive(Debug, Clone, Default)]
pub struct StaffingService {
    policy: StaffingPolicy,
}

impl StaffingService {
    pub fn new(policy: StaffingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &StaffingPolicy {
        &self.policy
    }

    pub fn extra_staff_for(&self, event: &EventRecord) -> u32 {
        let needed =
            (event.attendance() * self.policy.attendance_ratio / self.policy.attendees_per_staff)
                .ceil();
        if needed.is_finite() && needed > 0.0 {
            // Saturating float-to-int cast.
            needed as u32
        } else {
            0
        }
    }

    pub fn recommend<'e, E>(
        &self,
        date: NaiveDate,
        location: GeoPoint,
        events: E,
    ) -> StaffingRecommendation
    where
        E: IntoIterator<Item = &'e EventRecord>,
    {
        let (additional_staff, qualifying_events) = events
            .into_iter()
            .filter(|event| location.distance_km(&event.venue()) <= self.policy.radius_km)
            .fold((0u32, 0usize), |(extra, count), event| {
                (extra.saturating_add(self.extra_staff_for(event)), count + 1)
            });

        let total_staff = self.policy.base_staff.saturating_add(additional_staff);

        debug!(
            target: "app::staffing",
            %date,
            qualifying_events,
            additional_staff,
            total_staff,
            "staffing recommendation computed"
        );

        StaffingRecommendation {
            date,
            base_staff: self.policy.base_staff,
            additional_staff,
            total_staff,
            qualifying_events,
        }
    }
}
