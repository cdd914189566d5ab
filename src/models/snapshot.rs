use serde::{Deserialize, Serialize};

use crate::models::campaign::CampaignRecord;
use crate::models::event::EventRecord;
use crate::models::location::BusinessLocation;

/// Tenant data as handed over by the data-loading layer, already filtered to
/// the period being viewed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub location: BusinessLocation,
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub campaigns: Vec<CampaignRecord>,
}
