use crate::models::location::{BusinessLocation, LocationUpdateInput};
use crate::models::settings::ScoringSettings;

use super::{AppState, CommandResult};

pub fn settings_location_get(state: &AppState) -> CommandResult<BusinessLocation> {
    Ok(state.settings().location())
}

pub fn settings_location_update(
    state: &AppState,
    input: LocationUpdateInput,
) -> CommandResult<BusinessLocation> {
    Ok(state.settings().update_location(input)?)
}

pub fn settings_scoring_get(state: &AppState) -> CommandResult<ScoringSettings> {
    Ok(state.settings().scoring())
}

pub fn settings_scoring_update(
    state: &AppState,
    settings: ScoringSettings,
) -> CommandResult<ScoringSettings> {
    Ok(state.settings().replace_scoring(settings)?)
}
