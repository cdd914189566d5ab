use std::fs;
use std::path::Path;
use std::sync::RwLock;

use serde_json::json;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::location::{BusinessLocation, LocationUpdateInput};
use crate::models::settings::ScoringSettings;
use crate::utils::time::parse_timezone;

pub const SCORING_CONFIG_ENV: &str = "EVENTRADAR_SCORING_CONFIG";

const MAX_RADIUS_KM: f64 = 100.0;

/// Holds the active scoring configuration and the tenant's business location.
pub struct SettingsService {
    scoring: RwLock<ScoringSettings>,
    location: RwLock<BusinessLocation>,
}

impl SettingsService {
    pub fn new(scoring: ScoringSettings, location: BusinessLocation) -> Self {
        Self {
            scoring: RwLock::new(scoring),
            location: RwLock::new(location),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringSettings::default(), BusinessLocation::default())
    }

    pub fn scoring(&self) -> ScoringSettings {
        match self.scoring.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn location(&self) -> BusinessLocation {
        match self.location.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn replace_scoring(&self, settings: ScoringSettings) -> AppResult<ScoringSettings> {
        settings.validate()?;
        let mut guard = self
            .scoring
            .write()
            .map_err(|_| AppError::other("scoring settings lock poisoned"))?;
        *guard = settings.clone();
        info!(target: "app::settings", "scoring settings replaced");
        Ok(settings)
    }

    /// Applies a partial location update. Nothing is stored unless every
    /// supplied field is valid.
    pub fn update_location(&self, input: LocationUpdateInput) -> AppResult<BusinessLocation> {
        let mut next = self.location();

        if let Some(name) = input.name.as_ref() {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(AppError::validation("location name must not be blank"));
            }
            next.name = trimmed.to_string();
        }

        if let Some(latitude) = input.latitude {
            ensure_in_range("latitude", latitude, -90.0, 90.0)?;
            next.latitude = latitude;
        }

        if let Some(longitude) = input.longitude {
            ensure_in_range("longitude", longitude, -180.0, 180.0)?;
            next.longitude = longitude;
        }

        if let Some(radius_km) = input.radius_km {
            if !radius_km.is_finite() || radius_km <= 0.0 || radius_km > MAX_RADIUS_KM {
                return Err(AppError::validation_with_details(
                    "radius must be greater than 0 and at most 100 km",
                    json!({ "radiusKm": radius_km }),
                ));
            }
            next.radius_km = radius_km;
        }

        if let Some(timezone) = input.timezone.as_ref() {
            let tz = parse_timezone(timezone)?;
            next.timezone = tz.name().to_string();
        }

        let mut guard = self
            .location
            .write()
            .map_err(|_| AppError::other("location lock poisoned"))?;
        *guard = next.clone();

        info!(
            target: "app::settings",
            latitude = next.latitude,
            longitude = next.longitude,
            radius_km = next.radius_km,
            "business location updated"
        );

        Ok(next)
    }
}

/// Reads scoring settings from a YAML file, or JSON when the extension is
/// `.json`. Fields missing from the file keep their defaults.
pub fn load_scoring_file(path: &Path) -> AppResult<ScoringSettings> {
    let raw = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let settings: ScoringSettings = if is_json {
        serde_json::from_str(&raw)?
    } else {
        serde_yaml::from_str(&raw)?
    };

    settings.validate()?;
    info!(target: "app::settings", path = %path.display(), "scoring settings loaded");
    Ok(settings)
}

/// Resolves scoring settings from an explicit path, then the
/// `EVENTRADAR_SCORING_CONFIG` variable, then built-in defaults.
pub fn resolve_scoring(explicit: Option<&Path>) -> AppResult<ScoringSettings> {
    if let Some(path) = explicit {
        return load_scoring_file(path);
    }

    match std::env::var(SCORING_CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => load_scoring_file(Path::new(path.trim())),
        Ok(_) => Ok(ScoringSettings::default()),
        Err(std::env::VarError::NotPresent) => Ok(ScoringSettings::default()),
        Err(err) => {
            warn!(target: "app::settings", error = %err, "ignoring unreadable scoring config variable");
            Ok(ScoringSettings::default())
        }
    }
}

fn ensure_in_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(AppError::validation_with_details(
            format!("{field} must be between {min} and {max}"),
            json!({ "field": field, "value": value }),
        ))
    }
}
