pub mod calendar;
pub mod settings;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{error, warn};

use crate::error::AppError;
use crate::models::location::BusinessLocation;
use crate::models::settings::ScoringSettings;
use crate::services::calendar_service::CalendarForecastService;
use crate::services::settings_service::SettingsService;

/// Services shared by every command invocation.
#[derive(Clone)]
pub struct AppState {
    settings_service: Arc<SettingsService>,
    calendar_service: Arc<CalendarForecastService>,
}

impl AppState {
    pub fn new(scoring: ScoringSettings, location: BusinessLocation) -> Self {
        let settings_service = Arc::new(SettingsService::new(scoring, location));
        let calendar_service = Arc::new(CalendarForecastService::new(Arc::clone(
            &settings_service,
        )));

        Self {
            settings_service,
            calendar_service,
        }
    }

    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings_service)
    }

    pub fn calendar(&self) -> Arc<CalendarForecastService> {
        Arc::clone(&self.calendar_service)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScoringSettings::default(), BusinessLocation::default())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Validation { message, details } => {
                warn!(target: "app::command", %message, "validation error in command");
                CommandError::new("VALIDATION_ERROR", message, details)
            }
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", format!("serialization failed: {error}"), None)
            }
            AppError::Yaml(error) => {
                error!(target: "app::command", error = %error, "yaml error in command");
                CommandError::new("UNKNOWN", format!("yaml parsing failed: {error}"), None)
            }
            AppError::Io(error) => {
                error!(target: "app::command", error = %error, "io error in command");
                CommandError::new("UNKNOWN", format!("file access failed: {error}"), None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}
