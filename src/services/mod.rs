pub mod calendar_service;
pub mod geo;
pub mod heat_score_service;
pub mod proximity;
pub mod settings_service;
pub mod staffing_service;
