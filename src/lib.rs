pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::commands::{AppState, CommandError, CommandResult};
use crate::error::AppResult;
use crate::models::heat::{CalendarQuery, NearbyQuery};
use crate::models::snapshot::DashboardSnapshot;
use crate::services::settings_service::resolve_scoring;

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = crate::utils::logger::init_logging(cli.log_dir.as_deref()) {
        eprintln!("failed to initialize logging: {error}");
    }

    match try_run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let rendered = serde_json::to_string_pretty(&error)
                .unwrap_or_else(|_| format!("{}: {}", error.code, error.message));
            eprintln!("{rendered}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> CommandResult<String> {
    let scoring = resolve_scoring(cli.config.as_deref())?;

    match cli.command {
        Commands::Calendar {
            snapshot,
            from,
            to,
            month,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let state = AppState::new(scoring, snapshot.location.clone());
            let query = CalendarQuery {
                start_date: from,
                end_date: to,
                month,
            };
            render(&commands::calendar::calendar_forecast_fetch(
                &state, &snapshot, query,
            )?)
        }
        Commands::Nearby {
            snapshot,
            radius_km,
            limit,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let state = AppState::new(scoring, snapshot.location.clone());
            let query = NearbyQuery {
                radius_km,
                from: None,
                limit,
            };
            render(&commands::calendar::nearby_events_fetch(
                &state,
                &snapshot,
                Some(query),
            )?)
        }
        Commands::Day { snapshot, date } => {
            let snapshot = load_snapshot(&snapshot)?;
            let state = AppState::new(scoring, snapshot.location.clone());
            render(&commands::calendar::day_forecast_fetch(
                &state, &snapshot, &date,
            )?)
        }
    }
}

pub fn load_snapshot(path: &Path) -> AppResult<DashboardSnapshot> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn render<T: Serialize>(value: &T) -> CommandResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CommandError::from(crate::error::AppError::from(err)))
}
