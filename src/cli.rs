//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// eventradar - event proximity scoring for local businesses
#[derive(Parser, Debug)]
#[command(name = "eventradar")]
#[command(version)]
#[command(about = "Heat-map and staffing forecasts from nearby public events", long_about = None)]
pub struct Cli {
    /// Scoring settings file (YAML, or JSON with a .json extension)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-day heat and staffing forecast for a date range or month
    Calendar {
        /// Dashboard snapshot JSON (location, events, campaigns)
        #[arg(long, short = 's')]
        snapshot: PathBuf,

        /// First day, YYYY-MM-DD
        #[arg(long, requires = "to", conflicts_with = "month")]
        from: Option<String>,

        /// Last day, YYYY-MM-DD
        #[arg(long, requires = "from", conflicts_with = "month")]
        to: Option<String>,

        /// Whole month, YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },

    /// Events within the business radius
    Nearby {
        #[arg(long, short = 's')]
        snapshot: PathBuf,

        /// Override the location radius (km)
        #[arg(long)]
        radius_km: Option<f64>,

        /// Maximum number of events to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Heat score and staffing for a single day
    Day {
        #[arg(long, short = 's')]
        snapshot: PathBuf,

        /// Day, YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
}
