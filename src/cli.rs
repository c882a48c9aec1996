use crate::database_factory::{DEFAULT_DB_PATH, DatabaseConfig};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Student attendance tracker with a small web front end
#[derive(Parser, Debug, Clone)]
#[command(name = "Attendance Tracker")]
#[command(about = "Look up students, record attendance and view monthly summaries", long_about = None)]
#[command(version)]
pub struct Args {
    /// Database file path
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Address the web server listens on
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Override current date for new attendance records (YYYY-MM-DD format)
    #[arg(
        long,
        value_name = "DATE",
        help = "Override current date (YYYY-MM-DD format)"
    )]
    pub override_date: Option<String>,

    /// Do not insert the sample students on start-up
    #[arg(long)]
    pub no_seed: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the override_date argument if provided
    pub fn validate_override_date(&self) -> Result<Option<NaiveDate>, String> {
        match &self.override_date {
            Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    format!(
                        "Invalid date format for --override-date: '{}'. Expected YYYY-MM-DD",
                        date_str
                    )
                }),
            None => Ok(None),
        }
    }

    pub fn database_config(&self) -> Result<DatabaseConfig, String> {
        let config = DatabaseConfig::builder()
            .path(self.db_path.to_string_lossy())
            .seed_samples(!self.no_seed)
            .override_date(self.validate_override_date()?)
            .build();
        if config.is_connection_private() {
            return Err(format!(
                "Invalid --db-path '{}': in-memory databases are not supported, use a file path",
                config.get_path()
            ));
        }
        Ok(config)
    }
}
