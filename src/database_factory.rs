use crate::database::Database;
use crate::date_provider::{DateProvider, FixedDateProvider, OverrideDateProvider, SystemDateProvider};
use crate::error::AttendanceError;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use std::sync::Arc;

pub const DEFAULT_DB_PATH: &str = "database.db";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database file path
    pub path: String,
    /// Whether to insert the sample students on start-up
    pub seed_samples: bool,
    /// Pin the calendar date of new attendance events (time of day stays live)
    pub override_date: Option<NaiveDate>,
    /// Pin the full instant of new attendance events
    pub fixed_time: Option<NaiveDateTime>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: DEFAULT_DB_PATH.to_string(),
            seed_samples: true,
            override_date: None,
            fixed_time: None,
        }
    }
}

impl DatabaseConfig {
    pub fn builder() -> DatabaseConfigBuilder {
        DatabaseConfigBuilder {
            config: DatabaseConfig::default(),
        }
    }

    /// Gets the effective database path
    pub fn get_path(&self) -> &str {
        &self.path
    }

    /// In-memory and temporary databases vanish with the connection that opened them,
    /// so they cannot back connection-per-call access
    pub fn is_connection_private(&self) -> bool {
        let path = self.path.trim();
        path.is_empty() || path == ":memory:" || path.contains("mode=memory")
    }

    /// Clock matching this configuration; a fixed instant wins over a date override
    pub fn date_provider(&self) -> Arc<dyn DateProvider> {
        match (self.fixed_time, self.override_date) {
            (Some(instant), _) => Arc::new(FixedDateProvider::new(instant)),
            (None, Some(date)) => Arc::new(OverrideDateProvider::new(date)),
            (None, None) => Arc::new(SystemDateProvider),
        }
    }
}

pub struct DatabaseConfigBuilder {
    config: DatabaseConfig,
}

impl DatabaseConfigBuilder {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.path = path.into();
        self
    }

    pub fn seed_samples(mut self, seed: bool) -> Self {
        self.config.seed_samples = seed;
        self
    }

    pub fn override_date(mut self, date: Option<NaiveDate>) -> Self {
        self.config.override_date = date;
        self
    }

    pub fn fixed_time(mut self, instant: NaiveDateTime) -> Self {
        self.config.fixed_time = Some(instant);
        self
    }

    pub fn build(self) -> DatabaseConfig {
        self.config
    }
}

/// Factory for creating Database instances
pub struct DatabaseFactory;

impl DatabaseFactory {
    /// Migrates the schema and, if configured, seeds the sample students
    pub fn create(config: &DatabaseConfig) -> Result<Database, AttendanceError> {
        let path = config.get_path();
        let db = Database::new(path)?;
        if config.seed_samples {
            db.seed_sample_students()?;
        }
        info!(
            "Database {} ready: {} students, {} attendance records",
            path,
            db.count_students()?,
            db.count_attendance()?
        );
        Ok(db)
    }

    /// Per-call connection to an already-created database
    pub fn connect(config: &DatabaseConfig) -> Result<Database, AttendanceError> {
        Ok(Database::open(config.get_path())?)
    }
}
