use crate::error::AttendanceError;
use log::{debug, error};
use rusqlite::Connection;

// Embed migrations from the migrations directory
refinery::embed_migrations!("migrations");

/// Opens the database and runs any pending migrations
pub fn init_connection(db_path: &str) -> Result<Connection, AttendanceError> {
    let mut conn = Connection::open(db_path)?;

    match migrations::runner().run(&mut conn) {
        Ok(report) => {
            debug!(
                "Migrations completed successfully ({} applied)",
                report.applied_migrations().len()
            );
        }
        Err(e) => {
            error!("Refinery migration error: {}", e);
            return Err(AttendanceError::Migration(e));
        }
    }

    Ok(conn)
}

/// Opens an already-migrated database
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    Connection::open(db_path)
}
