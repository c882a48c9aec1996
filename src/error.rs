use rusqlite::ErrorCode;
use rusqlite::ffi;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("Student {0} not found")]
    StudentNotFound(String),

    #[error("Student ID {0} already exists")]
    DuplicateStudent(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] refinery::Error),

    #[error("Database path {0:?} is private to one connection; use a database file")]
    ConnectionPrivatePath(String),
}

/// True only for a primary-key violation; other constraint failures and
/// I/O errors are left to the caller as ordinary store errors.
pub fn is_primary_key_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
        }
        _ => false,
    }
}
