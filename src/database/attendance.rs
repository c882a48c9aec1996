use crate::attendance::{AttendanceRecord, AttendanceStamp};
use crate::row_factories::AttendanceRowFactory;
use rusqlite::{Connection, Result, params};

pub struct AttendanceRepository<'a> {
    conn: &'a Connection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        AttendanceRepository { conn }
    }

    /// Appends one attendance event and returns its id.
    /// Does not check that the student exists.
    pub fn insert(&self, student_id: &str, stamp: &AttendanceStamp, status: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO attendance (student_id, date, time_in, month, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![student_id, stamp.date, stamp.time_in, stamp.month, status],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All records for a student, newest date first; same-date rows keep insertion order
    pub fn list_for_student(&self, student_id: &str) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, student_id, date, time_in, month, status
             FROM attendance
             WHERE student_id = ?1
             ORDER BY date DESC, id ASC",
        )?;

        let rows = stmt.query_map([student_id], AttendanceRowFactory::from_row)?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))?;
        Ok(count)
    }
}
