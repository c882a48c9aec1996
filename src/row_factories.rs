use crate::attendance::AttendanceRecord;
use crate::student::Student;
use rusqlite::Row;

/// Factory for creating Student objects from database rows
pub struct StudentRowFactory;

impl StudentRowFactory {
    /// Expected columns: student_id, student_name, course
    pub fn from_row(row: &Row) -> rusqlite::Result<Student> {
        Ok(Student {
            student_id: row.get(0)?,
            student_name: row.get(1)?,
            course: row.get(2)?,
        })
    }
}

/// Factory for creating AttendanceRecord objects from database rows
pub struct AttendanceRowFactory;

impl AttendanceRowFactory {
    /// Expected columns: id, student_id, date, time_in, month, status
    pub fn from_row(row: &Row) -> rusqlite::Result<AttendanceRecord> {
        Ok(AttendanceRecord {
            id: row.get(0)?,
            student_id: row.get(1)?,
            date: row.get(2)?,
            time_in: row.get(3)?,
            month: row.get(4)?,
            status: row.get(5)?,
        })
    }
}
