pub mod attendance;
pub mod connection;
pub mod students;

use crate::attendance::{AttendanceRecord, AttendanceStamp};
use crate::error::AttendanceError;
use crate::student::{SAMPLE_STUDENTS, Student};
use log::info;
use rusqlite::{Connection, Result};

pub use attendance::AttendanceRepository;
pub use students::StudentsRepository;

/// Main Database struct providing access to all repositories
pub struct Database {
    pub conn: Connection,
}

impl Database {
    /// Opens the database, creating or migrating the schema as needed
    pub fn new(db_path: &str) -> std::result::Result<Self, AttendanceError> {
        let conn = connection::init_connection(db_path)?;
        Ok(Database { conn })
    }

    /// Opens a database whose schema is already in place
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = connection::open_connection(db_path)?;
        Ok(Database { conn })
    }

    // ===== Students Repository Access =====

    pub fn insert_student(&self, student: &Student) -> Result<()> {
        let repo = StudentsRepository::new(&self.conn);
        repo.insert(student)
    }

    pub fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        let repo = StudentsRepository::new(&self.conn);
        repo.get(student_id)
    }

    pub fn count_students(&self) -> Result<i64> {
        let repo = StudentsRepository::new(&self.conn);
        repo.count()
    }

    /// Inserts the sample students that are not already present.
    /// Returns how many rows were written.
    pub fn seed_sample_students(&self) -> Result<usize> {
        let repo = StudentsRepository::new(&self.conn);
        let mut inserted = 0;
        for (student_id, student_name, course) in SAMPLE_STUDENTS {
            let student = Student {
                student_id: student_id.to_string(),
                student_name: student_name.to_string(),
                course: course.to_string(),
            };
            if repo.insert_if_missing(&student)? {
                inserted += 1;
            }
        }
        if inserted > 0 {
            info!("Seeded {} sample students", inserted);
        }
        Ok(inserted)
    }

    // ===== Attendance Repository Access =====

    pub fn insert_attendance(
        &self,
        student_id: &str,
        stamp: &AttendanceStamp,
        status: &str,
    ) -> Result<i64> {
        let repo = AttendanceRepository::new(&self.conn);
        repo.insert(student_id, stamp, status)
    }

    pub fn list_attendance(&self, student_id: &str) -> Result<Vec<AttendanceRecord>> {
        let repo = AttendanceRepository::new(&self.conn);
        repo.list_for_student(student_id)
    }

    pub fn count_attendance(&self) -> Result<i64> {
        let repo = AttendanceRepository::new(&self.conn);
        repo.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_db() -> Database {
        // Use an in-memory database for each test
        Database::new(":memory:").expect("Failed to create test database")
    }

    #[test]
    fn test_database_creation() {
        let db = create_test_db();
        assert_eq!(db.count_students().unwrap(), 0);
        assert_eq!(db.count_attendance().unwrap(), 0);
    }

    #[test]
    fn test_seed_sample_students() {
        let db = create_test_db();
        assert_eq!(db.seed_sample_students().unwrap(), 3);
        assert_eq!(db.count_students().unwrap(), 3);

        let amal = db.get_student("S1001").unwrap().unwrap();
        assert_eq!(amal.student_name, "Amal Perera");
        assert_eq!(amal.course, "Computer Science");
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = create_test_db();
        db.seed_sample_students().unwrap();
        assert_eq!(db.seed_sample_students().unwrap(), 0);
        assert_eq!(db.count_students().unwrap(), 3);
    }

    #[test]
    fn test_seed_keeps_existing_rows() {
        let db = create_test_db();
        db.insert_student(&Student {
            student_id: "S1002".to_string(),
            student_name: "Renamed Student".to_string(),
            course: "Mathematics".to_string(),
        })
        .unwrap();

        assert_eq!(db.seed_sample_students().unwrap(), 2);
        let kept = db.get_student("S1002").unwrap().unwrap();
        assert_eq!(kept.student_name, "Renamed Student");
    }

    #[test]
    fn test_insert_and_list_attendance() {
        let db = create_test_db();
        let stamp = AttendanceStamp {
            date: "2024-03-05".to_string(),
            time_in: "09:00:00".to_string(),
            month: "March 2024".to_string(),
        };
        let id = db.insert_attendance("S1001", &stamp, "Present").unwrap();
        assert_eq!(id, 1);

        let records = db.list_attendance("S1001").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month, "March 2024");
        assert_eq!(db.count_attendance().unwrap(), 1);
    }
}
