use crate::row_factories::StudentRowFactory;
use crate::student::Student;
use rusqlite::{Connection, OptionalExtension, Result, params};

pub struct StudentsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> StudentsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        StudentsRepository { conn }
    }

    /// Plain insert; a second row with the same ID fails on the primary key
    pub fn insert(&self, student: &Student) -> Result<()> {
        self.conn.execute(
            "INSERT INTO students (student_id, student_name, course) VALUES (?1, ?2, ?3)",
            params![student.student_id, student.student_name, student.course],
        )?;
        Ok(())
    }

    /// Inserts unless the ID is already taken. Returns whether a row was written.
    pub fn insert_if_missing(&self, student: &Student) -> Result<bool> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO students (student_id, student_name, course) VALUES (?1, ?2, ?3)",
            params![student.student_id, student.student_name, student.course],
        )?;
        Ok(changed > 0)
    }

    /// Exact-match lookup; callers normalize the ID first
    pub fn get(&self, student_id: &str) -> Result<Option<Student>> {
        self.conn
            .query_row(
                "SELECT student_id, student_name, course FROM students WHERE student_id = ?1",
                [student_id],
                StudentRowFactory::from_row,
            )
            .optional()
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::init_connection;
    use crate::error::is_primary_key_violation;

    fn create_test_db() -> Connection {
        init_connection(":memory:").expect("Failed to create test database")
    }

    fn student(id: &str, name: &str, course: &str) -> Student {
        Student {
            student_id: id.to_string(),
            student_name: name.to_string(),
            course: course.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get_student() {
        let conn = create_test_db();
        let repo = StudentsRepository::new(&conn);
        repo.insert(&student("S2001", "Ruwan Jayasuriya", "Data Science"))
            .unwrap();

        let stored = repo.get("S2001").unwrap().unwrap();
        assert_eq!(stored.student_name, "Ruwan Jayasuriya");
        assert_eq!(stored.course, "Data Science");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_get_nonexistent_student() {
        let conn = create_test_db();
        let repo = StudentsRepository::new(&conn);
        assert!(repo.get("S9999").unwrap().is_none());
    }

    #[test]
    fn test_get_is_exact_match() {
        let conn = create_test_db();
        let repo = StudentsRepository::new(&conn);
        repo.insert(&student("S2001", "Ruwan Jayasuriya", "Data Science"))
            .unwrap();
        assert!(repo.get("s2001").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_insert_is_primary_key_violation() {
        let conn = create_test_db();
        let repo = StudentsRepository::new(&conn);
        repo.insert(&student("S2001", "Ruwan Jayasuriya", "Data Science"))
            .unwrap();

        let err = repo
            .insert(&student("S2001", "Someone Else", "History"))
            .unwrap_err();
        assert!(is_primary_key_violation(&err));
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(
            repo.get("S2001").unwrap().unwrap().student_name,
            "Ruwan Jayasuriya"
        );
    }

    #[test]
    fn test_insert_if_missing() {
        let conn = create_test_db();
        let repo = StudentsRepository::new(&conn);
        let s = student("S2001", "Ruwan Jayasuriya", "Data Science");

        assert!(repo.insert_if_missing(&s).unwrap());
        assert!(!repo.insert_if_missing(&s).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }
}
