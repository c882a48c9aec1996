use crate::aggregation::{MonthlySummary, summarize_by_month};
use crate::attendance::{AttendanceRecord, AttendanceStamp, AttendanceStatus};
use crate::database::Database;
use crate::database_factory::{DatabaseConfig, DatabaseFactory};
use crate::date_provider::DateProvider;
use crate::error::{AttendanceError, is_primary_key_violation};
use crate::student::{Student, normalize_student_id};
use chrono::NaiveDateTime;
use log::{info, warn};
use std::sync::Arc;

/// Everything the student page shows, read on one connection
#[derive(Debug, Clone)]
pub struct StudentOverview {
    pub student: Student,
    pub records: Vec<AttendanceRecord>,
    pub summary: MonthlySummary,
}

/// Service layer mediating all reads and writes of students and attendance.
///
/// Holds no data between calls: each operation opens its own connection and
/// drops it before returning.
pub struct RecordService {
    config: DatabaseConfig,
    date_provider: Arc<dyn DateProvider>,
}

impl RecordService {
    /// Prepares the store (migrations, optional seeding) and returns a service over it
    pub fn initialize(config: DatabaseConfig) -> Result<Self, AttendanceError> {
        if config.is_connection_private() {
            return Err(AttendanceError::ConnectionPrivatePath(
                config.get_path().to_string(),
            ));
        }
        DatabaseFactory::create(&config)?;
        let date_provider = config.date_provider();
        Ok(Self {
            config,
            date_provider,
        })
    }

    pub fn with_date_provider(mut self, date_provider: Arc<dyn DateProvider>) -> Self {
        self.date_provider = date_provider;
        self
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Current wall-clock time according to the injected clock
    pub fn now(&self) -> NaiveDateTime {
        self.date_provider.get_current_time()
    }

    fn connect(&self) -> Result<Database, AttendanceError> {
        DatabaseFactory::connect(&self.config)
    }

    /// `Ok(None)` when no student has the (normalized) ID
    pub fn find_student(&self, student_id: &str) -> Result<Option<Student>, AttendanceError> {
        let db = self.connect()?;
        Ok(db.get_student(&normalize_student_id(student_id))?)
    }

    /// Attendance history, newest date first. Unknown students yield an empty list.
    pub fn list_attendance(&self, student_id: &str) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        let db = self.connect()?;
        Ok(db.list_attendance(&normalize_student_id(student_id))?)
    }

    /// Records one attendance event stamped with `now`.
    /// `status` defaults to `Present` and is otherwise stored as given.
    pub fn record_attendance(
        &self,
        student_id: &str,
        status: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<AttendanceRecord, AttendanceError> {
        let student_id = normalize_student_id(student_id);
        let status = status.unwrap_or(AttendanceStatus::Present.as_str());
        let db = self.connect()?;

        if db.get_student(&student_id)?.is_none() {
            warn!("Attendance rejected: student {} not found", student_id);
            return Err(AttendanceError::StudentNotFound(student_id));
        }

        let stamp = AttendanceStamp::from_datetime(now);
        let id = db.insert_attendance(&student_id, &stamp, status)?;
        info!(
            "Attendance #{} recorded for {} at {} ({})",
            id, student_id, stamp.time_in, status
        );

        Ok(AttendanceRecord {
            id,
            student_id,
            date: stamp.date,
            time_in: stamp.time_in,
            month: stamp.month,
            status: status.to_string(),
        })
    }

    /// Adds a student; an existing ID (in any letter case) is rejected and nothing is written
    pub fn add_student(
        &self,
        student_id: &str,
        student_name: &str,
        course: &str,
    ) -> Result<Student, AttendanceError> {
        let student = Student {
            student_id: normalize_student_id(student_id),
            student_name: student_name.trim().to_string(),
            course: course.trim().to_string(),
        };
        let db = self.connect()?;

        match db.insert_student(&student) {
            Ok(()) => {
                info!("Student {} ({}) added", student.student_id, student.student_name);
                Ok(student)
            }
            Err(e) if is_primary_key_violation(&e) => {
                warn!("Student {} already exists", student.student_id);
                Err(AttendanceError::DuplicateStudent(student.student_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Lookup, history and monthly summary for the search page
    pub fn student_overview(&self, student_id: &str) -> Result<Option<StudentOverview>, AttendanceError> {
        let student_id = normalize_student_id(student_id);
        let db = self.connect()?;

        let Some(student) = db.get_student(&student_id)? else {
            return Ok(None);
        };
        let records = db.list_attendance(&student_id)?;
        let summary = summarize_by_month(&records);

        Ok(Some(StudentOverview {
            student,
            records,
            summary,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn create_service() -> (TempDir, RecordService) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.db");
        let config = DatabaseConfig::builder()
            .path(path.to_str().unwrap())
            .fixed_time(at(2024, 3, 5, 9, 0, 0))
            .build();
        let service = RecordService::initialize(config).unwrap();
        (dir, service)
    }

    fn attendance_count(service: &RecordService) -> i64 {
        service.connect().unwrap().count_attendance().unwrap()
    }

    #[test]
    fn test_initialize_rejects_in_memory_database() {
        let config = DatabaseConfig::builder().path(":memory:").build();
        let err = RecordService::initialize(config).err().unwrap();
        assert!(matches!(err, AttendanceError::ConnectionPrivatePath(ref p) if p == ":memory:"));
    }

    #[test]
    fn test_find_student_case_insensitive() {
        let (_dir, service) = create_service();
        let lower = service.find_student("s1001").unwrap();
        let upper = service.find_student("S1001").unwrap();
        assert!(lower.is_some());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_find_student_not_found() {
        let (_dir, service) = create_service();
        assert!(service.find_student("S9999").unwrap().is_none());
    }

    #[test]
    fn test_record_attendance_derives_stamp_from_now() {
        let (_dir, service) = create_service();
        let record = service
            .record_attendance("s1001", Some("Present"), at(2024, 3, 5, 9, 0, 0))
            .unwrap();

        assert_eq!(record.student_id, "S1001");
        assert_eq!(record.date, "2024-03-05");
        assert_eq!(record.time_in, "09:00:00");
        assert_eq!(record.month, "March 2024");
        assert_eq!(record.status, "Present");
    }

    #[test]
    fn test_record_attendance_defaults_to_present() {
        let (_dir, service) = create_service();
        let record = service
            .record_attendance("S1002", None, service.now())
            .unwrap();
        assert_eq!(record.status, "Present");
    }

    #[test]
    fn test_record_attendance_stores_status_verbatim() {
        let (_dir, service) = create_service();
        service
            .record_attendance("S1002", Some("Sick"), at(2024, 3, 5, 9, 0, 0))
            .unwrap();

        let records = service.list_attendance("S1002").unwrap();
        assert_eq!(records[0].status, "Sick");
        assert_eq!(records[0].status_kind(), AttendanceStatus::Absent);
    }

    #[test]
    fn test_record_attendance_unknown_student_leaves_store_unchanged() {
        let (_dir, service) = create_service();
        let err = service
            .record_attendance("S9999", Some("Present"), at(2024, 3, 5, 9, 0, 0))
            .unwrap_err();

        assert!(matches!(err, AttendanceError::StudentNotFound(ref id) if id == "S9999"));
        assert_eq!(attendance_count(&service), 0);
    }

    #[test]
    fn test_list_attendance_unknown_student_is_empty() {
        let (_dir, service) = create_service();
        assert!(service.list_attendance("S9999").unwrap().is_empty());
    }

    #[test]
    fn test_add_student() {
        let (_dir, service) = create_service();
        let student = service
            .add_student(" s2001 ", " Ruwan Jayasuriya ", "Data Science ")
            .unwrap();

        assert_eq!(student.student_id, "S2001");
        assert_eq!(student.student_name, "Ruwan Jayasuriya");
        assert_eq!(student.course, "Data Science");
        assert_eq!(service.find_student("s2001").unwrap(), Some(student));
    }

    #[test]
    fn test_add_student_duplicate_any_case() {
        let (_dir, service) = create_service();
        service
            .add_student("S2001", "Ruwan Jayasuriya", "Data Science")
            .unwrap();
        let err = service
            .add_student("s2001", "Other Name", "History")
            .unwrap_err();

        assert!(matches!(err, AttendanceError::DuplicateStudent(ref id) if id == "S2001"));
        let db = service.connect().unwrap();
        assert_eq!(db.count_students().unwrap(), 4);
        assert_eq!(
            db.get_student("S2001").unwrap().unwrap().student_name,
            "Ruwan Jayasuriya"
        );
    }

    #[test]
    fn test_add_seeded_student_is_duplicate() {
        let (_dir, service) = create_service();
        let err = service
            .add_student("S1003", "Kamali Silva", "Software Engineering")
            .unwrap_err();
        assert!(matches!(err, AttendanceError::DuplicateStudent(_)));
    }

    #[test]
    fn test_student_overview() {
        let (_dir, service) = create_service();
        service
            .record_attendance("S1001", None, at(2024, 2, 28, 9, 0, 0))
            .unwrap();
        service
            .record_attendance("S1001", Some("Absent"), at(2024, 3, 4, 9, 0, 0))
            .unwrap();
        service
            .record_attendance("S1001", None, at(2024, 3, 5, 9, 0, 0))
            .unwrap();

        let overview = service.student_overview("s1001").unwrap().unwrap();
        assert_eq!(overview.student.student_name, "Amal Perera");
        assert_eq!(overview.records.len(), 3);
        assert_eq!(overview.records[0].date, "2024-03-05");

        let months: Vec<&str> = overview.summary.iter().map(|t| t.month.as_str()).collect();
        assert_eq!(months, vec!["March 2024", "February 2024"]);
        let march = overview.summary.get("March 2024").unwrap();
        assert_eq!((march.present, march.absent), (1, 1));
    }

    #[test]
    fn test_student_overview_unknown_student() {
        let (_dir, service) = create_service();
        assert!(service.student_overview("S9999").unwrap().is_none());
    }

    #[test]
    fn test_now_uses_injected_clock() {
        let (_dir, service) = create_service();
        assert_eq!(service.now(), at(2024, 3, 5, 9, 0, 0));

        let service = service.with_date_provider(Arc::new(
            crate::date_provider::FixedDateProvider::new(at(2025, 1, 1, 12, 30, 0)),
        ));
        assert_eq!(service.now(), at(2025, 1, 1, 12, 30, 0));
    }
}
