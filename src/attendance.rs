use chrono::NaiveDateTime;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const MONTH_FORMAT: &str = "%B %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    /// Binary classification of a stored status: only the exact string
    /// `Present` counts as present, everything else is absent.
    pub fn classify(raw: &str) -> Self {
        if raw == AttendanceStatus::Present.as_str() {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: String,
    pub date: String,
    pub time_in: String,
    pub month: String,
    /// Stored verbatim as received
    pub status: String,
}

impl AttendanceRecord {
    pub fn status_kind(&self) -> AttendanceStatus {
        AttendanceStatus::classify(&self.status)
    }
}

/// Date, time of day and month label derived from one instant
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStamp {
    pub date: String,
    pub time_in: String,
    pub month: String,
}

impl AttendanceStamp {
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        AttendanceStamp {
            date: now.format(DATE_FORMAT).to_string(),
            time_in: now.format(TIME_FORMAT).to_string(),
            month: now.format(MONTH_FORMAT).to_string(),
        }
    }
}
