use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Trait for providing the current wall-clock time to the record service
/// This allows for flexible date handling (system time, overrides, fixed instants)
pub trait DateProvider: Send + Sync {
    /// Get the current local date/time
    fn get_current_time(&self) -> NaiveDateTime;
}

/// Default date provider that uses the system's local date/time
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn get_current_time(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Date provider that uses an overridden date instead of system time
/// Preserves the current hours/minutes/seconds from system time
pub struct OverrideDateProvider {
    override_date: NaiveDate,
}

impl OverrideDateProvider {
    /// Create a new override date provider with a specific date
    pub fn new(override_date: NaiveDate) -> Self {
        Self { override_date }
    }
}

impl DateProvider for OverrideDateProvider {
    fn get_current_time(&self) -> NaiveDateTime {
        let now = Local::now();
        self.override_date
            .and_hms_opt(now.hour(), now.minute(), now.second())
            .unwrap_or_else(|| self.override_date.and_time(chrono::NaiveTime::MIN))
    }
}

/// Always returns the same instant
pub struct FixedDateProvider {
    instant: NaiveDateTime,
}

impl FixedDateProvider {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl DateProvider for FixedDateProvider {
    fn get_current_time(&self) -> NaiveDateTime {
        self.instant
    }
}
