use crate::attendance::{AttendanceRecord, AttendanceStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthTally {
    pub month: String,
    pub present: u32,
    pub absent: u32,
}

impl MonthTally {
    fn new(month: &str) -> Self {
        MonthTally {
            month: month.to_string(),
            present: 0,
            absent: 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.present + self.absent
    }
}

/// Present/absent counts per month label, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    months: Vec<MonthTally>,
}

impl MonthlySummary {
    pub fn get(&self, month: &str) -> Option<&MonthTally> {
        self.months.iter().find(|tally| tally.month == month)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthTally> {
        self.months.iter()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    fn entry(&mut self, month: &str) -> &mut MonthTally {
        let index = match self.months.iter().position(|tally| tally.month == month) {
            Some(index) => index,
            None => {
                self.months.push(MonthTally::new(month));
                self.months.len() - 1
            }
        };
        &mut self.months[index]
    }
}

/// Single pass over the records, bucketing by the stored month label.
/// Months are never sorted or padded; a month without records does not appear.
pub fn summarize_by_month(records: &[AttendanceRecord]) -> MonthlySummary {
    let mut summary = MonthlySummary::default();
    for record in records {
        let tally = summary.entry(&record.month);
        match record.status_kind() {
            AttendanceStatus::Present => tally.present += 1,
            AttendanceStatus::Absent => tally.absent += 1,
        }
    }
    summary
}
