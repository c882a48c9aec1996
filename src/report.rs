use crate::attendance::AttendanceStatus;
use crate::record_service::StudentOverview;
use colored::Colorize;

fn paint_count(count: u32, status: AttendanceStatus, use_color: bool) -> String {
    let text = count.to_string();
    match (use_color, status) {
        (false, _) => text,
        (true, AttendanceStatus::Present) => text.green().to_string(),
        (true, AttendanceStatus::Absent) => text.red().to_string(),
    }
}

fn paint_status(raw: &str, use_color: bool) -> String {
    if !use_color {
        return raw.to_string();
    }
    match AttendanceStatus::classify(raw) {
        AttendanceStatus::Present => raw.green().to_string(),
        AttendanceStatus::Absent => raw.red().to_string(),
    }
}

/// Plain-text attendance report for one student
pub fn format_report(overview: &StudentOverview, use_color: bool) -> String {
    let student = &overview.student;
    let mut lines = vec![
        "Attendance Report".to_string(),
        "=================".to_string(),
        String::new(),
        format!(
            "Student: {} - {} ({})",
            student.student_id, student.student_name, student.course
        ),
        String::new(),
        "Monthly Summary:".to_string(),
        "-".repeat(40),
    ];

    if overview.summary.is_empty() {
        lines.push("  No attendance recorded".to_string());
    }
    for tally in overview.summary.iter() {
        lines.push(format!(
            "  {} - Present: {}, Absent: {}",
            tally.month,
            paint_count(tally.present, AttendanceStatus::Present, use_color),
            paint_count(tally.absent, AttendanceStatus::Absent, use_color)
        ));
    }

    lines.push(String::new());
    lines.push("Records:".to_string());
    lines.push("-".repeat(40));
    if overview.records.is_empty() {
        lines.push("  No records found".to_string());
    }
    for record in &overview.records {
        lines.push(format!(
            "  {} {}  {}",
            record.date,
            record.time_in,
            paint_status(&record.status, use_color)
        ));
    }

    lines.join("\n")
}
