use crate::record_service::StudentOverview;

const STYLE: &str = "body { font-family: sans-serif; margin: 2rem; }
table { border-collapse: collapse; margin-bottom: 1.5rem; }
th, td { border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: left; }
.error { color: #b00020; }
.present { color: #1b7f3b; }
.absent { color: #b00020; }";

/// Escapes text for use in element content and quoted attribute values
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

/// Search form, optionally with an error message above it
pub fn index_page(error: Option<&str>) -> String {
    let error_html = error
        .map(|message| format!("<p class=\"error\">{}</p>\n", escape_html(message)))
        .unwrap_or_default();

    let body = format!(
        "<h1>Student Attendance</h1>\n{}<form method=\"post\" action=\"/search\">\n<label for=\"student_id\">Student ID</label>\n<input type=\"text\" id=\"student_id\" name=\"student_id\" required>\n<button type=\"submit\">Search</button>\n</form>\n<p><a href=\"/add_student\">Add a new student</a></p>",
        error_html
    );
    layout("Student Attendance", &body)
}

pub fn student_page(overview: &StudentOverview) -> String {
    let student = &overview.student;
    let mut body = format!(
        "<h1>{}</h1>\n<p>Student ID: {}</p>\n<p>Course: {}</p>\n",
        escape_html(&student.student_name),
        escape_html(&student.student_id),
        escape_html(&student.course)
    );

    body.push_str("<h2>Monthly Summary</h2>\n");
    if overview.summary.is_empty() {
        body.push_str("<p>No attendance recorded yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Month</th><th>Present</th><th>Absent</th></tr>\n");
        for tally in overview.summary.iter() {
            body.push_str(&format!(
                "<tr><td>{}</td><td class=\"present\">{}</td><td class=\"absent\">{}</td></tr>\n",
                escape_html(&tally.month),
                tally.present,
                tally.absent
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Attendance Records</h2>\n");
    if overview.records.is_empty() {
        body.push_str("<p>No records found.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Date</th><th>Time In</th><th>Month</th><th>Status</th></tr>\n",
        );
        for record in &overview.records {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&record.date),
                escape_html(&record.time_in),
                escape_html(&record.month),
                escape_html(&record.status)
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str("<p><a href=\"/\">Back to search</a></p>");
    layout(&student.student_name, &body)
}

/// Add-student form with the outcome of the last submission, if any
pub fn add_student_page(message: Option<&str>) -> String {
    let message_html = message
        .map(|message| format!("<p>{}</p>\n", escape_html(message)))
        .unwrap_or_default();

    let body = format!(
        "<h1>Add Student</h1>\n{}<form method=\"post\" action=\"/add_student\">\n<label for=\"student_id\">Student ID</label>\n<input type=\"text\" id=\"student_id\" name=\"student_id\" required>\n<label for=\"student_name\">Name</label>\n<input type=\"text\" id=\"student_name\" name=\"student_name\" required>\n<label for=\"course\">Course</label>\n<input type=\"text\" id=\"course\" name=\"course\" required>\n<button type=\"submit\">Add</button>\n</form>\n<p><a href=\"/\">Back to search</a></p>",
        message_html
    );
    layout("Add Student", &body)
}
