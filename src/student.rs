/// Students seeded on first start so the tracker can be tried right away
pub const SAMPLE_STUDENTS: [(&str, &str, &str); 3] = [
    ("S1001", "Amal Perera", "Computer Science"),
    ("S1002", "Nimal Fernando", "Information Technology"),
    ("S1003", "Kamali Silva", "Software Engineering"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: String,
    pub student_name: String,
    pub course: String,
}

/// Canonical form of a student ID: surrounding whitespace removed, uppercased.
/// Every lookup and insert goes through this so `s1001` and `S1001` match.
pub fn normalize_student_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}
