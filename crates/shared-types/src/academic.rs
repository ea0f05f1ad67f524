//! Academic wire types: classes, assignments, attendance, results,
//! notifications and the teacher profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assignment categories offered by the create/edit form.
pub const ASSIGNMENT_TYPES: &[(&str, &str)] = &[
    ("homework", "Homework"),
    ("project", "Project"),
    ("quiz", "Quiz"),
    ("lab", "Lab Work"),
    ("exam", "Exam"),
];

/// Exam categories offered by the grade form.
pub const EXAM_TYPES: &[(&str, &str)] = &[
    ("unit_test", "Unit Test"),
    ("midterm", "Midterm"),
    ("final", "Final"),
    ("practical", "Practical"),
];

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub section: String,
    pub subject: String,
    pub student_count: i64,
    pub schedule: String,
}

impl ClassSummary {
    /// "Grade 10 - B" style label used in selects and headings.
    pub fn label(&self) -> String {
        if self.section.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.section)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StudentSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub roll_number: String,
    pub email: String,
}

impl StudentSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ClassDetail {
    pub id: i64,
    pub name: String,
    pub section: String,
    pub subject: String,
    pub schedule: String,
    pub room: String,
    pub students: Vec<StudentSummary>,
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Submission {
    pub student_id: i64,
    pub student_name: String,
    pub submitted_at: Option<String>,
    pub marks_obtained: Option<f64>,
    pub feedback: Option<String>,
    pub document_url: Option<String>,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.marks_obtained.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub class_id: i64,
    pub class_name: String,
    /// ISO date (`YYYY-MM-DD`) or datetime.
    pub due_date: String,
    pub total_marks: f64,
    pub weightage: f64,
    pub assignment_type: String,
    pub document_url: Option<String>,
    pub submissions_count: i64,
    pub submissions: Vec<Submission>,
}

impl Assignment {
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due().is_some_and(|due| due < today)
    }

    /// Text matched by the assignments search box.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.class_name, self.assignment_type, self.description
        )
    }
}

/// Create/edit form state. Every field is kept as entered so the form can
/// round-trip partial input; the multipart body is built from these strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignmentForm {
    pub title: String,
    pub description: String,
    pub class_id: String,
    pub due_date: String,
    pub total_marks: String,
    pub weightage: String,
    pub assignment_type: String,
}

impl AssignmentForm {
    pub fn from_assignment(a: &Assignment) -> Self {
        Self {
            title: a.title.clone(),
            description: a.description.clone(),
            class_id: a.class_id.to_string(),
            due_date: a.due_date.get(..10).unwrap_or(&a.due_date).to_string(),
            total_marks: format_number(a.total_marks),
            weightage: format_number(a.weightage),
            assignment_type: a.assignment_type.clone(),
        }
    }

    /// Required fields are non-empty.
    pub fn is_submittable(&self) -> bool {
        [&self.title, &self.class_id, &self.due_date, &self.total_marks]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    /// Text parts of the multipart body, in wire order. The `document` part
    /// is appended separately when a file was picked.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_string()),
            ("description", self.description.trim().to_string()),
            ("class_id", self.class_id.trim().to_string()),
            ("due_date", self.due_date.trim().to_string()),
            ("total_marks", self.total_marks.trim().to_string()),
            ("weightage", self.weightage.trim().to_string()),
            ("assignment_type", self.assignment_type.trim().to_string()),
        ]
    }
}

/// A file picked for the `document` multipart field.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeSubmissionRequest {
    pub marks_obtained: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::Excused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Excused => "excused",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Excused => "Excused",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AttendanceRecord {
    pub student_id: i64,
    pub student_name: String,
    pub roll_number: String,
    /// `None` when attendance was not taken yet for the date.
    pub status: Option<AttendanceStatus>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkAttendanceRequest {
    pub date: String,
    pub records: Vec<AttendanceEntry>,
}

impl MarkAttendanceRequest {
    /// Build the request from a sheet, skipping students left unmarked.
    pub fn from_sheet(date: &str, sheet: &[AttendanceRecord]) -> Self {
        Self {
            date: date.to_string(),
            records: sheet
                .iter()
                .filter_map(|r| {
                    r.status.map(|status| AttendanceEntry {
                        student_id: r.student_id,
                        status,
                        remarks: r.remarks.clone(),
                    })
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AttendanceSummaryRow {
    pub student_id: i64,
    pub student_name: String,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
}

impl AttendanceSummaryRow {
    /// Share of sessions attended, late counting as attended.
    pub fn percentage(&self) -> f64 {
        let total = self.present + self.absent + self.late + self.excused;
        if total == 0 {
            return 0.0;
        }
        (self.present + self.late) as f64 * 100.0 / total as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AttendanceCalendarDay {
    pub date: String,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ResultRecord {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub subject: String,
    pub exam_type: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}

impl ResultRecord {
    pub fn percentage(&self) -> f64 {
        if self.total_marks <= 0.0 {
            return 0.0;
        }
        (self.marks_obtained / self.total_marks * 100.0).clamp(0.0, 100.0)
    }

    /// Grade from the server when present, otherwise derived from marks.
    pub fn letter_grade(&self) -> String {
        if let Some(grade) = self.grade.as_ref().filter(|g| !g.trim().is_empty()) {
            return grade.clone();
        }
        let grade = match self.percentage() {
            p if p >= 90.0 => "A+",
            p if p >= 80.0 => "A",
            p if p >= 70.0 => "B",
            p if p >= 60.0 => "C",
            p if p >= 50.0 => "D",
            _ => "F",
        };
        grade.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRequest {
    pub student_id: i64,
    pub subject: String,
    pub exam_type: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

// ---------------------------------------------------------------------------
// Notifications and profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TeacherNotification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub created_at: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TeacherProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub qualification: String,
    pub joining_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

impl ChangePasswordRequest {
    pub fn is_submittable(&self) -> bool {
        !self.current_password.is_empty()
            && !self.new_password.is_empty()
            && !self.confirm_password.is_empty()
    }

    /// Client-side checks run before the request is sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "New password must be at least {MIN_PASSWORD_LEN} characters."
            ));
        }
        if self.new_password != self.confirm_password {
            return Err("New passwords do not match.".to_string());
        }
        if self.new_password == self.current_password {
            return Err("New password must differ from the current one.".to_string());
        }
        Ok(())
    }
}

/// Render a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_form() -> AssignmentForm {
        AssignmentForm {
            title: "Essay".into(),
            description: String::new(),
            class_id: "3".into(),
            due_date: "2026-11-01".into(),
            total_marks: "50".into(),
            weightage: String::new(),
            assignment_type: "homework".into(),
        }
    }

    #[test]
    fn form_requires_core_fields() {
        assert!(complete_form().is_submittable());
        for clear in 0..4 {
            let mut form = complete_form();
            match clear {
                0 => form.title = "  ".into(),
                1 => form.class_id.clear(),
                2 => form.due_date.clear(),
                _ => form.total_marks.clear(),
            }
            assert!(!form.is_submittable(), "field {clear}");
        }
    }

    #[test]
    fn form_text_fields_follow_wire_names() {
        let names: Vec<_> = complete_form().text_fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec!["title", "description", "class_id", "due_date", "total_marks", "weightage", "assignment_type"]
        );
    }

    #[test]
    fn form_from_assignment_trims_datetime() {
        let a = Assignment {
            title: "Lab".into(),
            class_id: 9,
            due_date: "2026-10-20T00:00:00.000Z".into(),
            total_marks: 20.0,
            weightage: 12.5,
            ..Assignment::default()
        };
        let form = AssignmentForm::from_assignment(&a);
        assert_eq!(form.due_date, "2026-10-20");
        assert_eq!(form.total_marks, "20");
        assert_eq!(form.weightage, "12.5");
        assert_eq!(form.class_id, "9");
    }

    #[test]
    fn overdue_compares_dates() {
        let a = Assignment {
            due_date: "2026-10-17".into(),
            ..Assignment::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert!(a.is_overdue(today));
        assert!(!Assignment::default().is_overdue(today));
    }

    #[test]
    fn attendance_request_skips_unmarked() {
        let sheet = vec![
            AttendanceRecord {
                student_id: 1,
                status: Some(AttendanceStatus::Present),
                ..AttendanceRecord::default()
            },
            AttendanceRecord {
                student_id: 2,
                status: None,
                ..AttendanceRecord::default()
            },
        ];
        let req = MarkAttendanceRequest::from_sheet("2026-10-18", &sheet);
        assert_eq!(req.records.len(), 1);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"date": "2026-10-18", "records": [{"student_id": 1, "status": "present"}]})
        );
    }

    #[test]
    fn attendance_percentage_counts_late_as_attended() {
        let row = AttendanceSummaryRow {
            present: 6,
            late: 2,
            absent: 1,
            excused: 1,
            ..AttendanceSummaryRow::default()
        };
        assert_eq!(row.percentage(), 80.0);
        assert_eq!(AttendanceSummaryRow::default().percentage(), 0.0);
    }

    #[test]
    fn letter_grade_prefers_server_value() {
        let mut r = ResultRecord {
            marks_obtained: 45.0,
            total_marks: 50.0,
            ..ResultRecord::default()
        };
        assert_eq!(r.letter_grade(), "A+");
        r.grade = Some("B+".into());
        assert_eq!(r.letter_grade(), "B+");
        r.grade = None;
        r.marks_obtained = 10.0;
        assert_eq!(r.letter_grade(), "F");
    }

    #[test]
    fn zero_total_marks_is_zero_percent() {
        assert_eq!(ResultRecord::default().percentage(), 0.0);
    }

    #[test]
    fn change_password_validation() {
        let mut req = ChangePasswordRequest {
            current_password: "oldpassword".into(),
            new_password: "short".into(),
            confirm_password: "short".into(),
        };
        assert!(req.validate().is_err());
        req.new_password = "longenough1".into();
        req.confirm_password = "different11".into();
        assert_eq!(req.validate().unwrap_err(), "New passwords do not match.");
        req.confirm_password = "longenough1".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn confirm_password_is_not_sent() {
        let req = ChangePasswordRequest {
            current_password: "a".into(),
            new_password: "b".into(),
            confirm_password: "b".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn status_wire_values() {
        for status in AttendanceStatus::ALL {
            assert_eq!(AttendanceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AttendanceStatus::parse("sick"), None);
    }
}
