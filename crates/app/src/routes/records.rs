//! Read-only list pages for the admin, student and parent menus.
//!
//! Each `/records/:resource` path is backed by one row of [`RECORD_SOURCES`]:
//! the endpoint to fetch and the columns to show. Rows are kept as loose
//! JSON so new backend fields never break a page.

use client::section;
use dioxus::prelude::*;
use serde_json::Value;
use shared_types::{filter_rows, Page};
use shared_ui::{
    Alert, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableEmpty,
    DataTableHeader, DataTableRow, PageHeader, Pagination, SkeletonRows, TextField,
};

use crate::format_helpers::format_json_cell;
use crate::routes::Route;
use crate::scope::use_view_scope;
use crate::use_services;

#[derive(Debug, PartialEq, Eq)]
pub struct RecordSource {
    pub resource: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub endpoint: &'static str,
    /// `(json key, column label)` in display order.
    pub columns: &'static [(&'static str, &'static str)],
}

const fn source(
    resource: &'static str,
    title: &'static str,
    subtitle: &'static str,
    endpoint: &'static str,
    columns: &'static [(&'static str, &'static str)],
) -> RecordSource {
    RecordSource {
        resource,
        title,
        subtitle,
        endpoint,
        columns,
    }
}

pub static RECORD_SOURCES: [RecordSource; 16] = [
    // super admin
    source(
        "colleges",
        "Colleges",
        "Institutions on the platform",
        "/super-admin/colleges",
        &[("name", "Name"), ("code", "Code"), ("city", "City"), ("student_count", "Students"), ("is_active", "Active")],
    ),
    source(
        "users",
        "Users",
        "Accounts across every college",
        "/super-admin/users",
        &[("name", "Name"), ("email", "Email"), ("role", "Role"), ("college_name", "College"), ("is_active", "Active")],
    ),
    source(
        "platform-reports",
        "Reports",
        "Platform activity by college",
        "/super-admin/reports",
        &[("college_name", "College"), ("students", "Students"), ("teachers", "Teachers"), ("revenue", "Revenue")],
    ),
    // college admin
    source(
        "students",
        "Students",
        "Enrolled students",
        "/college-admin/students",
        &[("roll_number", "Roll No."), ("name", "Name"), ("email", "Email"), ("class_name", "Class"), ("parent_name", "Parent")],
    ),
    source(
        "teachers",
        "Teachers",
        "Teaching staff",
        "/college-admin/teachers",
        &[("name", "Name"), ("email", "Email"), ("department", "Department"), ("qualification", "Qualification")],
    ),
    source(
        "classes",
        "Classes",
        "Classes and sections",
        "/college-admin/classes",
        &[("name", "Class"), ("section", "Section"), ("teacher_name", "Class Teacher"), ("student_count", "Students")],
    ),
    source(
        "fees",
        "Fees",
        "Fee collection status",
        "/college-admin/fees",
        &[("student_name", "Student"), ("fee_type", "Type"), ("amount", "Amount"), ("due_date", "Due"), ("status", "Status")],
    ),
    source(
        "college-reports",
        "Reports",
        "Attendance and results by class",
        "/college-admin/reports",
        &[("class_name", "Class"), ("attendance_rate", "Attendance %"), ("average_score", "Average Score"), ("pass_rate", "Pass %")],
    ),
    // student
    source(
        "courses",
        "Courses",
        "Subjects you are enrolled in",
        "/student/courses",
        &[("subject", "Subject"), ("teacher_name", "Teacher"), ("class_name", "Class"), ("schedule", "Schedule")],
    ),
    source(
        "my-assignments",
        "Assignments",
        "Coursework set for your classes",
        "/student/assignments",
        &[("title", "Title"), ("subject", "Subject"), ("due_date", "Due"), ("total_marks", "Marks"), ("status", "Status")],
    ),
    source(
        "my-grades",
        "Grades",
        "Your exam results",
        "/student/grades",
        &[("subject", "Subject"), ("exam_type", "Exam"), ("marks_obtained", "Marks"), ("total_marks", "Out Of"), ("grade", "Grade")],
    ),
    source(
        "schedule",
        "Schedule",
        "Your weekly timetable",
        "/student/schedule",
        &[("day", "Day"), ("start_time", "Start"), ("end_time", "End"), ("subject", "Subject"), ("room", "Room")],
    ),
    // parent
    source(
        "children",
        "Children",
        "Students linked to your account",
        "/parent/children",
        &[("name", "Name"), ("roll_number", "Roll No."), ("class_name", "Class"), ("college_name", "College")],
    ),
    source(
        "child-attendance",
        "Attendance",
        "Daily attendance for your children",
        "/parent/attendance",
        &[("student_name", "Student"), ("date", "Date"), ("status", "Status"), ("remarks", "Remarks")],
    ),
    source(
        "child-grades",
        "Grades",
        "Exam results for your children",
        "/parent/grades",
        &[("student_name", "Student"), ("subject", "Subject"), ("exam_type", "Exam"), ("marks_obtained", "Marks"), ("grade", "Grade")],
    ),
    source(
        "child-fees",
        "Fees",
        "Fees due and paid",
        "/parent/fees",
        &[("student_name", "Student"), ("fee_type", "Type"), ("amount", "Amount"), ("due_date", "Due"), ("status", "Status")],
    ),
];

pub fn record_source(resource: &str) -> Option<&'static RecordSource> {
    RECORD_SOURCES.iter().find(|s| s.resource == resource)
}

impl RecordSource {
    fn labels(&self) -> Vec<String> {
        self.columns.iter().map(|(_, label)| label.to_string()).collect()
    }

    fn cells(&self, row: &Value) -> Vec<String> {
        self.columns
            .iter()
            .map(|(key, _)| format_json_cell(row.get(*key)))
            .collect()
    }

    /// Text matched by the search box: every visible cell.
    fn search_text(&self, row: &Value) -> String {
        self.cells(row).join(" ")
    }
}

#[component]
pub fn Records(resource: String) -> Element {
    match record_source(&resource) {
        Some(source) => rsx! {
            RecordsTable { key: "{source.resource}", source }
        },
        None => rsx! {
            Card {
                CardContent {
                    h2 { "Nothing here" }
                    p { "There is no list called \"{resource}\"." }
                    Link { to: Route::Home {}, "Back to Dashboard" }
                }
            }
        },
    }
}

#[component]
fn RecordsTable(source: &'static RecordSource) -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let page_size = services.config.ui.page_size;

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let mut data = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section(source.title, api.records(source.endpoint)))
                .await
        }
    });

    let loaded = data.read().clone().flatten();

    rsx! {
        div { class: "records-page",
            PageHeader { title: source.title, subtitle: source.subtitle }

            TextField {
                placeholder: "Search...",
                value: search(),
                on_input: move |e: FormEvent| {
                    search.set(e.value());
                    page.set(1);
                },
            }

            match loaded {
                None => rsx! { SkeletonRows { rows: 6 } },
                Some(fetched) => {
                    let rows = filter_rows(&fetched.value, &search(), |row| source.search_text(row));
                    let current = Page::of(&rows, page(), page_size);
                    rsx! {
                        if let Some(message) = fetched.error {
                            Alert { message, on_retry: move |_| data.restart() }
                        }
                        Card {
                            CardContent {
                                DataTable {
                                    DataTableHeader { columns: source.labels() }
                                    DataTableBody {
                                        if current.items.is_empty() {
                                            DataTableEmpty { columns: source.columns.len(), message: "No records found." }
                                        }
                                        for (i, row) in current.items.iter().enumerate() {
                                            DataTableRow { key: "{i}",
                                                for (j, cell) in source.cells(row).into_iter().enumerate() {
                                                    DataTableCell { key: "{j}", "{cell}" }
                                                }
                                            }
                                        }
                                    }
                                }
                                Pagination {
                                    page: current.page,
                                    total_pages: current.total_pages,
                                    total: current.total,
                                    on_change: move |p: usize| page.set(p),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared_types::{Role, ROLE_PROFILES};

    #[test]
    fn every_records_menu_entry_has_a_source() {
        for profile in ROLE_PROFILES.iter() {
            for item in profile.menu {
                if let Some(resource) = item.path.strip_prefix("/records/") {
                    assert!(
                        record_source(resource).is_some(),
                        "{:?} menu item {} has no record source",
                        profile.role,
                        item.path
                    );
                }
            }
        }
    }

    #[test]
    fn resources_are_unique() {
        for (i, a) in RECORD_SOURCES.iter().enumerate() {
            for b in &RECORD_SOURCES[i + 1..] {
                assert_ne!(a.resource, b.resource);
            }
        }
    }

    #[test]
    fn unknown_resource_has_no_source() {
        assert_eq!(record_source("payroll"), None);
    }

    #[test]
    fn cells_follow_column_order_and_fill_gaps() {
        let source = record_source("children").unwrap();
        let row = json!({ "roll_number": "A-12", "name": "Mia Chen", "extra": 1 });
        assert_eq!(source.cells(&row), vec!["Mia Chen", "A-12", "—", "—"]);
    }

    #[test]
    fn search_covers_visible_cells_only() {
        let source = record_source("teachers").unwrap();
        let rows = vec![
            json!({ "name": "R. Okafor", "department": "Physics", "salary": 90000 }),
            json!({ "name": "L. Park", "department": "History" }),
        ];
        let hits = filter_rows(&rows, "physics", |row| source.search_text(row));
        assert_eq!(hits.len(), 1);
        assert!(filter_rows(&rows, "90000", |row| source.search_text(row)).is_empty());
    }

    #[test]
    fn student_menu_resolves_to_student_endpoints() {
        let profile = shared_types::profile_for(Role::Student);
        let endpoints: Vec<_> = profile
            .menu
            .iter()
            .filter_map(|item| item.path.strip_prefix("/records/"))
            .filter_map(record_source)
            .map(|s| s.endpoint)
            .collect();
        assert!(endpoints.iter().all(|e| e.starts_with("/student/")));
        assert_eq!(endpoints.len(), 4);
    }
}
