use client::section;
use dioxus::prelude::*;
use shared_types::{format_number, GradeSubmissionRequest, Submission};
use shared_ui::{
    use_toast, Alert, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable,
    DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader, DataTableRow, DialogActions,
    DialogContent, DialogDescription, DialogRoot, DialogTitle, SkeletonRows, TextField,
    ToastOptions,
};

use crate::format_helpers::format_datetime_human;
use crate::scope::use_view_scope;
use crate::use_services;

/// Submissions of one assignment with a marks/feedback editor per student.
#[component]
pub fn GradingDialog(
    assignment_id: i64,
    title: String,
    total_marks: f64,
    on_close: EventHandler<()>,
) -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut data = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section("submissions", api.assignment(assignment_id)))
                .await
        }
    });

    let loaded = data.read().clone().flatten();

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Grade: {title}" }
                DialogDescription { "Marks out of {format_number(total_marks)}." }

                match loaded {
                    None => rsx! { SkeletonRows { rows: 4 } },
                    Some(fetched) => rsx! {
                        if let Some(message) = fetched.error {
                            Alert { message, on_retry: move |_| data.restart() }
                        }
                        DataTable {
                            DataTableHeader {
                                columns: vec![
                                    "Student".to_string(),
                                    "Submitted".to_string(),
                                    "Marks".to_string(),
                                    "Feedback".to_string(),
                                    String::new(),
                                ],
                            }
                            DataTableBody {
                                if fetched.value.submissions.is_empty() {
                                    DataTableEmpty { columns: 5, message: "No submissions yet." }
                                }
                                for submission in fetched.value.submissions {
                                    SubmissionRow {
                                        key: "{submission.student_id}",
                                        assignment_id,
                                        total_marks,
                                        submission,
                                    }
                                }
                            }
                        }
                    },
                }

                DialogActions {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

/// Parse and bound-check a marks entry.
fn parse_marks(raw: &str, total_marks: f64) -> Result<f64, String> {
    let marks: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Enter a number".to_string())?;
    if marks < 0.0 || (total_marks > 0.0 && marks > total_marks) {
        return Err(format!("Between 0 and {}", format_number(total_marks)));
    }
    Ok(marks)
}

#[component]
fn SubmissionRow(assignment_id: i64, total_marks: f64, submission: Submission) -> Element {
    let services = use_services();
    let toast = use_toast();

    let student_id = submission.student_id;
    let mut marks = use_signal({
        let initial = submission.marks_obtained.map(format_number).unwrap_or_default();
        move || initial
    });
    let mut feedback = use_signal({
        let initial = submission.feedback.clone().unwrap_or_default();
        move || initial
    });
    let mut graded = use_signal(|| submission.is_graded());
    let mut saving = use_signal(|| false);
    let mut marks_error = use_signal(|| None::<String>);

    let save = move |_: MouseEvent| {
        let parsed = match parse_marks(&marks(), total_marks) {
            Ok(value) => value,
            Err(message) => {
                marks_error.set(Some(message));
                return;
            }
        };
        marks_error.set(None);
        let note = feedback().trim().to_string();
        let request = GradeSubmissionRequest {
            marks_obtained: parsed,
            feedback: (!note.is_empty()).then_some(note),
        };
        let api = services.api.clone();
        spawn(async move {
            saving.set(true);
            match api.grade_submission(assignment_id, student_id, &request).await {
                Ok(()) => {
                    graded.set(true);
                    toast.success("Grade saved".to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(err.user_message(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let submitted = submission
        .submitted_at
        .as_deref()
        .map(format_datetime_human)
        .unwrap_or_else(|| "Not submitted".to_string());

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "submission-student", "{submission.student_name}" }
                if let Some(url) = submission.document_url.clone() {
                    a { class: "submission-link", href: "{url}", target: "_blank", "View work" }
                }
            }
            DataTableCell {
                "{submitted}"
                if graded() {
                    Badge { variant: BadgeVariant::Success, "Graded" }
                }
            }
            DataTableCell {
                TextField {
                    input_type: "number",
                    value: marks(),
                    error: marks_error(),
                    on_input: move |e: FormEvent| marks.set(e.value()),
                }
            }
            DataTableCell {
                TextField {
                    placeholder: "Optional feedback",
                    value: feedback(),
                    on_input: move |e: FormEvent| feedback.set(e.value()),
                }
            }
            DataTableCell {
                Button {
                    size: ButtonSize::Small,
                    variant: ButtonVariant::Primary,
                    disabled: marks().trim().is_empty() || saving(),
                    loading: saving(),
                    onclick: save,
                    "Save"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn marks_must_be_numeric_and_in_range() {
        assert_eq!(parse_marks(" 42 ", 50.0), Ok(42.0));
        assert_eq!(parse_marks("abc", 50.0), Err("Enter a number".to_string()));
        assert_eq!(parse_marks("51", 50.0), Err("Between 0 and 50".to_string()));
        assert_eq!(parse_marks("-1", 50.0), Err("Between 0 and 50".to_string()));
    }

    #[test]
    fn unknown_total_only_rejects_negatives() {
        assert_eq!(parse_marks("120", 0.0), Ok(120.0));
    }
}
