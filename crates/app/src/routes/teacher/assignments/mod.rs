mod form_dialog;
mod grading;

use chrono::NaiveDate;
use client::{section, Section};
use dioxus::prelude::*;
use shared_types::{filter_rows, format_number, Assignment, ClassSummary, Page};
use shared_ui::{
    use_toast, Alert, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    ConfirmDialog, DataTable, DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader,
    DataTableRow, PageHeader, Pagination, SkeletonRows, TextField, ToastOptions,
};

use crate::format_helpers::{format_date_human, format_snake_case_title};
use crate::scope::use_view_scope;
use crate::use_services;
use form_dialog::AssignmentFormDialog;
use grading::GradingDialog;

#[derive(Clone, PartialEq, Default)]
struct AssignmentData {
    assignments: Section<Vec<Assignment>>,
    classes: Section<Vec<ClassSummary>>,
}

/// Which dialog is showing.
#[derive(Clone, PartialEq)]
enum Editor {
    Create,
    Edit(Assignment),
    Grade(Assignment),
}

const COLUMNS: [&str; 7] = ["Title", "Class", "Type", "Due", "Marks", "Submissions", ""];

#[component]
pub fn AssignmentsPage() -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let toast = use_toast();
    let page_size = services.config.ui.page_size;

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut editor = use_signal(|| None::<Editor>);
    let mut pending_delete = use_signal(|| None::<Assignment>);

    let api = services.api.clone();
    let mut data = use_resource(move || {
        let api = api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(async {
                    let (assignments, classes) = futures::join!(
                        section("assignments", api.assignments()),
                        section("classes", api.classes()),
                    );
                    AssignmentData {
                        assignments,
                        classes,
                    }
                })
                .await
        }
    });

    let confirm_delete = move |_: ()| {
        let Some(target) = pending_delete.write().take() else {
            return;
        };
        let api = services.api.clone();
        spawn(async move {
            match api.delete_assignment(target.id).await {
                Ok(()) => {
                    toast.success(format!("Deleted \"{}\"", target.title), ToastOptions::new());
                    data.restart();
                }
                Err(err) => toast.error(err.user_message(), ToastOptions::new()),
            }
        });
    };

    let loaded = data.read().clone().flatten();
    let today = chrono::Local::now().date_naive();
    let delete_title = pending_delete
        .read()
        .as_ref()
        .map(|a| a.title.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/routes/teacher/teacher.css") }

        div { class: "teacher-page",
            PageHeader {
                title: "Assignments",
                subtitle: "Create coursework and grade submissions",
                actions: rsx! {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| editor.set(Some(Editor::Create)),
                        "New Assignment"
                    }
                },
            }

            TextField {
                placeholder: "Search by title, class or type...",
                value: search(),
                on_input: move |e: FormEvent| {
                    search.set(e.value());
                    page.set(1);
                },
            }

            match loaded.clone() {
                None => rsx! { SkeletonRows { rows: 6 } },
                Some(fetched) => {
                    let rows = filter_rows(&fetched.assignments.value, &search(), Assignment::search_text);
                    let current = Page::of(&rows, page(), page_size);
                    let searching = !search().trim().is_empty();
                    rsx! {
                        if let Some(message) = fetched.assignments.error {
                            Alert { message, on_retry: move |_| data.restart() }
                        }
                        Card {
                            CardContent {
                                DataTable {
                                    DataTableHeader { columns: COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>() }
                                    DataTableBody {
                                        if current.items.is_empty() {
                                            DataTableEmpty {
                                                columns: COLUMNS.len(),
                                                message: if searching { "No assignments match your search." } else { "No assignments yet." },
                                            }
                                        }
                                        for assignment in current.items.clone() {
                                            AssignmentRow {
                                                key: "{assignment.id}",
                                                assignment,
                                                today,
                                                on_edit: move |a: Assignment| editor.set(Some(Editor::Edit(a))),
                                                on_grade: move |a: Assignment| editor.set(Some(Editor::Grade(a))),
                                                on_delete: move |a: Assignment| pending_delete.set(Some(a)),
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

            match editor() {
                Some(Editor::Create) => rsx! {
                    AssignmentFormDialog {
                        editing: None,
                        classes: loaded.clone().map(|d| d.classes.value).unwrap_or_default(),
                        on_close: move |_| editor.set(None),
                        on_saved: move |_| {
                            editor.set(None);
                            data.restart();
                        },
                    }
                },
                Some(Editor::Edit(assignment)) => rsx! {
                    AssignmentFormDialog {
                        editing: Some(assignment),
                        classes: loaded.clone().map(|d| d.classes.value).unwrap_or_default(),
                        on_close: move |_| editor.set(None),
                        on_saved: move |_| {
                            editor.set(None);
                            data.restart();
                        },
                    }
                },
                Some(Editor::Grade(assignment)) => rsx! {
                    GradingDialog {
                        assignment_id: assignment.id,
                        title: assignment.title.clone(),
                        total_marks: assignment.total_marks,
                        on_close: move |_| {
                            editor.set(None);
                            data.restart();
                        },
                    }
                },
                None => rsx! {},
            }

            ConfirmDialog {
                open: pending_delete.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_delete.set(None);
                    }
                },
                title: "Delete assignment?",
                message: format!("\"{delete_title}\" and its submissions will be removed. This cannot be undone."),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn AssignmentRow(
    assignment: Assignment,
    today: NaiveDate,
    on_edit: EventHandler<Assignment>,
    on_grade: EventHandler<Assignment>,
    on_delete: EventHandler<Assignment>,
) -> Element {
    let overdue = assignment.is_overdue(today);
    let kind = format_snake_case_title(&assignment.assignment_type);
    let due = format_date_human(&assignment.due_date);
    let marks = format_number(assignment.total_marks);
    let (edit, grade, delete) = (assignment.clone(), assignment.clone(), assignment.clone());

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "assignment-title", "{assignment.title}" }
                if assignment.document_url.is_some() {
                    span { class: "assignment-attachment", "Attachment" }
                }
            }
            DataTableCell { "{assignment.class_name}" }
            DataTableCell { "{kind}" }
            DataTableCell {
                "{due}"
                if overdue {
                    Badge { variant: BadgeVariant::Danger, "Past due" }
                }
            }
            DataTableCell { "{marks}" }
            DataTableCell { "{assignment.submissions_count}" }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_grade.call(grade.clone()),
                        "Grade"
                    }
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_edit.call(edit.clone()),
                        "Edit"
                    }
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_delete.call(delete.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
