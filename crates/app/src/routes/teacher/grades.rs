use client::{section, Section};
use dioxus::prelude::*;
use shared_types::{
    format_number, ClassDetail, ResultRecord, ResultRequest, StudentSummary, EXAM_TYPES,
};
use shared_ui::{
    use_toast, Alert, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    ConfirmDialog, DataTable, DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader,
    DataTableRow, DialogActions, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    FormSelect, PageHeader, SkeletonRows, TextField, ToastOptions,
};

use super::ClassPicker;
use crate::format_helpers::{format_percent, format_snake_case_title};
use crate::scope::use_view_scope;
use crate::use_services;

const COLUMNS: [&str; 7] = ["Student", "Subject", "Exam", "Marks", "Percent", "Grade", ""];

/// Text-box state of the result editor.
#[derive(Debug, Clone, PartialEq, Default)]
struct ResultForm {
    student_id: String,
    subject: String,
    exam_type: String,
    marks_obtained: String,
    total_marks: String,
    remarks: String,
}

impl ResultForm {
    fn blank(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            exam_type: "unit_test".to_string(),
            total_marks: "100".to_string(),
            ..Self::default()
        }
    }

    fn from_record(record: &ResultRecord) -> Self {
        Self {
            student_id: record.student_id.to_string(),
            subject: record.subject.clone(),
            exam_type: record.exam_type.clone(),
            marks_obtained: format_number(record.marks_obtained),
            total_marks: format_number(record.total_marks),
            remarks: record.remarks.clone().unwrap_or_default(),
        }
    }

    fn is_submittable(&self) -> bool {
        [
            &self.student_id,
            &self.subject,
            &self.exam_type,
            &self.marks_obtained,
            &self.total_marks,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }

    fn to_request(&self) -> Result<ResultRequest, String> {
        let student_id = self
            .student_id
            .parse::<i64>()
            .map_err(|_| "Select a student.".to_string())?;
        let total_marks = self
            .total_marks
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|t| *t > 0.0)
            .ok_or_else(|| "Total marks must be a positive number.".to_string())?;
        let marks_obtained = self
            .marks_obtained
            .trim()
            .parse::<f64>()
            .map_err(|_| "Marks must be a number.".to_string())?;
        if !(0.0..=total_marks).contains(&marks_obtained) {
            return Err(format!(
                "Marks must be between 0 and {}.",
                format_number(total_marks)
            ));
        }
        let remarks = self.remarks.trim();
        Ok(ResultRequest {
            student_id,
            subject: self.subject.trim().to_string(),
            exam_type: self.exam_type.clone(),
            marks_obtained,
            total_marks,
            remarks: (!remarks.is_empty()).then(|| remarks.to_string()),
        })
    }
}

#[derive(Clone, PartialEq)]
enum Editor {
    Create,
    Edit(ResultRecord),
}

#[derive(Clone, PartialEq, Default)]
struct GradesData {
    results: Section<Vec<ResultRecord>>,
    class: Section<ClassDetail>,
}

#[component]
pub fn GradesPage() -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut selected = use_signal(|| None::<i64>);

    let mut classes = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move { scope.run(section("classes", api.classes())).await }
    });

    use_effect(move || {
        if selected.peek().is_some() {
            return;
        }
        if let Some(Some(loaded)) = &*classes.read() {
            if let Some(first) = loaded.value.first() {
                selected.set(Some(first.id));
            }
        }
    });

    let loaded = classes.read().clone().flatten();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teacher.css") }

        div { class: "teacher-page",
            PageHeader { title: "Grades", subtitle: "Record exam results for your classes" }

            match loaded {
                None => rsx! { SkeletonRows { rows: 4 } },
                Some(fetched) => rsx! {
                    if let Some(message) = fetched.error {
                        Alert { message, on_retry: move |_| classes.restart() }
                    }
                    div { class: "toolbar",
                        ClassPicker {
                            classes: fetched.value.clone(),
                            selected: selected(),
                            on_change: move |id: Option<i64>| selected.set(id),
                        }
                    }
                    if let Some(class_id) = selected() {
                        ClassResults { key: "{class_id}", class_id }
                    } else if fetched.value.is_empty() {
                        p { class: "teacher-empty", "No classes assigned yet." }
                    }
                },
            }
        }
    }
}

#[component]
fn ClassResults(class_id: i64) -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let toast = use_toast();

    let mut editor = use_signal(|| None::<Editor>);
    let mut pending_delete = use_signal(|| None::<ResultRecord>);

    let mut data = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(async {
                    let (results, class) = futures::join!(
                        section("results", api.results(class_id)),
                        section("class roster", api.class_detail(class_id)),
                    );
                    GradesData { results, class }
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
            match api.delete_result(class_id, target.id).await {
                Ok(()) => {
                    toast.success("Result deleted".to_string(), ToastOptions::new());
                    data.restart();
                }
                Err(err) => toast.error(err.user_message(), ToastOptions::new()),
            }
        });
    };

    let loaded = data.read().clone().flatten();
    let class = loaded.clone().map(|d| d.class.value).unwrap_or_default();
    let delete_name = pending_delete
        .read()
        .as_ref()
        .map(|r| r.student_name.clone())
        .unwrap_or_default();

    rsx! {
        match loaded {
            None => rsx! { SkeletonRows { rows: 6 } },
            Some(fetched) => {
                let error = fetched.results.error.or(fetched.class.error);
                rsx! {
                    if let Some(message) = error {
                        Alert { message, on_retry: move |_| data.restart() }
                    }
                    Card {
                        CardContent {
                            div { class: "toolbar",
                                div { class: "toolbar-spacer" }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: fetched.class.value.students.is_empty(),
                                    onclick: move |_| editor.set(Some(Editor::Create)),
                                    "Add result"
                                }
                            }
                            DataTable {
                                DataTableHeader { columns: COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>() }
                                DataTableBody {
                                    if fetched.results.value.is_empty() {
                                        DataTableEmpty { columns: COLUMNS.len(), message: "No results recorded for this class." }
                                    }
                                    for record in fetched.results.value {
                                        ResultRow {
                                            key: "{record.id}",
                                            record,
                                            on_edit: move |r: ResultRecord| editor.set(Some(Editor::Edit(r))),
                                            on_delete: move |r: ResultRecord| pending_delete.set(Some(r)),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        match editor() {
            Some(Editor::Create) => rsx! {
                ResultFormDialog {
                    class_id,
                    editing: None,
                    students: class.students.clone(),
                    subject: class.subject.clone(),
                    on_close: move |_| editor.set(None),
                    on_saved: move |_| {
                        editor.set(None);
                        data.restart();
                    },
                }
            },
            Some(Editor::Edit(record)) => rsx! {
                ResultFormDialog {
                    class_id,
                    editing: Some(record),
                    students: class.students.clone(),
                    subject: class.subject.clone(),
                    on_close: move |_| editor.set(None),
                    on_saved: move |_| {
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
            title: "Delete result?",
            message: format!("The result for {delete_name} will be removed."),
            on_confirm: confirm_delete,
        }
    }
}

#[component]
fn ResultRow(
    record: ResultRecord,
    on_edit: EventHandler<ResultRecord>,
    on_delete: EventHandler<ResultRecord>,
) -> Element {
    let percent = record.percentage();
    let grade = record.letter_grade();
    let exam = format_snake_case_title(&record.exam_type);
    let marks = format!(
        "{} / {}",
        format_number(record.marks_obtained),
        format_number(record.total_marks)
    );
    let variant = if percent >= 50.0 {
        BadgeVariant::Success
    } else {
        BadgeVariant::Danger
    };
    let (edit, delete) = (record.clone(), record.clone());

    rsx! {
        DataTableRow {
            DataTableCell { "{record.student_name}" }
            DataTableCell { "{record.subject}" }
            DataTableCell { "{exam}" }
            DataTableCell { "{marks}" }
            DataTableCell { {format_percent(percent)} }
            DataTableCell {
                Badge { variant, "{grade}" }
            }
            DataTableCell {
                div { class: "row-actions",
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

#[component]
fn ResultFormDialog(
    class_id: i64,
    editing: Option<ResultRecord>,
    students: Vec<StudentSummary>,
    subject: String,
    on_close: EventHandler<()>,
    on_saved: EventHandler<ResultRecord>,
) -> Element {
    let services = use_services();
    let toast = use_toast();

    let editing_id = editing.as_ref().map(|r| r.id);
    let mut form = use_signal(move || {
        editing
            .as_ref()
            .map(ResultForm::from_record)
            .unwrap_or_else(|| ResultForm::blank(&subject))
    });
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let request = match form.read().to_request() {
            Ok(request) => request,
            Err(message) => {
                error_msg.set(Some(message));
                return;
            }
        };
        let api = services.api.clone();
        spawn(async move {
            saving.set(true);
            error_msg.set(None);
            let result = match editing_id {
                Some(id) => api.update_result(class_id, id, &request).await,
                None => api.create_result(class_id, &request).await,
            };
            match result {
                Ok(saved) => {
                    toast.success("Result saved".to_string(), ToastOptions::new());
                    on_saved.call(saved);
                }
                Err(err) => error_msg.set(Some(err.user_message())),
            }
            saving.set(false);
        });
    };

    let values = form.read().clone();
    let title = if editing_id.is_some() { "Edit Result" } else { "Add Result" };

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "{title}" }
                DialogDescription { "The grade is worked out from the percentage." }

                if let Some(message) = error_msg() {
                    Alert { message }
                }

                form { class: "assignment-form", onsubmit: handle_save,
                    FormSelect {
                        label: "Student",
                        placeholder: "Select a student",
                        required: true,
                        disabled: editing_id.is_some(),
                        value: values.student_id.clone(),
                        onchange: move |e: FormEvent| form.write().student_id = e.value(),
                        for student in students.iter() {
                            option { key: "{student.id}", value: "{student.id}",
                                "{student.roll_number} {student.full_name()}"
                            }
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Subject",
                            required: true,
                            value: values.subject.clone(),
                            on_input: move |e: FormEvent| form.write().subject = e.value(),
                        }
                        FormSelect {
                            label: "Exam",
                            value: values.exam_type.clone(),
                            onchange: move |e: FormEvent| form.write().exam_type = e.value(),
                            for (key, label) in EXAM_TYPES.iter() {
                                option { key: "{key}", value: "{key}", "{label}" }
                            }
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Marks obtained",
                            input_type: "number",
                            required: true,
                            value: values.marks_obtained.clone(),
                            on_input: move |e: FormEvent| form.write().marks_obtained = e.value(),
                        }
                        TextField {
                            label: "Total marks",
                            input_type: "number",
                            required: true,
                            value: values.total_marks.clone(),
                            on_input: move |e: FormEvent| form.write().total_marks = e.value(),
                        }
                    }
                    TextField {
                        label: "Remarks",
                        value: values.remarks.clone(),
                        on_input: move |e: FormEvent| form.write().remarks = e.value(),
                    }

                    DialogActions {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: !values.is_submittable() || saving(),
                            loading: saving(),
                            "Save"
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

    fn filled() -> ResultForm {
        ResultForm {
            student_id: "7".into(),
            marks_obtained: "42".into(),
            ..ResultForm::blank("Physics")
        }
    }

    #[test]
    fn blank_form_needs_a_student_and_marks() {
        let form = ResultForm::blank("Physics");
        assert!(!form.is_submittable());
        assert!(filled().is_submittable());
    }

    #[test]
    fn request_carries_parsed_numbers() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.student_id, 7);
        assert_eq!(request.subject, "Physics");
        assert_eq!(request.exam_type, "unit_test");
        assert_eq!(request.marks_obtained, 42.0);
        assert_eq!(request.total_marks, 100.0);
        assert_eq!(request.remarks, None);
    }

    #[test]
    fn marks_above_total_are_rejected() {
        let form = ResultForm {
            marks_obtained: "120".into(),
            ..filled()
        };
        assert_eq!(
            form.to_request(),
            Err("Marks must be between 0 and 100.".to_string())
        );
    }

    #[test]
    fn zero_total_is_rejected() {
        let form = ResultForm {
            total_marks: "0".into(),
            ..filled()
        };
        assert!(form.to_request().is_err());
    }

    #[test]
    fn editing_round_trips_existing_values() {
        let record = ResultRecord {
            id: 3,
            student_id: 9,
            student_name: "Ana Ruiz".into(),
            subject: "Maths".into(),
            exam_type: "final".into(),
            marks_obtained: 88.5,
            total_marks: 100.0,
            grade: None,
            remarks: Some("Strong".into()),
        };
        let form = ResultForm::from_record(&record);
        assert_eq!(form.marks_obtained, "88.5");
        assert_eq!(form.to_request().unwrap().remarks.as_deref(), Some("Strong"));
    }
}
