use dioxus::prelude::*;
use shared_types::{Assignment, AssignmentForm, ClassSummary, UploadFile, ASSIGNMENT_TYPES};
use shared_ui::{
    use_toast, Alert, Button, ButtonVariant, DialogActions, DialogContent, DialogDescription,
    DialogRoot, DialogTitle, FormSelect, TextField, Textarea, ToastOptions,
};

use crate::format_helpers::{content_type_for, format_file_size};
use crate::use_services;

/// Create/edit form for an assignment. Mounted only while open, so its
/// fields start from `editing` (or blank) every time it is shown.
#[component]
pub fn AssignmentFormDialog(
    editing: Option<Assignment>,
    classes: Vec<ClassSummary>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Assignment>,
) -> Element {
    let services = use_services();
    let toast = use_toast();

    let editing_id = editing.as_ref().map(|a| a.id);
    let existing_document = editing.as_ref().and_then(|a| a.document_url.clone());
    let mut form = use_signal(move || {
        editing
            .as_ref()
            .map(AssignmentForm::from_assignment)
            .unwrap_or_else(|| AssignmentForm {
                assignment_type: "homework".to_string(),
                ..AssignmentForm::default()
            })
    });
    let mut document = use_signal(|| None::<UploadFile>);
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        if let Some(f) = files.first() {
            let name = f.name();
            let name_for_log = name.clone();
            let content_type = f
                .content_type()
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| content_type_for(&name));
            match f.read_bytes().await {
                Ok(bytes) => document.set(Some(UploadFile {
                    file_name: name,
                    content_type,
                    bytes: bytes.to_vec(),
                })),
                Err(_) => {
                    tracing::warn!(file = %name_for_log, "could not read the picked file");
                    error_msg.set(Some("Failed to read file.".to_string()));
                }
            }
        }
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form.read().clone();
        if !current.is_submittable() || saving() {
            return;
        }
        let upload = document.read().clone();
        let api = services.api.clone();
        spawn(async move {
            saving.set(true);
            error_msg.set(None);
            let result = match editing_id {
                Some(id) => api.update_assignment(id, &current, upload).await,
                None => api.create_assignment(&current, upload).await,
            };
            match result {
                Ok(saved) => {
                    let verb = if editing_id.is_some() { "updated" } else { "created" };
                    toast.success(format!("Assignment {verb}"), ToastOptions::new());
                    on_saved.call(saved);
                }
                Err(err) => error_msg.set(Some(err.user_message())),
            }
            saving.set(false);
        });
    };

    let values = form.read().clone();
    let submittable = values.is_submittable() && !saving();
    let title = if editing_id.is_some() { "Edit Assignment" } else { "New Assignment" };

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
                DialogDescription { "Title, class, due date and total marks are required." }

                if let Some(message) = error_msg() {
                    Alert { message }
                }

                form { class: "assignment-form", onsubmit: handle_save,
                    TextField {
                        label: "Title",
                        required: true,
                        value: values.title.clone(),
                        on_input: move |e: FormEvent| form.write().title = e.value(),
                    }
                    Textarea {
                        label: "Description",
                        rows: 3,
                        value: values.description.clone(),
                        on_input: move |e: FormEvent| form.write().description = e.value(),
                    }
                    div { class: "form-row",
                        FormSelect {
                            label: "Class",
                            placeholder: "Select a class",
                            required: true,
                            value: values.class_id.clone(),
                            onchange: move |e: FormEvent| form.write().class_id = e.value(),
                            for class in classes.iter() {
                                option { key: "{class.id}", value: "{class.id}", {class.label()} }
                            }
                        }
                        FormSelect {
                            label: "Type",
                            value: values.assignment_type.clone(),
                            onchange: move |e: FormEvent| form.write().assignment_type = e.value(),
                            for (key, label) in ASSIGNMENT_TYPES.iter() {
                                option { key: "{key}", value: "{key}", "{label}" }
                            }
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Due date",
                            input_type: "date",
                            required: true,
                            value: values.due_date.clone(),
                            on_input: move |e: FormEvent| form.write().due_date = e.value(),
                        }
                        TextField {
                            label: "Total marks",
                            input_type: "number",
                            required: true,
                            value: values.total_marks.clone(),
                            on_input: move |e: FormEvent| form.write().total_marks = e.value(),
                        }
                        TextField {
                            label: "Weightage (%)",
                            input_type: "number",
                            value: values.weightage.clone(),
                            on_input: move |e: FormEvent| form.write().weightage = e.value(),
                        }
                    }

                    div { class: "form-upload",
                        label { class: "form-upload-label", "Document" }
                        input {
                            r#type: "file",
                            disabled: saving(),
                            onchange: handle_file,
                        }
                        if let Some(file) = &*document.read() {
                            span { class: "form-upload-name",
                                "{file.file_name} ({format_file_size(file.bytes.len())})"
                            }
                        } else if let Some(url) = existing_document.clone() {
                            a { class: "form-upload-name", href: "{url}", target: "_blank", "Current document" }
                        }
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
                            disabled: !submittable,
                            loading: saving(),
                            if editing_id.is_some() { "Save changes" } else { "Create" }
                        }
                    }
                }
            }
        }
    }
}
