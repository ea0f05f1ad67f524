use client::section;
use dioxus::prelude::*;
use shared_types::TeacherProfile;
use shared_ui::{
    use_toast, Alert, Button, ButtonVariant, Card, CardContent, CardHeader, SkeletonRows,
    TextField, ToastOptions,
};

use crate::auth::use_session;
use crate::format_helpers::format_date_human;
use crate::scope::use_view_scope;
use crate::use_services;

/// Teacher profile: read view with an inline edit mode.
#[component]
pub fn DetailsSection() -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut data = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move { scope.run(section("profile", api.teacher_profile())).await }
    });

    let loaded = data.read().clone().flatten();

    rsx! {
        match loaded {
            None => rsx! { SkeletonRows { rows: 5 } },
            Some(fetched) => rsx! {
                if let Some(message) = fetched.error {
                    Alert { message, on_retry: move |_| data.restart() }
                }
                ProfileCard { key: "{fetched.value.id}", profile: fetched.value }
            },
        }
    }
}

#[component]
fn ProfileCard(profile: TeacherProfile) -> Element {
    let services = use_services();
    let session = use_session();
    let toast = use_toast();

    let mut current = use_signal({
        let profile = profile.clone();
        move || profile
    });
    let mut draft = use_signal(move || profile);
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let body = draft.read().clone();
        let api = services.api.clone();
        let store = session.store.clone();
        spawn(async move {
            saving.set(true);
            error_msg.set(None);
            match api.update_teacher_profile(&body).await {
                Ok(saved) => {
                    // Keep the navigation bar name in step with the profile.
                    if let Some(mut user) = store.user() {
                        user.first_name = saved.first_name.clone();
                        user.last_name = saved.last_name.clone();
                        store.set_user(user);
                    }
                    current.set(saved.clone());
                    draft.set(saved);
                    editing.set(false);
                    toast.success("Profile updated".to_string(), ToastOptions::new());
                }
                Err(err) => error_msg.set(Some(err.user_message())),
            }
            saving.set(false);
        });
    };

    let shown = current.read().clone();
    let values = draft.read().clone();
    let joined = format_date_human(&shown.joining_date);
    let facts = [
        ("Email", shown.email.clone()),
        ("Phone", shown.phone.clone()),
        ("Department", shown.department.clone()),
        ("Qualification", shown.qualification.clone()),
        ("Joined", joined),
    ];

    rsx! {
        Card {
            CardHeader {
                title: "Details",
                action: rsx! {
                    if !editing() {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(true),
                            "Edit"
                        }
                    }
                },
            }
            CardContent {
                if editing() {
                    if let Some(message) = error_msg() {
                        Alert { message }
                    }
                    form { class: "profile-form", onsubmit: handle_save,
                        div { class: "form-row",
                            TextField {
                                label: "First name",
                                required: true,
                                value: values.first_name.clone(),
                                on_input: move |e: FormEvent| draft.write().first_name = e.value(),
                            }
                            TextField {
                                label: "Last name",
                                value: values.last_name.clone(),
                                on_input: move |e: FormEvent| draft.write().last_name = e.value(),
                            }
                        }
                        div { class: "form-row",
                            TextField {
                                label: "Phone",
                                input_type: "tel",
                                value: values.phone.clone(),
                                on_input: move |e: FormEvent| draft.write().phone = e.value(),
                            }
                            TextField {
                                label: "Qualification",
                                value: values.qualification.clone(),
                                on_input: move |e: FormEvent| draft.write().qualification = e.value(),
                            }
                        }
                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    draft.set(current.read().clone());
                                    error_msg.set(None);
                                    editing.set(false);
                                },
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                button_type: "submit",
                                disabled: values.first_name.trim().is_empty() || saving(),
                                loading: saving(),
                                "Save"
                            }
                        }
                    }
                } else {
                    dl { class: "profile-facts",
                        for (label, value) in facts {
                            div { key: "{label}", class: "profile-fact",
                                dt { "{label}" }
                                dd { if value.trim().is_empty() { "—" } else { "{value}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
