use dioxus::prelude::*;
use shared_types::{ChangePasswordRequest, MIN_PASSWORD_LEN};
use shared_ui::{
    use_toast, Alert, Button, ButtonVariant, Card, CardContent, CardHeader, TextField,
    ToastOptions,
};

use crate::use_services;

/// Change-password form. Length, match and reuse are checked locally
/// before anything is sent.
#[component]
pub fn SecuritySection() -> Element {
    let services = use_services();
    let toast = use_toast();

    let mut form = use_signal(ChangePasswordRequest::default);
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = form.read().clone();
        if let Err(message) = request.validate() {
            error_msg.set(Some(message));
            return;
        }
        let api = services.api.clone();
        spawn(async move {
            saving.set(true);
            error_msg.set(None);
            match api.change_password(&request).await {
                Ok(resp) => {
                    let message = if resp.message.is_empty() {
                        "Password changed".to_string()
                    } else {
                        resp.message
                    };
                    toast.success(message, ToastOptions::new());
                    form.set(ChangePasswordRequest::default());
                }
                Err(err) => error_msg.set(Some(err.user_message())),
            }
            saving.set(false);
        });
    };

    let values = form.read().clone();
    let hint = format!("At least {MIN_PASSWORD_LEN} characters");

    rsx! {
        Card {
            CardHeader {
                title: "Change password",
                description: "You'll need your current password to set a new one.",
            }
            CardContent {
                if let Some(message) = error_msg() {
                    Alert { message }
                }
                form { class: "profile-form", onsubmit: handle_submit,
                    TextField {
                        label: "Current password",
                        input_type: "password",
                        value: values.current_password.clone(),
                        on_input: move |e: FormEvent| form.write().current_password = e.value(),
                    }
                    TextField {
                        label: "New password",
                        input_type: "password",
                        placeholder: hint,
                        value: values.new_password.clone(),
                        on_input: move |e: FormEvent| form.write().new_password = e.value(),
                    }
                    TextField {
                        label: "Confirm new password",
                        input_type: "password",
                        value: values.confirm_password.clone(),
                        on_input: move |e: FormEvent| form.write().confirm_password = e.value(),
                    }
                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: !values.is_submittable() || saving(),
                            loading: saving(),
                            "Change password"
                        }
                    }
                }
            }
        }
    }
}
