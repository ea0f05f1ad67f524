use crate::auth::use_session;
use crate::routes::landing_route;
use crate::use_services;
use client::GateState;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Alert, Button, ButtonVariant, Card, CardContent, CardHeader, TextField};

/// Email/password sign-in. Submitting is disabled until both fields hold
/// something; a signed-in visitor is sent straight to their dashboard.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(|| (Option::<String>::None, Option::<String>::None));
    let mut loading = use_signal(|| false);

    if let GateState::Authenticated { user: Some(user) } = &*session.gate.read() {
        navigator().replace(landing_route(Some(&user.role)));
    }

    let request = LoginRequest {
        email: email(),
        password: password(),
    };
    let submittable = request.is_submittable() && !loading();

    let store = session.store.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        if !credentials.is_submittable() {
            return;
        }
        let api = services.api.clone();
        let store = store.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set((None, None));

            match api.login(&credentials).await {
                Ok(response) => {
                    let target = landing_route(Some(&response.user.role));
                    store.login(&response.token, response.user);
                    navigator().replace(target);
                }
                Err(err) => {
                    let email_err = err.field_error("email").map(str::to_string);
                    let password_err = err.field_error("password").map(str::to_string);
                    if email_err.is_none() && password_err.is_none() {
                        error_msg.set(Some(err.user_message()));
                    }
                    field_errors.set((email_err, password_err));
                }
            }
            loading.set(false);
        });
    };

    let (email_err, password_err) = field_errors();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                span { class: "auth-brand-mark", "CL" }
                h1 { class: "auth-brand-name", "CampusLink" }
                p { class: "auth-brand-tagline", "One place for your whole campus." }
            }

            Card { class: "auth-card",
                CardHeader {
                    title: "Sign In",
                    description: "Enter your credentials to access your account",
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { message: err }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        TextField {
                            label: "Email",
                            input_type: "email",
                            name: "email",
                            placeholder: "you@college.edu",
                            required: true,
                            value: email(),
                            error: email_err,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        TextField {
                            label: "Password",
                            input_type: "password",
                            name: "password",
                            required: true,
                            value: password(),
                            error: password_err,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: !submittable,
                            loading: loading(),
                            class: "auth-submit",
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
