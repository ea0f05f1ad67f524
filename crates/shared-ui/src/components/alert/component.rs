use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertTone {
    #[default]
    Error,
    Warning,
    Success,
    Info,
}

impl AlertTone {
    fn class(&self) -> &'static str {
        match self {
            AlertTone::Error => "error",
            AlertTone::Warning => "warning",
            AlertTone::Success => "success",
            AlertTone::Info => "info",
        }
    }
}

/// Inline message box. Pages use it for load and save failures.
///
/// With `on_retry` set, a Retry button is shown; with `on_dismiss`, a close
/// button.
#[component]
pub fn Alert(
    #[props(default)] tone: AlertTone,
    #[props(default)] title: String,
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    let role = match tone {
        AlertTone::Error | AlertTone::Warning => "alert",
        AlertTone::Success | AlertTone::Info => "status",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cl-alert", "data-tone": tone.class(), role,
            div { class: "cl-alert-body",
                if !title.is_empty() {
                    strong { class: "cl-alert-title", "{title}" }
                }
                span { class: "cl-alert-message", "{message}" }
            }
            div { class: "cl-alert-actions",
                if let Some(retry) = on_retry {
                    button {
                        class: "cl-alert-button",
                        r#type: "button",
                        onclick: move |_| retry.call(()),
                        "Retry"
                    }
                }
                if let Some(dismiss) = on_dismiss {
                    button {
                        class: "cl-alert-close",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| dismiss.call(()),
                        "×"
                    }
                }
            }
        }
    }
}
