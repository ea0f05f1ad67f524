use dioxus::prelude::*;

/// Labelled single-line input. `error` renders below the field and marks
/// it invalid.
#[component]
pub fn TextField(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] name: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "cl-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "cl-field",
            if !label.is_empty() {
                span { class: "cl-field-label",
                    "{label}"
                    if required {
                        span { class: "cl-field-required", " *" }
                    }
                }
            }
            input {
                r#type: "{input_type}",
                name: name,
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                span { class: "cl-field-error", "{message}" }
            }
        }
    }
}
