use dioxus::prelude::*;

/// Native `<select>` styled like [`crate::TextField`].
///
/// Children are `option { value: "...", "Label" }` elements. An empty
/// `placeholder` omits the leading blank option.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "cl-select-field",
            if !label.is_empty() {
                span { class: "cl-select-label", "{label}" }
            }
            select {
                class: "cl-select",
                value: value,
                required: required,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", "{placeholder}" }
                }
                {children}
            }
        }
    }
}
