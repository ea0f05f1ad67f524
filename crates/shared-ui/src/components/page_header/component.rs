use dioxus::prelude::*;

/// Gradient banner at the top of a page. Actions render on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "cl-page-header",
            div {
                h1 { class: "cl-page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "cl-page-subtitle", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "cl-page-actions", {actions} }
            }
        }
    }
}
