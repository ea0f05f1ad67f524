use dioxus::prelude::*;

/// Bordered surface using the palette's card tokens.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "cl-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row. `action` renders at the right edge.
#[component]
pub fn CardHeader(
    #[props(default)] title: String,
    #[props(default)] description: String,
    #[props(default)] action: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "cl-card-header",
            div { class: "cl-card-heading",
                if !title.is_empty() {
                    h3 { class: "cl-card-title", "{title}" }
                }
                if !description.is_empty() {
                    p { class: "cl-card-description", "{description}" }
                }
                {children}
            }
            if let Some(action) = action {
                div { class: "cl-card-action", {action} }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "cl-card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "cl-card-footer", {children} }
    }
}
