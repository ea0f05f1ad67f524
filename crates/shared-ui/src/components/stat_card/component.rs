use dioxus::prelude::*;

/// Which palette gradient a stat tile uses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Primary,
    Success,
    Warning,
    Info,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Primary => "primary",
            StatTone::Success => "success",
            StatTone::Warning => "warning",
            StatTone::Info => "info",
        }
    }
}

/// Dashboard metric tile. `loading` swaps the value for a placeholder bar.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
    #[props(default)] hint: String,
    #[props(default = false)] loading: bool,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cl-stat", "data-tone": tone.class(),
            div { class: "cl-stat-text",
                span { class: "cl-stat-label", "{label}" }
                if loading {
                    span { class: "cl-stat-value cl-stat-loading", "aria-busy": "true" }
                } else {
                    span { class: "cl-stat-value", "{value}" }
                }
                if !hint.is_empty() {
                    span { class: "cl-stat-hint", "{hint}" }
                }
            }
            if let Some(icon) = icon {
                div { class: "cl-stat-icon", {icon} }
            }
        }
    }
}

/// Responsive grid for [`StatCard`]s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "cl-stat-grid", {children} }
    }
}
