use dioxus::prelude::*;
use shared_ui::{
    get_available_themes, use_theme, use_toast, Card, CardContent, CardHeader, FormSelect,
    ThemeContext, ThemeDescriptor, ToastOptions, Toasts,
};

/// Switch presets and confirm with a toast. Re-selecting the active preset
/// is silent.
fn apply_theme(theme: &ThemeContext, toast: Toasts, key: &str) {
    if key == theme.current().as_str() {
        return;
    }
    if theme.change_theme(key) {
        let name = theme.current().display_name();
        toast.success(format!("Theme set to {name}"), ToastOptions::new());
    }
}

/// Theme picker: a select plus a clickable swatch per preset.
#[component]
pub fn AppearanceSection() -> Element {
    let theme = use_theme();
    let toast = use_toast();
    let current = theme.current();

    rsx! {
        Card {
            CardHeader {
                title: "Appearance",
                description: "The theme is saved on this device and applied on every page.",
            }
            CardContent {
                FormSelect {
                    label: "Theme",
                    value: current.as_str().to_string(),
                    onchange: move |e: FormEvent| apply_theme(&theme, toast, &e.value()),
                    for descriptor in get_available_themes() {
                        option { key: "{descriptor.key.as_str()}", value: "{descriptor.key.as_str()}", "{descriptor.name}" }
                    }
                }
                div { class: "theme-grid",
                    for descriptor in get_available_themes().iter().copied() {
                        ThemeSwatch {
                            key: "{descriptor.key.as_str()}",
                            descriptor,
                            selected: descriptor.key == current,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeSwatch(descriptor: ThemeDescriptor, selected: bool) -> Element {
    let theme = use_theme();
    let toast = use_toast();
    let palette = descriptor.key.palette();
    let key = descriptor.key.as_str();

    rsx! {
        button {
            class: if selected { "theme-swatch selected" } else { "theme-swatch" },
            r#type: "button",
            "aria-pressed": selected,
            onclick: move |_| apply_theme(&theme, toast, key),
            span { class: "theme-swatch-preview", style: "background: {palette.header_gradient};",
                span { class: "theme-swatch-dot", style: "background: {palette.primary};" }
                span { class: "theme-swatch-dot", style: "background: {palette.card_background};" }
            }
            span { class: "theme-swatch-name", "{descriptor.name}" }
        }
    }
}
