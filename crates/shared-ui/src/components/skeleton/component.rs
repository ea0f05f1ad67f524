use dioxus::prelude::*;

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(
    #[props(default = "1rem".to_string())] height: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "cl-skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            style: "height: {height};",
            "aria-hidden": "true",
            ..merged,
        }
    }
}

/// A stack of `rows` skeleton lines.
#[component]
pub fn SkeletonRows(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "cl-skeleton-rows",
            for i in 0..rows {
                Skeleton { key: "{i}", height: "1.25rem" }
            }
        }
    }
}
