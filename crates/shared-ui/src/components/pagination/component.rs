use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Previous/Next controls for a 1-based page. Hidden when everything fits
/// on one page.
#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    total: usize,
    on_change: EventHandler<usize>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "cl-pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            span { class: "cl-pagination-info", "Page {page} of {total_pages} ({total} total)" }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: page >= total_pages,
                onclick: move |_| on_change.call((page + 1).min(total_pages)),
                "Next"
            }
        }
    }
}
