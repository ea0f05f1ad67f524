use dioxus::prelude::*;

/// Horizontally scrollable table.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "cl-table-wrap",
            table { class: "cl-table", {children} }
        }
    }
}

/// Header row built from column titles.
#[component]
pub fn DataTableHeader(columns: Vec<String>) -> Element {
    rsx! {
        thead {
            tr {
                for column in columns {
                    th { key: "{column}", "{column}" }
                }
            }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Body row; clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = if onclick.is_some() {
        "cl-table-row clickable"
    } else {
        "cl-table-row"
    };
    rsx! {
        tr {
            class,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Single full-width row shown when a list has no entries.
#[component]
pub fn DataTableEmpty(columns: usize, message: String) -> Element {
    rsx! {
        tr { class: "cl-table-empty",
            td { colspan: "{columns}", "{message}" }
        }
    }
}
