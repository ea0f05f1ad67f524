//! The teacher's workspace: classes, coursework, attendance, grades and
//! account pages.

pub mod assignments;
pub mod attendance;
pub mod class_detail;
pub mod classes;
pub mod grades;
pub mod notifications;

use dioxus::prelude::*;
use shared_types::ClassSummary;
use shared_ui::FormSelect;

/// Class picker shared by the attendance and grades pages.
#[component]
pub fn ClassPicker(
    classes: Vec<ClassSummary>,
    selected: Option<i64>,
    on_change: EventHandler<Option<i64>>,
) -> Element {
    let value = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        FormSelect {
            label: "Class",
            placeholder: "Select a class",
            value,
            onchange: move |evt: FormEvent| on_change.call(evt.value().parse::<i64>().ok()),
            for class in classes {
                option { key: "{class.id}", value: "{class.id}", {class.label()} }
            }
        }
    }
}
