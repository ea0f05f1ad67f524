use client::section;
use dioxus::prelude::*;
use shared_types::{format_number, ParentStats, Role};
use shared_ui::StatTone;

use super::{use_greeting, DashboardShell, StatValue};
use crate::format_helpers::format_percent;
use crate::scope::use_view_scope;
use crate::use_services;

fn parent_stats(stats: &ParentStats) -> Vec<StatValue> {
    vec![
        StatValue::new("Children", stats.children, StatTone::Primary),
        StatValue::new("Average Attendance", format_percent(stats.average_attendance), StatTone::Success),
        StatValue::new("Upcoming Assignments", stats.upcoming_assignments, StatTone::Info),
        StatValue::new("Outstanding Fees", format_number(stats.outstanding_fees), StatTone::Warning),
    ]
}

#[component]
pub fn Parent() -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let greeting = use_greeting();

    let mut stats = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section(
                    "parent stats",
                    api.dashboard_stats::<ParentStats>(Role::Parent),
                ))
                .await
        }
    });

    let loaded = stats.read().clone().flatten();
    let loading = loaded.is_none();
    let loaded = loaded.unwrap_or_default();

    rsx! {
        DashboardShell {
            title: greeting,
            subtitle: "How your children are doing this term",
            stats: parent_stats(&loaded.value),
            loading,
            error: loaded.error,
            on_retry: move |_| stats.restart(),
        }
    }
}
