use client::section;
use dioxus::prelude::*;
use shared_types::{Role, SuperAdminStats};
use shared_ui::StatTone;

use super::{DashboardShell, StatValue};
use crate::scope::use_view_scope;
use crate::use_services;

fn platform_stats(stats: &SuperAdminStats) -> Vec<StatValue> {
    vec![
        StatValue::new("Total Colleges", stats.total_colleges, StatTone::Primary),
        StatValue::new("Active Colleges", stats.active_colleges, StatTone::Success),
        StatValue::new("Total Users", stats.total_users, StatTone::Info),
        StatValue::new("Total Students", stats.total_students, StatTone::Warning),
    ]
}

/// Platform-wide overview. Also the fallback for `/dashboard`.
#[component]
pub fn SuperAdmin() -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut stats = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section(
                    "platform stats",
                    api.dashboard_stats::<SuperAdminStats>(Role::SuperAdmin),
                ))
                .await
        }
    });

    let loaded = stats.read().clone().flatten();
    let loading = loaded.is_none();
    let loaded = loaded.unwrap_or_default();

    rsx! {
        DashboardShell {
            title: "Platform Overview",
            subtitle: "Colleges and users across CampusLink",
            stats: platform_stats(&loaded.value),
            loading,
            error: loaded.error,
            on_retry: move |_| stats.restart(),
        }
    }
}
