use client::section;
use dioxus::prelude::*;
use shared_types::{format_number, CollegeAdminStats, Role};
use shared_ui::StatTone;

use super::{DashboardShell, StatValue};
use crate::auth::use_session;
use crate::scope::use_view_scope;
use crate::use_services;

fn college_stats(stats: &CollegeAdminStats) -> Vec<StatValue> {
    vec![
        StatValue::new("Students", stats.total_students, StatTone::Primary),
        StatValue::new("Teachers", stats.total_teachers, StatTone::Success),
        StatValue::new("Classes", stats.total_classes, StatTone::Info),
        StatValue::new("Pending Fees", format_number(stats.pending_fees), StatTone::Warning),
    ]
}

#[component]
pub fn CollegeAdmin() -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let session = use_session();

    let college = session
        .user()
        .and_then(|u| u.college_name)
        .unwrap_or_else(|| "Your college".to_string());

    let mut stats = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section(
                    "college stats",
                    api.dashboard_stats::<CollegeAdminStats>(Role::CollegeAdmin),
                ))
                .await
        }
    });

    let loaded = stats.read().clone().flatten();
    let loading = loaded.is_none();
    let loaded = loaded.unwrap_or_default();

    rsx! {
        DashboardShell {
            title: college,
            subtitle: "Enrollment, staff and fees",
            stats: college_stats(&loaded.value),
            loading,
            error: loaded.error,
            on_retry: move |_| stats.restart(),
        }
    }
}
