use client::section;
use dioxus::prelude::*;
use shared_types::{format_number, Role, StudentStats};
use shared_ui::StatTone;

use super::{use_greeting, DashboardShell, StatValue};
use crate::format_helpers::format_percent;
use crate::scope::use_view_scope;
use crate::use_services;

fn student_stats(stats: &StudentStats) -> Vec<StatValue> {
    vec![
        StatValue::new("Enrolled Courses", stats.enrolled_courses, StatTone::Primary),
        StatValue::new("Pending Assignments", stats.pending_assignments, StatTone::Warning),
        StatValue::new("Attendance", format_percent(stats.attendance_rate), StatTone::Success),
        StatValue::new("Average Grade", format_number(stats.average_grade), StatTone::Info),
    ]
}

#[component]
pub fn Student() -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let greeting = use_greeting();

    let mut stats = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(section(
                    "student stats",
                    api.dashboard_stats::<StudentStats>(Role::Student),
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
            subtitle: "Your courses, coursework and attendance at a glance",
            stats: student_stats(&loaded.value),
            loading,
            error: loaded.error,
            on_retry: move |_| stats.restart(),
        }
    }
}
