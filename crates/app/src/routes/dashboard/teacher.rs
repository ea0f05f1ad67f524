use client::{section, Section};
use dioxus::prelude::*;
use shared_types::{ClassSummary, Role, TeacherNotification, TeacherStats};
use shared_ui::{
    Alert, Badge, BadgeVariant, Card, CardContent, CardHeader, SkeletonRows, StatTone,
};

use super::{use_greeting, DashboardShell, StatValue};
use crate::format_helpers::{format_datetime_human, format_percent};
use crate::routes::Route;
use crate::scope::use_view_scope;
use crate::use_services;

const PREVIEW_LEN: usize = 5;

#[derive(Clone, PartialEq, Default)]
struct TeacherOverview {
    stats: Section<TeacherStats>,
    classes: Section<Vec<ClassSummary>>,
    notifications: Section<Vec<TeacherNotification>>,
}

fn teacher_stats(stats: &TeacherStats) -> Vec<StatValue> {
    vec![
        StatValue::new("My Classes", stats.total_classes, StatTone::Primary),
        StatValue::new("Students", stats.total_students, StatTone::Success),
        StatValue::new("Pending Grading", stats.pending_assignments, StatTone::Warning),
        StatValue::new("Avg. Attendance", format_percent(stats.average_attendance), StatTone::Info),
    ]
}

#[component]
pub fn Teacher() -> Element {
    let services = use_services();
    let scope = use_view_scope();
    let greeting = use_greeting();

    // Three independent sections; one failing leaves the others intact.
    let mut overview = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            scope
                .run(async {
                    let (stats, classes, notifications) = futures::join!(
                        section("teacher stats", api.dashboard_stats::<TeacherStats>(Role::Teacher)),
                        section("classes", api.classes()),
                        section("notifications", api.notifications()),
                    );
                    TeacherOverview {
                        stats,
                        classes,
                        notifications,
                    }
                })
                .await
        }
    });

    let loaded = overview.read().clone().flatten();
    let loading = loaded.is_none();
    let loaded = loaded.unwrap_or_default();

    let classes: Vec<ClassSummary> = loaded.classes.value.iter().take(PREVIEW_LEN).cloned().collect();
    let unread: Vec<TeacherNotification> = loaded
        .notifications
        .value
        .iter()
        .filter(|n| !n.is_read)
        .cloned()
        .collect();
    let unread_count = unread.len();

    rsx! {
        DashboardShell {
            title: greeting,
            subtitle: "Today's classes, grading and messages",
            stats: teacher_stats(&loaded.stats.value),
            loading,
            error: loaded.stats.error.clone(),
            on_retry: move |_| overview.restart(),

            div { class: "dashboard-panels",
                Card {
                    CardHeader {
                        title: "My Classes",
                        action: rsx! {
                            Link { to: Route::TeacherClasses {}, class: "dashboard-panel-link", "View all" }
                        },
                    }
                    CardContent {
                        if loading {
                            SkeletonRows { rows: 3 }
                        } else if let Some(message) = loaded.classes.error.clone() {
                            Alert { message }
                        } else if classes.is_empty() {
                            p { class: "dashboard-empty", "No classes assigned yet." }
                        } else {
                            ul { class: "dashboard-list",
                                for class in classes {
                                    li { key: "{class.id}",
                                        Link {
                                            to: Route::TeacherClassDetail { id: class.id },
                                            class: "dashboard-list-title",
                                            {class.label()}
                                        }
                                        span { class: "dashboard-list-meta",
                                            "{class.student_count} students · {class.schedule}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        title: "Unread Notifications",
                        action: rsx! {
                            Badge {
                                variant: if unread_count > 0 { BadgeVariant::Warning } else { BadgeVariant::Neutral },
                                "{unread_count}"
                            }
                        },
                    }
                    CardContent {
                        if loading {
                            SkeletonRows { rows: 3 }
                        } else if let Some(message) = loaded.notifications.error.clone() {
                            Alert { message }
                        } else if unread.is_empty() {
                            p { class: "dashboard-empty", "You're all caught up." }
                        } else {
                            ul { class: "dashboard-list",
                                for note in unread.into_iter().take(PREVIEW_LEN) {
                                    li { key: "{note.id}",
                                        span { class: "dashboard-list-title", "{note.title}" }
                                        span { class: "dashboard-list-meta",
                                            {format_datetime_human(&note.created_at)}
                                        }
                                    }
                                }
                            }
                            Link { to: Route::TeacherNotifications {}, class: "dashboard-panel-link", "Open notifications" }
                        }
                    }
                }
            }
        }
    }
}
