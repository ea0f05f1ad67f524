use client::section;
use dioxus::prelude::*;
use shared_types::TeacherNotification;
use shared_ui::{
    use_toast, Alert, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    PageHeader, SkeletonRows, ToastOptions,
};

use crate::format_helpers::format_datetime_human;
use crate::scope::use_view_scope;
use crate::use_services;

#[component]
pub fn NotificationsPage() -> Element {
    let services = use_services();
    let scope = use_view_scope();

    let mut items = use_signal(Vec::<TeacherNotification>::new);

    let mut data = use_resource(move || {
        let api = services.api.clone();
        let scope = scope.clone();
        async move {
            let fetched = scope
                .run(section("notifications", api.notifications()))
                .await?;
            items.set(fetched.value);
            Some(fetched.error)
        }
    });

    let mark_read = move |id: i64| {
        if let Some(item) = items.write().iter_mut().find(|n| n.id == id) {
            item.is_read = true;
        }
    };

    let state = data.read().clone();
    let list = items.read().clone();
    let unread = list.iter().filter(|n| !n.is_read).count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teacher.css") }

        div { class: "teacher-page",
            PageHeader {
                title: "Notifications",
                subtitle: if unread == 0 { "You're all caught up".to_string() } else { format!("{unread} unread") },
            }

            match state {
                None => rsx! { SkeletonRows { rows: 5 } },
                Some(error) => rsx! {
                    if let Some(message) = error.flatten() {
                        Alert { message, on_retry: move |_| data.restart() }
                    }
                    if list.is_empty() {
                        p { class: "teacher-empty", "No notifications." }
                    }
                    div { class: "notification-list",
                        for note in list {
                            NotificationCard { key: "{note.id}", note, on_read: mark_read }
                        }
                    }
                },
            }
        }
    }
}

/// One notification. The read flag flips locally only after the server
/// accepts it.
#[component]
fn NotificationCard(note: TeacherNotification, on_read: EventHandler<i64>) -> Element {
    let services = use_services();
    let toast = use_toast();
    let mut marking = use_signal(|| false);

    let id = note.id;
    let mark_read = move |_: MouseEvent| {
        let api = services.api.clone();
        spawn(async move {
            marking.set(true);
            match api.mark_notification_read(id).await {
                Ok(()) => on_read.call(id),
                Err(err) => toast.error(err.user_message(), ToastOptions::new()),
            }
            marking.set(false);
        });
    };

    rsx! {
        Card { class: if note.is_read { "notification" } else { "notification unread" },
            CardContent {
                div { class: "notification-head",
                    strong { "{note.title}" }
                    if !note.is_read {
                        Badge { variant: BadgeVariant::Primary, "New" }
                    }
                }
                p { class: "notification-message", "{note.message}" }
                div { class: "notification-foot",
                    span { class: "notification-time", {format_datetime_human(&note.created_at)} }
                    if !note.is_read {
                        Button {
                            size: ButtonSize::Small,
                            variant: ButtonVariant::Ghost,
                            loading: marking(),
                            onclick: mark_read,
                            "Mark as read"
                        }
                    }
                }
            }
        }
    }
}
