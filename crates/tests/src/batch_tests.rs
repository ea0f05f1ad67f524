use axum::{http::StatusCode, routing::get, Json, Router};
use client::section;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Role, TeacherStats};

use crate::common::{self, MockBackend};

#[tokio::test]
async fn test_one_failing_section_degrades_only_itself() {
    let routes = Router::new()
        .route(
            "/dashboard/teacher/stats",
            get(|| async {
                Json(json!({ "total_classes": 4, "total_students": 112, "average_attendance": 91.5 }))
            }),
        )
        .route(
            "/academic/classes",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
        );
    let backend = MockBackend::start(routes).await;
    let (api, session, _storage) = common::signed_in_client(&backend, "teacher");

    let (stats, classes) = futures::join!(
        section("stats", api.dashboard_stats::<TeacherStats>(Role::Teacher)),
        section("classes", api.classes()),
    );

    assert_eq!(stats.error, None);
    assert_eq!(stats.value.total_classes, 4);
    assert_eq!(stats.value.total_students, 112);

    assert!(classes.value.is_empty());
    assert_eq!(classes.error.as_deref(), Some("database unavailable"));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_rejected_session_section_is_silent() {
    let routes = Router::new().route(
        "/teacher/notifications",
        get(|| async { StatusCode::UNAUTHORIZED }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, session, _storage) = common::signed_in_client(&backend, "teacher");

    let notifications = section("notifications", api.notifications()).await;

    assert!(notifications.value.is_empty());
    assert_eq!(notifications.error, None);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_undecodable_section_falls_back() {
    let routes = Router::new().route(
        "/academic/classes",
        get(|| async { Json(json!({ "unexpected": true })) }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let classes = section("classes", api.classes()).await;

    assert!(classes.value.is_empty());
    assert_eq!(
        classes.error.as_deref(),
        Some("The server sent an unexpected response.")
    );
}
