use axum::{http::StatusCode, routing::get, routing::post, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, ResultRequest};

use crate::common::{self, MockBackend};

#[tokio::test]
async fn test_forbidden_keeps_session_and_message() {
    let routes = Router::new().route(
        "/academic/assignments",
        get(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "Teachers only" })),
            )
        }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, session, _storage) = common::signed_in_client(&backend, "student");

    let err = api.assignments().await.unwrap_err();

    assert_eq!(err.kind(), AppErrorKind::Forbidden);
    assert_eq!(err.user_message(), "Teachers only");
    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().role, "student");
}

#[tokio::test]
async fn test_empty_forbidden_uses_default_text() {
    let routes = Router::new().route(
        "/academic/classes",
        get(|| async { StatusCode::FORBIDDEN }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "parent");

    let err = api.classes().await.unwrap_err();

    assert_eq!(
        err.user_message(),
        "You do not have permission to view this resource."
    );
}

#[tokio::test]
async fn test_validation_errors_are_per_field() {
    let routes = Router::new().route(
        "/academic/classes/{id}/results",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "message": "Validation failed",
                    "errors": { "marks_obtained": "Exceeds total marks" }
                })),
            )
        }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let request = ResultRequest {
        student_id: 4,
        subject: "Physics".to_string(),
        exam_type: "midterm".to_string(),
        marks_obtained: 120.0,
        total_marks: 100.0,
        remarks: None,
    };
    let err = api.create_result(3, &request).await.unwrap_err();

    assert_eq!(err.kind(), AppErrorKind::ValidationError);
    assert_eq!(err.field_error("marks_obtained"), Some("Exceeds total marks"));
    assert_eq!(backend.last_request().path, "/api/academic/classes/3/results");
}

#[tokio::test]
async fn test_missing_resource_reports_not_found() {
    let backend = MockBackend::start(Router::new()).await;
    let (api, session, _storage) = common::signed_in_client(&backend, "teacher");

    let err = api.class_detail(99).await.unwrap_err();

    assert_eq!(err.kind(), AppErrorKind::NotFound);
    assert!(session.is_authenticated());
}
