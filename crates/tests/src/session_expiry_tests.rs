use std::cell::RefCell;
use std::rc::Rc;

use axum::{http::StatusCode, routing::get, Json, Router};
use client::{ApiError, GateState};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AUTH_TOKEN_KEY, USER_KEY};

use crate::common::{self, MockBackend};

fn rejecting_backend() -> Router {
    Router::new().route(
        "/academic/classes",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Token expired" })),
            )
        }),
    )
}

#[tokio::test]
async fn test_rejected_token_signs_out() {
    let backend = MockBackend::start(rejecting_backend()).await;
    let (api, session, storage) = common::signed_in_client(&backend, "teacher");
    assert!(storage.contains(AUTH_TOKEN_KEY));

    let err = api.classes().await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!storage.contains(AUTH_TOKEN_KEY));
    assert!(!storage.contains(USER_KEY));
    assert!(!session.is_authenticated());
    assert_eq!(session.snapshot(), GateState::Anonymous);
}

#[tokio::test]
async fn test_subscribers_see_forced_sign_out() {
    let backend = MockBackend::start(rejecting_backend()).await;
    let (api, session, _storage) = common::signed_in_client(&backend, "teacher");

    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = states.clone();
    session.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    let _ = api.classes().await;

    assert_eq!(*states.borrow(), vec![GateState::Anonymous]);
}

#[tokio::test]
async fn test_requests_after_expiry_carry_no_token() {
    let backend = MockBackend::start(rejecting_backend()).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let _ = api.classes().await;
    let _ = api.classes().await;

    let seen = backend.requests();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].authorization.is_some());
    assert_eq!(seen[1].authorization, None);
}

#[tokio::test]
async fn test_rejection_without_session_is_reported_not_expired() {
    let backend = MockBackend::start(rejecting_backend()).await;
    let (api, session, _storage) = common::anonymous_client(&backend);

    let err = api.classes().await.unwrap_err();

    assert!(!err.is_unauthorized());
    assert_eq!(err.user_message(), "Token expired");
    assert_eq!(session.snapshot(), GateState::Anonymous);
}
