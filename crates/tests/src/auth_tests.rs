use axum::{http::StatusCode, routing::get, routing::post, Json, Router};
use client::{ApiError, GateState, SessionStore};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{default_store, AppErrorKind, LoginRequest, Role};

use crate::common::{self, MockBackend};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "teacher@campus.edu".to_string(),
        password: "secret123".to_string(),
    }
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let routes = Router::new().route(
        "/auth/login",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["email"], "teacher@campus.edu");
            Json(json!({
                "token": "abc123",
                "user": { "id": 7, "role": "teacher", "first_name": "Ada", "email": "teacher@campus.edu" }
            }))
        }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, session, _storage) = common::anonymous_client(&backend);

    let response = api.login(&credentials()).await.unwrap();
    assert_eq!(response.token, "abc123");
    assert_eq!(response.user.role, "teacher");
    assert_eq!(response.user.first_name, "Ada");

    // The page persists the session; the client call alone does not.
    assert_eq!(session.snapshot(), GateState::Anonymous);
    assert_eq!(backend.last_request().authorization, None);
}

#[tokio::test]
async fn test_login_accepts_wrapped_response() {
    let routes = Router::new().route(
        "/auth/login",
        post(|| async {
            Json(json!({
                "success": true,
                "data": { "token": "wrapped", "user": { "id": 2, "role": "student" } }
            }))
        }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, _session, _storage) = common::anonymous_client(&backend);

    let response = api.login(&credentials()).await.unwrap();
    assert_eq!(response.token, "wrapped");
    assert_eq!(response.user.role, "student");
}

#[tokio::test]
async fn test_failed_login_keeps_server_message() {
    let routes = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid email or password" })),
            )
        }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, session, _storage) = common::anonymous_client(&backend);

    let err = api.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, ApiError::App(_)));
    assert_eq!(err.kind(), AppErrorKind::Unauthorized);
    assert_eq!(err.user_message(), "Invalid email or password");
    assert_eq!(session.snapshot(), GateState::Anonymous);
}

#[tokio::test]
async fn test_me_sends_bearer_token() {
    let routes = Router::new().route(
        "/auth/me",
        get(|| async { Json(json!({ "id": 1, "role": "teacher", "email": "test@campus.edu" })) }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let user = api.me().await.unwrap();
    assert_eq!(user.role, "teacher");

    let seen = backend.last_request();
    assert_eq!(seen.path, "/api/auth/me");
    assert_eq!(
        seen.authorization.as_deref(),
        Some(format!("Bearer {}", common::TEST_TOKEN).as_str())
    );
}

#[tokio::test]
async fn test_profile_refresh_updates_cached_user() {
    let routes = Router::new().route(
        "/auth/me",
        get(|| async {
            Json(json!({ "id": 1, "role": "teacher", "first_name": "Grace", "last_name": "Hopper" }))
        }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, session, _storage) = common::signed_in_client(&backend, "teacher");

    let user = api.me().await.unwrap();
    session.set_user(user);

    assert_eq!(session.user().unwrap().display_name(), "Grace Hopper");
}

#[tokio::test]
async fn test_profile_nested_like_login_response_decodes() {
    let routes = Router::new().route(
        "/auth/me",
        get(|| async {
            Json(json!({
                "success": true,
                "user": { "id": 3, "role": "student", "email": "s@campus.edu", "first_name": "Mia" }
            }))
        }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "student");

    let user = api.me().await.unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(user.role(), Some(Role::Student));
    assert_eq!(user.email, "s@campus.edu");
}

#[tokio::test]
async fn test_profile_wrapped_in_data_decodes() {
    let routes = Router::new().route(
        "/auth/me",
        get(|| async { Json(json!({ "data": { "id": 4, "role": "parent", "email": "p@campus.edu" } })) }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "parent");

    let user = api.me().await.unwrap();

    assert_eq!(user.role(), Some(Role::Parent));
    assert_eq!(user.email, "p@campus.edu");
}

#[tokio::test]
async fn test_profile_without_role_is_a_decode_error() {
    let routes = Router::new().route(
        "/auth/me",
        get(|| async { Json(json!({ "success": true, "profile": { "id": 4 } })) }),
    );
    let backend = MockBackend::start(routes).await;
    let (api, session, _storage) = common::signed_in_client(&backend, "teacher");

    let err = api.me().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.user_message(), "The server sent an unexpected response.");
    assert!(session.is_authenticated());
}

#[test]
fn test_default_store_backs_a_session() {
    let session = SessionStore::new(default_store());
    session.restore();
    session.login(common::TEST_TOKEN, common::test_user("teacher"));

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some(common::TEST_TOKEN));
}
