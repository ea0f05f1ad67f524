use axum::{routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{self, MockBackend};

fn records_backend() -> Router {
    Router::new()
        .route(
            "/super-admin/colleges",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": [
                        { "name": "North Campus", "city": "Leeds", "is_active": true },
                        { "name": "South Campus", "city": "Bath", "is_active": false }
                    ]
                }))
            }),
        )
        .route(
            "/parent/children",
            get(|| async { Json(json!([{ "name": "Mia Chen", "roll_number": "A-12" }])) }),
        )
}

#[tokio::test]
async fn test_wrapped_rows_are_unwrapped() {
    let backend = MockBackend::start(records_backend()).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "super_admin");

    let rows = api.records("/super-admin/colleges").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "North Campus");
    assert_eq!(rows[1]["is_active"], false);
}

#[tokio::test]
async fn test_bare_rows_are_accepted() {
    let backend = MockBackend::start(records_backend()).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "parent");

    let rows = api.records("/parent/children").await.unwrap();

    assert_eq!(rows, vec![json!({ "name": "Mia Chen", "roll_number": "A-12" })]);
    assert_eq!(backend.last_request().path, "/api/parent/children");
}
