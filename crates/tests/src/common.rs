use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::{
    extract::Request,
    middleware::{self, Next},
    Router,
};
use client::{ApiClient, SessionStore};
use shared_types::{MemoryStore, SessionUser};

/// One request as the mock backend received it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

/// A backend on 127.0.0.1 serving `routes` under `/api` and logging every
/// request it gets.
pub struct MockBackend {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockBackend {
    pub async fn start(routes: Router) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();

        let app = Router::new()
            .nest("/api", routes)
            .layer(middleware::from_fn(move |req: Request, next: Next| {
                let log = log.clone();
                async move {
                    let authorization = req
                        .headers()
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    log.lock().unwrap().push(SeenRequest {
                        method: req.method().to_string(),
                        path: req.uri().path().to_string(),
                        query: req.uri().query().map(str::to_string),
                        authorization,
                    });
                    next.run(req).await
                }
            }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend stopped");
        });

        Self {
            base_url: format!("http://{addr}/api"),
            seen,
        }
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    /// The most recent request. Panics if nothing was received.
    pub fn last_request(&self) -> SeenRequest {
        self.requests()
            .pop()
            .expect("Mock backend received no requests")
    }
}

pub const TEST_TOKEN: &str = "test-token";

pub fn test_user(role: &str) -> SessionUser {
    SessionUser {
        id: 1,
        role: role.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "test@campus.edu".to_string(),
        college_name: Some("Riverside College".to_string()),
        ..SessionUser::default()
    }
}

/// A client whose session holds [`TEST_TOKEN`] and a user with `role`.
/// The backing store is returned so tests can inspect what was persisted.
pub fn signed_in_client(backend: &MockBackend, role: &str) -> (ApiClient, SessionStore, MemoryStore) {
    let storage = MemoryStore::new();
    let session = SessionStore::new(Rc::new(storage.clone()));
    session.restore();
    session.login(TEST_TOKEN, test_user(role));
    let api = ApiClient::new(backend.base_url.clone(), session.clone());
    (api, session, storage)
}

/// A client with no stored session.
pub fn anonymous_client(backend: &MockBackend) -> (ApiClient, SessionStore, MemoryStore) {
    let storage = MemoryStore::new();
    let session = SessionStore::new(Rc::new(storage.clone()));
    session.restore();
    let api = ApiClient::new(backend.base_url.clone(), session.clone());
    (api, session, storage)
}
