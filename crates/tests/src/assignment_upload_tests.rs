use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    routing::{post, put},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AssignmentForm, UploadFile};

use crate::common::{self, MockBackend};

#[derive(Debug, Clone, PartialEq)]
struct Part {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    body: Vec<u8>,
}

type Captured = Arc<Mutex<Vec<Part>>>;

async fn capture(State(parts): State<Captured>, mut multipart: Multipart) -> Json<Value> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let body = field.bytes().await.unwrap().to_vec();
        parts.lock().unwrap().push(Part {
            name,
            file_name,
            content_type,
            body,
        });
    }
    Json(json!({
        "data": {
            "id": 11,
            "title": "Lab report",
            "class_id": 3,
            "class_name": "Grade 10",
            "due_date": "2026-11-02",
            "total_marks": 20,
            "assignment_type": "lab"
        }
    }))
}

fn upload_backend(parts: &Captured) -> Router {
    Router::new()
        .route("/academic/assignments", post(capture))
        .route("/academic/assignments/{id}", put(capture))
        .with_state(parts.clone())
}

fn lab_report() -> AssignmentForm {
    AssignmentForm {
        title: "  Lab report ".to_string(),
        description: "Titration write-up".to_string(),
        class_id: "3".to_string(),
        due_date: "2026-11-02".to_string(),
        total_marks: "20".to_string(),
        weightage: "10".to_string(),
        assignment_type: "lab".to_string(),
    }
}

fn text_value(parts: &[Part], name: &str) -> String {
    let part = parts
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("missing part {name}"));
    String::from_utf8(part.body.clone()).unwrap()
}

#[tokio::test]
async fn test_create_sends_text_fields_and_document() {
    let parts = Captured::default();
    let backend = MockBackend::start(upload_backend(&parts)).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let file = UploadFile {
        file_name: "report.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.7 test".to_vec(),
    };
    let created = api.create_assignment(&lab_report(), Some(file)).await.unwrap();
    assert_eq!(created.id, 11);
    assert_eq!(created.total_marks, 20.0);

    let parts = parts.lock().unwrap().clone();
    let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "title",
            "description",
            "class_id",
            "due_date",
            "total_marks",
            "weightage",
            "assignment_type",
            "document"
        ]
    );
    assert_eq!(text_value(&parts, "title"), "Lab report");
    assert_eq!(text_value(&parts, "class_id"), "3");

    let document = parts.iter().find(|p| p.name == "document").unwrap();
    assert_eq!(document.file_name.as_deref(), Some("report.pdf"));
    assert_eq!(document.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(document.body, b"%PDF-1.7 test".to_vec());

    let seen = backend.last_request();
    assert_eq!(seen.method, "POST");
    assert!(seen.authorization.is_some());
}

#[tokio::test]
async fn test_create_without_document_sends_text_only() {
    let parts = Captured::default();
    let backend = MockBackend::start(upload_backend(&parts)).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    api.create_assignment(&lab_report(), None).await.unwrap();

    let parts = parts.lock().unwrap().clone();
    assert_eq!(parts.len(), 7);
    assert!(parts.iter().all(|p| p.file_name.is_none()));
}

#[tokio::test]
async fn test_update_puts_to_assignment_path() {
    let parts = Captured::default();
    let backend = MockBackend::start(upload_backend(&parts)).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let mut form = lab_report();
    form.total_marks = "25".to_string();
    api.update_assignment(11, &form, None).await.unwrap();

    let seen = backend.last_request();
    assert_eq!(seen.method, "PUT");
    assert_eq!(seen.path, "/api/academic/assignments/11");
    assert_eq!(text_value(&parts.lock().unwrap(), "total_marks"), "25");
}
