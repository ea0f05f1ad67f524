use std::sync::{Arc, Mutex};

use axum::{extract::State, routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AttendanceStatus, MarkAttendanceRequest};

use crate::common::{self, MockBackend};

type Posted = Arc<Mutex<Option<Value>>>;

fn attendance_backend(posted: &Posted) -> Router {
    Router::new()
        .route(
            "/academic/classes/{id}/attendance",
            get(|| async {
                Json(json!([
                    { "student_id": 1, "student_name": "Ana Ruiz", "roll_number": "01", "status": "present" },
                    { "student_id": 2, "student_name": "Ben Ode", "roll_number": "02", "status": null },
                    { "student_id": 3, "student_name": "Cy Park", "roll_number": "03" }
                ]))
            })
            .post(|State(posted): State<Posted>, Json(body): Json<Value>| async move {
                *posted.lock().unwrap() = Some(body);
                Json(json!({ "message": "Attendance saved" }))
            }),
        )
        .route(
            "/academic/classes/{id}/attendance/report",
            get(|| async {
                Json(json!({ "data": [
                    { "student_id": 1, "student_name": "Ana Ruiz", "present": 8, "late": 1, "absent": 1 }
                ]}))
            }),
        )
        .with_state(posted.clone())
}

#[tokio::test]
async fn test_sheet_is_fetched_for_the_chosen_date() {
    let posted = Posted::default();
    let backend = MockBackend::start(attendance_backend(&posted)).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let sheet = api.attendance(5, "2026-03-02").await.unwrap();

    let seen = backend.last_request();
    assert_eq!(seen.path, "/api/academic/classes/5/attendance");
    assert_eq!(seen.query.as_deref(), Some("date=2026-03-02"));

    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet[0].status, Some(AttendanceStatus::Present));
    assert_eq!(sheet[1].status, None);
    assert_eq!(sheet[2].status, None);
}

#[tokio::test]
async fn test_marking_posts_only_marked_students() {
    let posted = Posted::default();
    let backend = MockBackend::start(attendance_backend(&posted)).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let mut sheet = api.attendance(5, "2026-03-02").await.unwrap();
    sheet[1].status = Some(AttendanceStatus::Late);
    let request = MarkAttendanceRequest::from_sheet("2026-03-02", &sheet);

    api.mark_attendance(5, &request).await.unwrap();

    let body = posted.lock().unwrap().clone().unwrap();
    assert_eq!(body["date"], "2026-03-02");
    assert_eq!(
        body["records"],
        json!([
            { "student_id": 1, "status": "present" },
            { "student_id": 2, "status": "late" }
        ])
    );
}

#[tokio::test]
async fn test_report_rows_compute_percentage() {
    let posted = Posted::default();
    let backend = MockBackend::start(attendance_backend(&posted)).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "teacher");

    let report = api.attendance_report(5).await.unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].excused, 0);
    assert_eq!(report[0].percentage(), 90.0);
}
