use axum::{extract::Path, routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    can_access, landing_path, navigation_items_for, CollegeAdminStats, ParentStats, Role,
    StudentStats,
};

use crate::common::{self, MockBackend};

fn stats_backend() -> Router {
    Router::new().route(
        "/dashboard/{slug}/stats",
        get(|Path(slug): Path<String>| async move {
            match slug.as_str() {
                "college-admin" => Json(json!({ "total_students": 640, "pending_fees": 1250.5 })),
                "student" => Json(json!({ "data": { "enrolled_courses": 6, "attendance_rate": 94.0 } })),
                _ => Json(json!({})),
            }
        }),
    )
}

#[tokio::test]
async fn test_each_role_reads_its_own_stats_endpoint() {
    let backend = MockBackend::start(stats_backend()).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "super_admin");

    for role in Role::ALL {
        api.dashboard_stats::<Value>(role).await.unwrap();
    }

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/api/dashboard/super-admin/stats",
            "/api/dashboard/college-admin/stats",
            "/api/dashboard/teacher/stats",
            "/api/dashboard/student/stats",
            "/api/dashboard/parent/stats",
        ]
    );
}

#[tokio::test]
async fn test_stats_decode_with_missing_fields() {
    let backend = MockBackend::start(stats_backend()).await;
    let (api, _session, _storage) = common::signed_in_client(&backend, "college_admin");

    let college = api
        .dashboard_stats::<CollegeAdminStats>(Role::CollegeAdmin)
        .await
        .unwrap();
    assert_eq!(college.total_students, 640);
    assert_eq!(college.total_teachers, 0);
    assert_eq!(college.pending_fees, 1250.5);

    let student = api.dashboard_stats::<StudentStats>(Role::Student).await.unwrap();
    assert_eq!(student.enrolled_courses, 6);

    let parent = api.dashboard_stats::<ParentStats>(Role::Parent).await.unwrap();
    assert_eq!(parent, ParentStats::default());
}

#[test]
fn test_student_lands_on_student_dashboard_and_menu() {
    let role = Some("student");
    assert_eq!(landing_path(role), "/student");

    let paths: Vec<&str> = navigation_items_for(role).iter().map(|i| i.path).collect();
    assert_eq!(
        paths,
        vec![
            "/student",
            "/records/courses",
            "/records/my-assignments",
            "/records/my-grades",
            "/records/schedule"
        ]
    );
    assert!(can_access(role, "/records/my-grades"));
    assert!(!can_access(role, "/teacher/assignments"));
}
