//! REST client for the CampusLink backend.
//!
//! Every call goes through [`ApiClient::send`], which attaches the bearer
//! token and turns a 401 into a forced sign-out.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{multipart, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{
    AppError, Assignment, AssignmentForm, AttendanceCalendarDay, AttendanceRecord,
    AttendanceSummaryRow, ChangePasswordRequest, ClassDetail, ClassSummary,
    GradeSubmissionRequest, LoginRequest, LoginResponse, MarkAttendanceRequest, MessageResponse,
    ResultRecord, ResultRequest, Role, SessionUser, TeacherNotification, TeacherProfile,
    UploadFile,
};

use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// The backend wraps some payloads in `{ "data": ... }` and returns others
/// bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    serde_json::from_slice::<Envelope<T>>(bytes)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `/auth/me` answers like the login endpoint (`{ "user": ... }`), wrapped
/// in `data`, or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileEnvelope {
    Nested { user: SessionUser },
    Wrapped { data: SessionUser },
    Bare(SessionUser),
}

/// Decode a profile body. Every user field is optional on the wire, so a
/// body without a recognized role is rejected rather than taken as an empty
/// profile.
pub(crate) fn decode_profile(bytes: &[u8]) -> ApiResult<SessionUser> {
    let user = match serde_json::from_slice::<ProfileEnvelope>(bytes)
        .map_err(|e| ApiError::Decode(e.to_string()))?
    {
        ProfileEnvelope::Nested { user } => user,
        ProfileEnvelope::Wrapped { data } => data,
        ProfileEnvelope::Bare(user) => user,
    };
    if user.role().is_none() {
        return Err(ApiError::Decode(format!(
            "profile has no recognized role: {:?}",
            user.role
        )));
    }
    Ok(user)
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => req.header(AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }

    /// JSON request with the bearer header when signed in.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        self.authorize(req)
    }

    /// Multipart request; the body sets its own content type.
    fn multipart_request(&self, method: Method, path: &str, form: multipart::Form) -> RequestBuilder {
        tracing::debug!(%method, path, "api multipart request");
        let req = self.http.request(method, format!("{}{}", self.base_url, path));
        self.authorize(req).multipart(form)
    }

    async fn send(&self, req: RequestBuilder) -> ApiResult<Response> {
        let had_session = self.session.is_authenticated();
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            self.session.expire();
            // Without a session there is nothing to expire; a failed login
            // keeps the server's message for the form.
            return Err(if had_session {
                ApiError::Unauthorized
            } else {
                ApiError::App(AppError::from_response(status.as_u16(), &body))
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = AppError::from_response(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), kind = %err.kind, "api error response");
            return Err(ApiError::App(err));
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        decode_body(&bytes)
    }

    /// Send and ignore any response body.
    async fn execute(&self, req: RequestBuilder) -> ApiResult<()> {
        self.send(req).await.map(drop)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.fetch(self.request(Method::GET, path)).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.fetch(self.request(method, path).json(body)).await
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.send_json(Method::POST, "/auth/login", credentials).await
    }

    /// Profile of the token holder.
    pub async fn me(&self) -> ApiResult<SessionUser> {
        let response = self.send(self.request(Method::GET, "/auth/me")).await?;
        let bytes = response.bytes().await?;
        decode_profile(&bytes)
    }

    // ------------------------------------------------------------------
    // Dashboards
    // ------------------------------------------------------------------

    /// `GET /dashboard/{role}/stats`, e.g. `/dashboard/college-admin/stats`.
    pub async fn dashboard_stats<T: DeserializeOwned>(&self, role: Role) -> ApiResult<T> {
        let slug = role.profile().landing.trim_start_matches('/');
        self.get(&format!("/dashboard/{slug}/stats")).await
    }

    // ------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------

    pub async fn classes(&self) -> ApiResult<Vec<ClassSummary>> {
        self.get("/academic/classes").await
    }

    pub async fn class_detail(&self, class_id: i64) -> ApiResult<ClassDetail> {
        self.get(&format!("/academic/classes/{class_id}")).await
    }

    // ------------------------------------------------------------------
    // Assignments
    // ------------------------------------------------------------------

    pub async fn assignments(&self) -> ApiResult<Vec<Assignment>> {
        self.get("/academic/assignments").await
    }

    pub async fn assignment(&self, id: i64) -> ApiResult<Assignment> {
        self.get(&format!("/academic/assignments/{id}")).await
    }

    pub async fn create_assignment(
        &self,
        form: &AssignmentForm,
        document: Option<UploadFile>,
    ) -> ApiResult<Assignment> {
        let body = assignment_body(form, document)?;
        self.fetch(self.multipart_request(Method::POST, "/academic/assignments", body))
            .await
    }

    pub async fn update_assignment(
        &self,
        id: i64,
        form: &AssignmentForm,
        document: Option<UploadFile>,
    ) -> ApiResult<Assignment> {
        let body = assignment_body(form, document)?;
        let path = format!("/academic/assignments/{id}");
        self.fetch(self.multipart_request(Method::PUT, &path, body)).await
    }

    pub async fn delete_assignment(&self, id: i64) -> ApiResult<()> {
        let path = format!("/academic/assignments/{id}");
        self.execute(self.request(Method::DELETE, &path)).await
    }

    pub async fn grade_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        grade: &GradeSubmissionRequest,
    ) -> ApiResult<()> {
        let path = format!("/academic/assignments/{assignment_id}/grade/{student_id}");
        self.execute(self.request(Method::PUT, &path).json(grade)).await
    }

    // ------------------------------------------------------------------
    // Attendance
    // ------------------------------------------------------------------

    pub async fn attendance(&self, class_id: i64, date: &str) -> ApiResult<Vec<AttendanceRecord>> {
        self.get(&format!(
            "/academic/classes/{class_id}/attendance?date={}",
            urlencoding::encode(date)
        ))
        .await
    }

    pub async fn mark_attendance(
        &self,
        class_id: i64,
        sheet: &MarkAttendanceRequest,
    ) -> ApiResult<()> {
        let path = format!("/academic/classes/{class_id}/attendance");
        self.execute(self.request(Method::POST, &path).json(sheet)).await
    }

    pub async fn attendance_report(&self, class_id: i64) -> ApiResult<Vec<AttendanceSummaryRow>> {
        self.get(&format!("/academic/classes/{class_id}/attendance/report"))
            .await
    }

    pub async fn attendance_calendar(
        &self,
        class_id: i64,
    ) -> ApiResult<Vec<AttendanceCalendarDay>> {
        self.get(&format!("/academic/classes/{class_id}/attendance/calendar"))
            .await
    }

    // ------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------

    pub async fn results(&self, class_id: i64) -> ApiResult<Vec<ResultRecord>> {
        self.get(&format!("/academic/classes/{class_id}/results")).await
    }

    pub async fn create_result(&self, class_id: i64, result: &ResultRequest) -> ApiResult<ResultRecord> {
        let path = format!("/academic/classes/{class_id}/results");
        self.send_json(Method::POST, &path, result).await
    }

    pub async fn update_result(
        &self,
        class_id: i64,
        result_id: i64,
        result: &ResultRequest,
    ) -> ApiResult<ResultRecord> {
        let path = format!("/academic/classes/{class_id}/results/{result_id}");
        self.send_json(Method::PUT, &path, result).await
    }

    pub async fn delete_result(&self, class_id: i64, result_id: i64) -> ApiResult<()> {
        let path = format!("/academic/classes/{class_id}/results/{result_id}");
        self.execute(self.request(Method::DELETE, &path)).await
    }

    // ------------------------------------------------------------------
    // Teacher account
    // ------------------------------------------------------------------

    pub async fn notifications(&self) -> ApiResult<Vec<TeacherNotification>> {
        self.get("/teacher/notifications").await
    }

    pub async fn mark_notification_read(&self, id: i64) -> ApiResult<()> {
        let path = format!("/teacher/notifications/{id}/read");
        self.execute(self.request(Method::PUT, &path)).await
    }

    pub async fn teacher_profile(&self) -> ApiResult<TeacherProfile> {
        self.get("/teacher/profile").await
    }

    pub async fn update_teacher_profile(&self, profile: &TeacherProfile) -> ApiResult<TeacherProfile> {
        self.send_json(Method::PUT, "/teacher/profile", profile).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<MessageResponse> {
        self.send_json(Method::PUT, "/teacher/change-password", request)
            .await
    }

    // ------------------------------------------------------------------
    // Generic records
    // ------------------------------------------------------------------

    /// Rows of a read-only records page. Accepts a bare array or
    /// `{ "data": [...] }`.
    pub async fn records(&self, endpoint: &str) -> ApiResult<Vec<Value>> {
        self.get(endpoint).await
    }
}

fn assignment_body(form: &AssignmentForm, document: Option<UploadFile>) -> ApiResult<multipart::Form> {
    let mut body = form
        .text_fields()
        .into_iter()
        .fold(multipart::Form::new(), |body, (name, value)| body.text(name, value));

    if let Some(file) = document {
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        body = body.part("document", part);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{MemoryStore, TeacherStats};
    use std::rc::Rc;

    #[test]
    fn bare_and_wrapped_lists_decode_the_same() {
        let bare: Vec<ClassSummary> = decode_body(br#"[{"id":1,"name":"Physics"}]"#).unwrap();
        let wrapped: Vec<ClassSummary> =
            decode_body(br#"{"success":true,"data":[{"id":1,"name":"Physics"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].name, "Physics");
    }

    #[test]
    fn bare_object_decodes() {
        let stats: TeacherStats = decode_body(br#"{"total_classes":4,"average_attendance":91.5}"#).unwrap();
        assert_eq!(stats.total_classes, 4);
    }

    #[test]
    fn records_accept_any_row_shape() {
        let rows: Vec<Value> = decode_body(br#"{"data":[{"name":"North Campus","city":"Leeds"}]}"#).unwrap();
        assert_eq!(rows[0]["city"], "Leeds");
    }

    #[test]
    fn profile_accepts_nested_wrapped_and_bare() {
        let nested = decode_profile(
            br#"{"success":true,"user":{"id":3,"role":"teacher","email":"t@x.edu"}}"#,
        )
        .unwrap();
        let wrapped = decode_profile(br#"{"data":{"id":3,"role":"teacher","email":"t@x.edu"}}"#).unwrap();
        let bare = decode_profile(br#"{"id":3,"role":"teacher","email":"t@x.edu"}"#).unwrap();
        assert_eq!(nested.role, "teacher");
        assert_eq!(nested.email, "t@x.edu");
        assert_eq!(nested, wrapped);
        assert_eq!(nested, bare);
    }

    #[test]
    fn profile_without_known_role_is_rejected() {
        let err = decode_profile(br#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let err = decode_profile(br#"{"user":{"role":"janitor"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn mismatched_body_is_a_decode_error() {
        let err = decode_body::<Vec<ClassSummary>>(b"{\"classes\":3}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let session = SessionStore::new(Rc::new(MemoryStore::new()));
        let api = ApiClient::new("http://localhost:5000/api/", session);
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }
}
