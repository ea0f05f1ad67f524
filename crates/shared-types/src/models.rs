use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The signed-in user as returned by the login endpoint and cached in
/// durable storage. Only `role` drives behavior; the rest is display data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Name to show in the navigation bar.
    ///
    /// Prefers "first last", then `name`, then the email address.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            full.to_string()
        } else if !self.name.trim().is_empty() {
            self.name.trim().to_string()
        } else {
            self.email.clone()
        }
    }

    /// Up to two uppercase initials for the avatar.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Both fields must be non-blank before the form may submit.
    pub fn is_submittable(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Generic acknowledgement body (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Dashboard statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SuperAdminStats {
    pub total_colleges: i64,
    pub active_colleges: i64,
    pub total_users: i64,
    pub total_students: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CollegeAdminStats {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_classes: i64,
    pub pending_fees: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TeacherStats {
    pub total_classes: i64,
    pub total_students: i64,
    pub pending_assignments: i64,
    pub average_attendance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StudentStats {
    pub enrolled_courses: i64,
    pub pending_assignments: i64,
    pub attendance_rate: f64,
    pub average_grade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ParentStats {
    pub children: i64,
    pub average_attendance: f64,
    pub upcoming_assignments: i64,
    pub outstanding_fees: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str, name: &str, email: &str) -> SessionUser {
        SessionUser {
            first_name: first.into(),
            last_name: last.into(),
            name: name.into(),
            email: email.into(),
            ..SessionUser::default()
        }
    }

    #[test]
    fn display_name_prefers_first_last() {
        assert_eq!(user("Ada", "Lovelace", "ada", "a@x.edu").display_name(), "Ada Lovelace");
        assert_eq!(user("", "", "Grace", "g@x.edu").display_name(), "Grace");
        assert_eq!(user(" ", "", "", "h@x.edu").display_name(), "h@x.edu");
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(user("ada", "lovelace", "", "").initials(), "AL");
        assert_eq!(user("", "", "Prince", "").initials(), "P");
    }

    #[test]
    fn partial_user_payload_decodes() {
        let user: SessionUser = serde_json::from_str(r#"{"role":"teacher","email":"t@x.edu"}"#).unwrap();
        assert_eq!(user.role(), Some(Role::Teacher));
        assert_eq!(user.id, 0);
    }

    #[test]
    fn unknown_role_has_no_enum_value() {
        let user = SessionUser {
            role: "janitor".into(),
            ..SessionUser::default()
        };
        assert_eq!(user.role(), None);
    }

    #[test]
    fn login_request_requires_both_fields() {
        let mut req = LoginRequest {
            email: "t@x.edu".into(),
            password: String::new(),
        };
        assert!(!req.is_submittable());
        req.password = "secret".into();
        assert!(req.is_submittable());
        req.email = "   ".into();
        assert!(!req.is_submittable());
    }

    #[test]
    fn stats_tolerate_missing_fields() {
        let stats: TeacherStats = serde_json::from_str(r#"{"total_classes":3}"#).unwrap();
        assert_eq!(stats.total_classes, 3);
        assert_eq!(stats.average_attendance, 0.0);
    }
}
