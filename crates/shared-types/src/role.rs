//! Role table: every role's navigation menu, landing dashboard and label.
//!
//! All role-keyed dispatch in the client reads [`ROLE_PROFILES`]; nothing
//! else branches on the role string.

use serde::{Deserialize, Serialize};

/// The five CampusLink user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    CollegeAdmin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::CollegeAdmin,
        Role::Teacher,
        Role::Student,
        Role::Parent,
    ];

    /// Parse the wire value. Anything outside the enumeration is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "super_admin" => Some(Role::SuperAdmin),
            "college_admin" => Some(Role::CollegeAdmin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            "parent" => Some(Role::Parent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::CollegeAdmin => "college_admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }

    pub fn profile(&self) -> &'static RoleProfile {
        profile_for(*self)
    }
}

/// Icon shown next to a navigation entry. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Building,
    Users,
    Chart,
    Settings,
    Book,
    ClipboardList,
    CalendarCheck,
    Award,
    Bell,
    Wallet,
    Calendar,
    GraduationCap,
}

/// One entry of a role's navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

const fn item(label: &'static str, path: &'static str, icon: NavIcon) -> NavigationItem {
    NavigationItem { label, path, icon }
}

/// Everything the client derives from a role.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleProfile {
    pub role: Role,
    pub label: &'static str,
    /// Path of the role's landing dashboard.
    pub landing: &'static str,
    /// Ordered menu; the first entry is always the landing dashboard.
    pub menu: &'static [NavigationItem],
}

/// Landing path used when there is no usable role.
pub const GENERIC_DASHBOARD_PATH: &str = "/dashboard";

/// Paths every authenticated user may open regardless of role.
pub const ALWAYS_OPEN_PATHS: &[&str] = &["/", GENERIC_DASHBOARD_PATH, "/settings", "/profile"];

/// Menu for an absent or unrecognized role.
pub const DEFAULT_MENU: &[NavigationItem] =
    &[item("Dashboard", GENERIC_DASHBOARD_PATH, NavIcon::Dashboard)];

pub static ROLE_PROFILES: [RoleProfile; 5] = [
    RoleProfile {
        role: Role::SuperAdmin,
        label: "Super Admin",
        landing: "/super-admin",
        menu: &[
            item("Dashboard", "/super-admin", NavIcon::Dashboard),
            item("Colleges", "/records/colleges", NavIcon::Building),
            item("Users", "/records/users", NavIcon::Users),
            item("Reports", "/records/platform-reports", NavIcon::Chart),
            item("Settings", "/settings", NavIcon::Settings),
        ],
    },
    RoleProfile {
        role: Role::CollegeAdmin,
        label: "College Admin",
        landing: "/college-admin",
        menu: &[
            item("Dashboard", "/college-admin", NavIcon::Dashboard),
            item("Students", "/records/students", NavIcon::GraduationCap),
            item("Teachers", "/records/teachers", NavIcon::Users),
            item("Classes", "/records/classes", NavIcon::Book),
            item("Fees", "/records/fees", NavIcon::Wallet),
            item("Reports", "/records/college-reports", NavIcon::Chart),
        ],
    },
    RoleProfile {
        role: Role::Teacher,
        label: "Teacher",
        landing: "/teacher",
        menu: &[
            item("Dashboard", "/teacher", NavIcon::Dashboard),
            item("Classes", "/teacher/classes", NavIcon::Book),
            item("Assignments", "/teacher/assignments", NavIcon::ClipboardList),
            item("Attendance", "/teacher/attendance", NavIcon::CalendarCheck),
            item("Grades", "/teacher/grades", NavIcon::Award),
            item("Notifications", "/teacher/notifications", NavIcon::Bell),
        ],
    },
    RoleProfile {
        role: Role::Student,
        label: "Student",
        landing: "/student",
        menu: &[
            item("Dashboard", "/student", NavIcon::Dashboard),
            item("Courses", "/records/courses", NavIcon::Book),
            item("Assignments", "/records/my-assignments", NavIcon::ClipboardList),
            item("Grades", "/records/my-grades", NavIcon::Award),
            item("Schedule", "/records/schedule", NavIcon::Calendar),
        ],
    },
    RoleProfile {
        role: Role::Parent,
        label: "Parent",
        landing: "/parent",
        menu: &[
            item("Dashboard", "/parent", NavIcon::Dashboard),
            item("Children", "/records/children", NavIcon::GraduationCap),
            item("Attendance", "/records/child-attendance", NavIcon::CalendarCheck),
            item("Grades", "/records/child-grades", NavIcon::Award),
            item("Fees", "/records/child-fees", NavIcon::Wallet),
        ],
    },
];

pub fn profile_for(role: Role) -> &'static RoleProfile {
    match role {
        Role::SuperAdmin => &ROLE_PROFILES[0],
        Role::CollegeAdmin => &ROLE_PROFILES[1],
        Role::Teacher => &ROLE_PROFILES[2],
        Role::Student => &ROLE_PROFILES[3],
        Role::Parent => &ROLE_PROFILES[4],
    }
}

fn lookup(role: Option<&str>) -> Option<&'static RoleProfile> {
    role.and_then(Role::parse).map(profile_for)
}

/// Ordered navigation menu for a wire role value.
pub fn navigation_items_for(role: Option<&str>) -> &'static [NavigationItem] {
    lookup(role).map(|p| p.menu).unwrap_or(DEFAULT_MENU)
}

/// Human label for a wire role value, `"User"` when unrecognized.
pub fn role_display_name(role: Option<&str>) -> &'static str {
    lookup(role).map(|p| p.label).unwrap_or("User")
}

/// Landing dashboard path for a wire role value.
pub fn landing_path(role: Option<&str>) -> &'static str {
    lookup(role).map(|p| p.landing).unwrap_or(GENERIC_DASHBOARD_PATH)
}

/// Whether a role may open `path`.
///
/// Reachable paths are the always-open ones plus every menu path of the
/// role and anything nested below a menu path (e.g. `/teacher/classes/7`).
pub fn can_access(role: Option<&str>, path: &str) -> bool {
    let path = normalize_path(path);
    if ALWAYS_OPEN_PATHS.contains(&path) {
        return true;
    }
    navigation_items_for(role)
        .iter()
        .any(|item| item.path != "/" && is_under(path, item.path))
}

/// Strip the query string, fragment and any trailing slash.
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
