mod college_admin;
mod parent;
mod student;
mod super_admin;
mod teacher;

pub use college_admin::CollegeAdmin;
pub use parent::Parent;
pub use student::Student;
pub use super_admin::SuperAdmin;
pub use teacher::Teacher;

use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Alert, PageHeader, SkeletonRows, StatCard, StatGrid, StatTone};

use crate::auth::use_session;
use crate::routes::{landing_route, Route};

/// Where `/` leads. `None` while the guard is still fetching the profile;
/// the generic dashboard once that fetch has failed.
pub(crate) fn home_target(role: Option<&str>, profile_known: bool, profile_failed: bool) -> Option<Route> {
    if profile_known {
        Some(landing_route(role))
    } else if profile_failed {
        Some(landing_route(None))
    } else {
        None
    }
}

/// `/`: send the user to their role's landing dashboard.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let role = session.role();
    let target = home_target(
        role.as_deref(),
        session.user().is_some(),
        session.profile_error().is_some(),
    );

    if let Some(route) = target {
        navigator().replace(route);
    }

    rsx! { SkeletonRows { rows: 4 } }
}

/// `/dashboard`: the signed-in role's dashboard without changing the URL.
/// Missing or unrecognized roles get the platform overview.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let role = session.role().as_deref().and_then(Role::parse);

    match role {
        Some(Role::CollegeAdmin) => rsx! { CollegeAdmin {} },
        Some(Role::Teacher) => rsx! { Teacher {} },
        Some(Role::Student) => rsx! { Student {} },
        Some(Role::Parent) => rsx! { Parent {} },
        Some(Role::SuperAdmin) | None => rsx! { SuperAdmin {} },
    }
}

/// One number on a dashboard.
#[derive(Clone, PartialEq)]
pub struct StatValue {
    pub label: &'static str,
    pub value: String,
    pub tone: StatTone,
}

impl StatValue {
    pub fn new(label: &'static str, value: impl ToString, tone: StatTone) -> Self {
        Self {
            label,
            value: value.to_string(),
            tone,
        }
    }
}

/// Header, optional section error and the stat grid shared by every
/// dashboard.
#[component]
pub fn DashboardShell(
    title: String,
    subtitle: String,
    stats: Vec<StatValue>,
    loading: bool,
    error: Option<String>,
    on_retry: EventHandler<()>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader { title, subtitle }

            if let Some(message) = error {
                Alert {
                    title: "Some statistics are unavailable",
                    message,
                    on_retry: move |_| on_retry.call(()),
                }
            }

            StatGrid {
                for stat in stats {
                    StatCard {
                        key: "{stat.label}",
                        label: stat.label,
                        value: stat.value,
                        tone: stat.tone,
                        loading,
                    }
                }
            }

            {children}
        }
    }
}

/// "Welcome back, Ada" or a neutral greeting before the profile is known.
pub fn use_greeting() -> String {
    let session = use_session();
    match session.user() {
        Some(user) if !user.first_name.trim().is_empty() => {
            format!("Welcome back, {}", user.first_name.trim())
        }
        _ => "Welcome back".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_waits_for_the_profile() {
        assert_eq!(home_target(None, false, false), None);
    }

    #[test]
    fn home_sends_known_roles_to_their_landing() {
        assert_eq!(home_target(Some("student"), true, false), Some(Route::Student {}));
        assert_eq!(home_target(Some("teacher"), true, true), Some(Route::Teacher {}));
    }

    #[test]
    fn home_falls_back_when_the_profile_fetch_failed() {
        assert_eq!(home_target(None, false, true), Some(Route::Dashboard {}));
    }
}
