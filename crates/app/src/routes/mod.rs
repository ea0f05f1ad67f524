pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod records;
pub mod settings;
pub mod teacher;

use crate::auth::use_session;
use crate::use_services;
use client::{ApiError, GateState, GuardView};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAward, LdBell, LdBookOpen, LdBuilding, LdCalendar, LdCalendarCheck, LdClipboardList,
    LdEllipsis, LdFileText, LdGraduationCap, LdLayoutDashboard, LdSettings, LdShield, LdUsers,
    LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::{
    can_access, landing_path, navigation_items_for, role_display_name, NavIcon, SessionUser,
};
use shared_ui::{
    Alert, Badge, BadgeVariant, Card, CardContent, CardHeader, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, SkeletonRows,
};

use dashboard::{CollegeAdmin, Dashboard, Home, Parent, Student, SuperAdmin, Teacher};
use login::Login;
use not_found::NotFound;
use profile::Profile;
use records::Records;
use settings::Settings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/super-admin")]
    SuperAdmin {},
    #[route("/college-admin")]
    CollegeAdmin {},
    #[route("/teacher")]
    Teacher {},
    #[route("/student")]
    Student {},
    #[route("/parent")]
    Parent {},
    // Teacher workspace
    #[route("/teacher/classes")]
    TeacherClasses {},
    #[route("/teacher/classes/:id")]
    TeacherClassDetail { id: i64 },
    #[route("/teacher/assignments")]
    TeacherAssignments {},
    #[route("/teacher/attendance")]
    TeacherAttendance {},
    #[route("/teacher/grades")]
    TeacherGrades {},
    #[route("/teacher/notifications")]
    TeacherNotifications {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[route("/records/:resource")]
    Records { resource: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolve a menu or landing path to its route. Paths that do not parse
/// land on the generic dashboard.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| {
        tracing::warn!(path, "no route registered for path");
        Route::Dashboard {}
    })
}

/// Landing route for a wire role value.
pub fn landing_route(role: Option<&str>) -> Route {
    route_for(landing_path(role))
}

/// Gate for every protected route: placeholder while the session is being
/// read, login redirect when signed out, the outlet otherwise.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let services = use_services();
    let gate = session.gate;
    let mut profile_error = session.profile_error;
    let profile_attempt = session.profile_attempt;

    // A token without a usable persisted profile: ask the backend who we are.
    // Re-runs when a retry bumps `profile_attempt`.
    let store = session.store.clone();
    use_effect(move || {
        let attempt = *profile_attempt.read();
        let needs_profile = matches!(*gate.read(), GateState::Authenticated { user: None });
        if profile_error.peek().is_some() {
            profile_error.set(None);
        }
        if !needs_profile {
            return;
        }
        let api = services.api.clone();
        let store = store.clone();
        spawn(async move {
            match api.me().await {
                Ok(user) => store.set_user(user),
                // The session is gone and the guard is already redirecting.
                Err(ApiError::Unauthorized) => {}
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "could not load the signed-in profile");
                    profile_error.set(Some(err.user_message()));
                }
            }
        });
    });

    let view = gate.read().guard_view();
    match view {
        GuardView::Placeholder => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        GuardView::Login => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardView::Protected => rsx! { Outlet::<Route> {} },
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Chart => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        NavIcon::Book => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::ClipboardList => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        NavIcon::CalendarCheck => rsx! { Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 18, height: 18 } },
        NavIcon::Award => rsx! { Icon::<LdAward> { icon: LdAward, width: 18, height: 18 } },
        NavIcon::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        NavIcon::Wallet => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::GraduationCap => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 } },
    }
}

/// Whether `current` is `item_path` or nested below it. The landing
/// dashboard only matches itself so it is not lit on every teacher page.
fn is_active(current: &str, item_path: &str, landing: &str) -> bool {
    if item_path == landing {
        return current == item_path;
    }
    current == item_path
        || current
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Main app layout with the top navigation bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let session = use_session();

    let user = session.user();
    let role = session.role();
    let role = role.as_deref();
    let items = navigation_items_for(role);
    let landing = landing_path(role);
    let current_path = route.to_string();
    let links: Vec<_> = items
        .iter()
        .map(|item| {
            let class = if is_active(&current_path, item.path, landing) {
                "navbar-link active"
            } else {
                "navbar-link"
            };
            (*item, class)
        })
        .collect();
    let role_label = role_display_name(role);
    let allowed = can_access(role, &current_path);
    let profile_pending = user.is_none();
    let profile_error = session.profile_error();
    let mut profile_attempt = session.profile_attempt;

    let display_name = user
        .as_ref()
        .map(SessionUser::display_name)
        .unwrap_or_default();
    let initials = user.as_ref().map(SessionUser::initials).unwrap_or_default();
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let college = user.as_ref().and_then(|u| u.college_name.clone());

    let logout_session = session.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-navbar",
                Link { to: landing_route(role), class: "navbar-brand",
                    span { class: "navbar-brand-mark", "CL" }
                    span { class: "navbar-brand-name", "CampusLink" }
                }

                nav { class: "navbar-links",
                    for (item, class) in links {
                        Link {
                            key: "{item.path}",
                            to: route_for(item.path),
                            class,
                            {nav_icon(item.icon)}
                            span { "{item.label}" }
                        }
                    }
                }

                // Overflow menu for narrow screens
                div { class: "navbar-mobile",
                    DropdownMenu {
                        DropdownMenuTrigger {
                            Icon::<LdEllipsis> { icon: LdEllipsis, width: 20, height: 20 }
                        }
                        DropdownMenuContent {
                            for (index, item) in items.iter().enumerate() {
                                DropdownMenuItem::<String> {
                                    key: "{item.path}",
                                    value: item.path.to_string(),
                                    index,
                                    on_select: move |path: String| {
                                        navigator().push(route_for(&path));
                                    },
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }

                div { class: "navbar-spacer" }

                if let Some(college) = college {
                    span { class: "navbar-college", "{college}" }
                }
                Badge { variant: BadgeVariant::Primary, "{role_label}" }

                DropdownMenu {
                    DropdownMenuTrigger {
                        span { class: "navbar-avatar", "{initials}" }
                    }
                    DropdownMenuContent {
                        DropdownMenuLabel {
                            div { class: "navbar-user-name", "{display_name}" }
                            div { class: "navbar-user-email", "{email}" }
                        }
                        DropdownMenuSeparator {}
                        DropdownMenuItem::<String> {
                            value: "profile".to_string(),
                            index: 0usize,
                            on_select: move |_: String| {
                                navigator().push(Route::Profile {});
                            },
                            "Profile"
                        }
                        DropdownMenuItem::<String> {
                            value: "settings".to_string(),
                            index: 1usize,
                            on_select: move |_: String| {
                                navigator().push(Route::Settings {});
                            },
                            "Settings"
                        }
                        DropdownMenuSeparator {}
                        DropdownMenuItem::<String> {
                            value: "logout".to_string(),
                            index: 2usize,
                            on_select: move |_: String| {
                                logout_session.logout();
                                navigator().replace(Route::Login {});
                            },
                            "Sign Out"
                        }
                    }
                }
            }

            main { class: "page-content",
                if allowed {
                    if profile_error.is_some() {
                        ProfileStatus {
                            error: profile_error.clone(),
                            on_retry: move |_| profile_attempt += 1,
                        }
                    }
                    Outlet::<Route> {}
                } else if profile_pending {
                    ProfileStatus {
                        error: profile_error.clone(),
                        on_retry: move |_| profile_attempt += 1,
                    }
                } else {
                    AccessDenied { home: landing_route(role) }
                }
            }
        }
    }
}

/// Placeholder while the guard fetches the signed-in profile, or the reason
/// it could not with a way to try again.
#[component]
fn ProfileStatus(error: Option<String>, on_retry: EventHandler<()>) -> Element {
    match error {
        Some(message) => rsx! {
            Alert {
                title: "Could not load your profile",
                message,
                on_retry: move |_| on_retry.call(()),
            }
        },
        None => rsx! { SkeletonRows { rows: 4 } },
    }
}

/// Shown in place of a page the signed-in role cannot open.
#[component]
fn AccessDenied(home: Route) -> Element {
    rsx! {
        div { class: "access-denied",
            Card {
                CardHeader {
                    title: "Access denied",
                    description: "Your account does not have access to this page.",
                    Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                }
                CardContent {
                    Link { to: home, class: "access-denied-link", "Back to your dashboard" }
                }
            }
        }
    }
}

// Teacher workspace route components

#[component]
fn TeacherClasses() -> Element {
    teacher::classes::ClassListPage()
}

#[component]
fn TeacherClassDetail(id: i64) -> Element {
    rsx! { teacher::class_detail::ClassDetailPage { id } }
}

#[component]
fn TeacherAssignments() -> Element {
    teacher::assignments::AssignmentsPage()
}

#[component]
fn TeacherAttendance() -> Element {
    teacher::attendance::AttendancePage()
}

#[component]
fn TeacherGrades() -> Element {
    teacher::grades::GradesPage()
}

#[component]
fn TeacherNotifications() -> Element {
    teacher::notifications::NotificationsPage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Role, ROLE_PROFILES};

    #[test]
    fn every_menu_path_has_a_route() {
        for profile in ROLE_PROFILES.iter() {
            for item in profile.menu {
                assert_eq!(
                    route_for(item.path).to_string(),
                    item.path,
                    "{} menu entry {}",
                    profile.label,
                    item.label
                );
            }
        }
    }

    #[test]
    fn landing_routes_match_roles() {
        assert_eq!(landing_route(Some("student")), Route::Student {});
        assert_eq!(landing_route(Some("teacher")), Route::Teacher {});
        assert_eq!(landing_route(Some("janitor")), Route::Dashboard {});
        assert_eq!(landing_route(None), Route::Dashboard {});
        for role in Role::ALL {
            assert_eq!(landing_route(Some(role.as_str())).to_string(), role.profile().landing);
        }
    }

    #[test]
    fn records_paths_parse_with_resource() {
        assert_eq!(
            route_for("/records/my-grades"),
            Route::Records { resource: "my-grades".to_string() }
        );
        assert_eq!(
            route_for("/teacher/classes/12"),
            Route::TeacherClassDetail { id: 12 }
        );
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn failed_profile_fetch_shows_message_and_retry() {
        fn app() -> Element {
            rsx! {
                ProfileStatus {
                    error: Some("The server sent an unexpected response.".to_string()),
                    on_retry: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Could not load your profile"));
        assert!(html.contains("The server sent an unexpected response."));
        assert!(html.contains("Retry"));
        assert!(!html.contains("cl-skeleton"));
    }

    #[test]
    fn pending_profile_shows_skeleton() {
        fn app() -> Element {
            rsx! { ProfileStatus { error: None, on_retry: move |_| {} } }
        }
        let html = render(app);
        assert!(html.contains("cl-skeleton"));
        assert!(!html.contains("Retry"));
    }

    #[test]
    fn landing_item_is_only_active_on_itself() {
        assert!(is_active("/teacher", "/teacher", "/teacher"));
        assert!(!is_active("/teacher/classes", "/teacher", "/teacher"));
        assert!(is_active("/teacher/classes/4", "/teacher/classes", "/teacher"));
        assert!(!is_active("/teacher/classesx", "/teacher/classes", "/teacher"));
    }
}
