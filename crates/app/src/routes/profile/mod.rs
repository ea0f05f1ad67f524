mod details_section;
mod security_section;

use crate::auth::use_session;
use dioxus::prelude::*;
use shared_types::{role_display_name, Role};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, PageHeader, TabContent, TabList,
    TabTrigger, Tabs,
};

use details_section::DetailsSection;
use security_section::SecuritySection;

/// Account page. Teachers get an editable profile and a password form;
/// every other role sees the cached session details.
#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let user = session.user();
    let role = session.role();
    let is_teacher = user.as_ref().and_then(|u| u.role()) == Some(Role::Teacher);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "profile-page",
            PageHeader { title: "Profile", subtitle: "Your account details" }

            if let Some(user) = user {
                Card { class: "profile-summary",
                    CardContent {
                        div { class: "profile-avatar", "{user.initials()}" }
                        div { class: "profile-identity",
                            h2 { class: "profile-name", "{user.display_name()}" }
                            p { class: "profile-email", "{user.email}" }
                            div { class: "profile-tags",
                                Badge { variant: BadgeVariant::Primary, {role_display_name(role.as_deref())} }
                                if let Some(college) = user.college_name.clone() {
                                    Badge { variant: BadgeVariant::Neutral, "{college}" }
                                }
                            }
                        }
                    }
                }
            }

            if is_teacher {
                Tabs { default_value: "details", horizontal: true,
                    TabList {
                        TabTrigger { value: "details", index: 0usize, "Details" }
                        TabTrigger { value: "security", index: 1usize, "Security" }
                    }
                    TabContent { value: "details", index: 0usize,
                        DetailsSection {}
                    }
                    TabContent { value: "security", index: 1usize,
                        SecuritySection {}
                    }
                }
            } else {
                Card {
                    CardHeader {
                        title: "Account",
                        description: "Contact your college administrator to change these details.",
                    }
                }
            }
        }
    }
}
