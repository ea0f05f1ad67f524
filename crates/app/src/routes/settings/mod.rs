mod appearance_section;

use crate::auth::use_session;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::role_display_name;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader};

use appearance_section::AppearanceSection;

#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let user = session.user();
    let role_label = role_display_name(session.role().as_deref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            PageHeader { title: "Settings", subtitle: "Personalize CampusLink on this device" }

            AppearanceSection {}

            Card {
                CardHeader { title: "Session" }
                CardContent {
                    if let Some(user) = user {
                        p { class: "settings-session",
                            "Signed in as "
                            strong { "{user.email}" }
                            " ({role_label})"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            session.logout();
                            navigator().replace(Route::Login {});
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}
