use client::{ApiClient, SessionStore};
use dioxus::prelude::*;
use shared_types::{default_store, AppConfig};
use shared_ui::theme::{use_theme_provider, ThemeKey, ThemeRoot, ThemeStore};

mod auth;
mod format_helpers;
mod routes;
mod scope;
use auth::use_session_provider;
use routes::Route;

/// Backend access and configuration shared across all routes.
#[derive(Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub config: AppConfig,
}

/// Hook to access the shared services.
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

const CONFIG_TOML: &str = include_str!("../../../config.toml");
const APP_BASE: Asset = asset!("/assets/app.css");

/// Embedded `config.toml` with the build-time API override applied.
pub fn load_config() -> AppConfig {
    AppConfig::from_toml_or_default(CONFIG_TOML)
        .with_base_url_override(option_env!("CAMPUSLINK_API_URL"))
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let storage = use_hook(default_store);

    let session = use_hook({
        let storage = storage.clone();
        move || SessionStore::new(storage)
    });
    let api = use_hook({
        let session = session.clone();
        let base_url = config.api.base_url.clone();
        move || {
            tracing::info!(%base_url, "campuslink client starting");
            ApiClient::new(base_url, session)
        }
    });

    let themes = use_hook({
        let fallback = ThemeKey::from_key_or_default(&config.ui.default_theme);
        move || ThemeStore::with_fallback(storage, fallback)
    });

    use_session_provider(session);
    use_theme_provider(themes);
    use_context_provider(|| AppServices {
        api,
        config: config.clone(),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_BASE }
        ThemeRoot {
            shared_ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
