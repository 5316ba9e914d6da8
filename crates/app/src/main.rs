use std::sync::OnceLock;

use dioxus::prelude::*;
use shared_types::{AppConfig, NavigationState, Screen};
use shared_ui::theme::ThemeState;

mod access_gate;
mod download;
mod format_helpers;
mod nav;
pub mod notify;
mod routes;
mod simulate;
mod status_tone;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const PORTAL_CSS: Asset = asset!("/assets/portal.css");

const CONFIG_TOML: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Runtime configuration, parsed once from the embedded `config.toml`.
/// A malformed file is logged and replaced by the defaults.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "config.toml rejected, falling back to defaults");
            AppConfig::default()
        }
    })
}

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = config();

    use_hook(|| {
        tracing::info!(
            platform = client_platform(),
            role = %config.session.default_role,
            page = %config.session.default_page,
            "immigration portal starting"
        );
    });

    use_context_provider(|| config.features);
    use_context_provider(ThemeState::new);
    let state = use_context_provider(|| Signal::new(NavigationState::from_config(&config.session)));

    let screen = state.read().screen();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            {match screen {
                Screen::Login => rsx! { routes::login::Login {} },
                Screen::Shell(view) => rsx! { routes::AppLayout { view } },
            }}
        }
    }
}
