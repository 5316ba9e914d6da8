use shared_types::{AppConfig, LogoutPolicy, NavigationState, Page, Role, SessionConfig};

/// The config file the app embeds.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

pub fn shipped_config() -> AppConfig {
    AppConfig::from_toml(CONFIG_TOML).expect("shipped config.toml must parse")
}

pub fn session_config(policy: LogoutPolicy) -> SessionConfig {
    SessionConfig {
        logout_policy: policy,
        ..SessionConfig::default()
    }
}

/// A state that has passed the login screen with the given role and page.
pub fn signed_in(role: Role, page: Page) -> NavigationState {
    let mut state = NavigationState::from_config(&SessionConfig::default());
    state.login();
    state.set_role(role);
    state.navigate(page);
    state
}

/// Labels of the menu entries `role` sees, in order.
pub fn menu_labels(role: Role) -> Vec<&'static str> {
    shared_types::menu_for(role).iter().map(|e| e.label).collect()
}
