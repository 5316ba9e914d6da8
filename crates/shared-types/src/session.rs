use serde::{Deserialize, Serialize};

use crate::config::{LogoutPolicy, SessionConfig};
use crate::navigation::{menu_for, resolve_view, MenuEntry, View};
use crate::page::Page;
use crate::role::Role;

/// What the top-level component renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Shell(View),
}

/// The whole of the dashboard's global UI state.
///
/// Owned by the root component and shared through context. Only `login`,
/// `logout`, `set_role` and `navigate` mutate it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NavigationState {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub page: Page,
}

impl NavigationState {
    /// Unauthenticated state starting at the configured role and page.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            authenticated: false,
            role: config.default_role,
            page: config.default_page,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Any attempt succeeds. Role and page are left as they were.
    pub fn login(&mut self) {
        self.authenticated = true;
    }

    /// Clears the session flag. Under [`LogoutPolicy::Reset`] the role and
    /// page also return to the configured defaults.
    pub fn logout(&mut self, config: &SessionConfig) {
        self.authenticated = false;
        if config.logout_policy == LogoutPolicy::Reset {
            self.role = config.default_role;
            self.page = config.default_page;
        }
    }

    /// Idempotent. Never touches the current page.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Replaces the current page. Access is decided by the mounted view,
    /// not here.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn visible_menu(&self) -> Vec<MenuEntry> {
        menu_for(self.role)
    }

    pub fn screen(&self) -> Screen {
        if self.authenticated {
            Screen::Shell(resolve_view(self.page, self.role))
        } else {
            Screen::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state() {
        let state = NavigationState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), Role::Admin);
        assert_eq!(state.page(), Page::Dashboard);
        assert_eq!(state.screen(), Screen::Login);
    }

    #[test]
    fn login_keeps_role_and_page() {
        let mut state = NavigationState::default();
        state.set_role(Role::Officer);
        state.navigate(Page::Documents);
        state.login();
        assert_eq!(state.screen(), Screen::Shell(View::Documents));
        assert_eq!(state.role(), Role::Officer);
    }

    #[test]
    fn logout_retain_keeps_role_and_page() {
        let config = SessionConfig::default();
        let mut state = NavigationState::default();
        state.login();
        state.set_role(Role::Applicant);
        state.navigate(Page::Settings);
        state.logout(&config);
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), Role::Applicant);
        assert_eq!(state.page(), Page::Settings);
    }

    #[test]
    fn logout_reset_restores_defaults() {
        let config = SessionConfig {
            logout_policy: LogoutPolicy::Reset,
            ..SessionConfig::default()
        };
        let mut state = NavigationState::from_config(&config);
        state.login();
        state.set_role(Role::Officer);
        state.navigate(Page::Appointments);
        state.logout(&config);
        assert_eq!(state, NavigationState::from_config(&config));
    }

    #[test]
    fn state_serializes_with_identifiers() {
        let state = NavigationState {
            authenticated: true,
            role: Role::Officer,
            page: Page::PassportScan,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"authenticated":true,"role":"officer","page":"passport-scan"}"#
        );
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let state: NavigationState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, NavigationState::default());
    }
}
