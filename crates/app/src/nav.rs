use dioxus::prelude::*;
use shared_types::{NavigationState, Page, Role};
use tracing::{debug, info};

/// Handle on the shared navigation state.
///
/// Every mutation goes through one of the four methods below, each a thin
/// wrapper over the matching `NavigationState` operation plus a log line.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigation {
    state: Signal<NavigationState>,
}

/// Hook to access the navigation state provided by `App`.
pub fn use_navigation() -> Navigation {
    Navigation {
        state: use_context::<Signal<NavigationState>>(),
    }
}

impl Navigation {
    pub fn snapshot(&self) -> NavigationState {
        *self.state.read()
    }

    pub fn role(&self) -> Role {
        self.state.read().role()
    }

    pub fn page(&self) -> Page {
        self.state.read().page()
    }

    pub fn login(&mut self) {
        self.state.write().login();
        let state = self.snapshot();
        info!(role = %state.role, page = %state.page, "signed in");
        trace_state(&state);
    }

    pub fn logout(&mut self) {
        self.state.write().logout(&crate::config().session);
        let state = self.snapshot();
        info!(
            policy = ?crate::config().session.logout_policy,
            "signed out"
        );
        trace_state(&state);
    }

    pub fn set_role(&mut self, role: Role) {
        let previous = self.role();
        if previous == role {
            return;
        }
        self.state.write().set_role(role);
        info!(from = %previous, to = %role, "role switched");
    }

    pub fn navigate(&mut self, page: Page) {
        let previous = self.page();
        self.state.write().navigate(page);
        if previous != page {
            info!(from = %previous, to = %page, "navigated");
        }
    }
}

fn trace_state(state: &NavigationState) {
    match serde_json::to_string(state) {
        Ok(json) => debug!(state = %json, "navigation state"),
        Err(e) => debug!(error = %e, "navigation state not serializable"),
    }
}
