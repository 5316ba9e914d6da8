use pretty_assertions::assert_eq;
use shared_types::{
    LogoutPolicy, NavigationState, Page, Role, Screen, SessionConfig, View, ALL_PAGES, ALL_ROLES,
};

use crate::common;

#[test]
fn unauthenticated_always_renders_login() {
    for role in ALL_ROLES {
        for page in ALL_PAGES {
            let state = NavigationState {
                authenticated: false,
                role,
                page,
            };
            assert_eq!(state.screen(), Screen::Login);
        }
    }
}

#[test]
fn login_keeps_the_role_chosen_beforehand() {
    let mut state = NavigationState::from_config(&SessionConfig::default());
    state.set_role(Role::Officer);
    state.login();
    assert!(state.is_authenticated());
    assert_eq!(state.screen(), Screen::Shell(View::OfficerDashboard));
}

#[test]
fn logout_signs_out() {
    let mut state = common::signed_in(Role::Admin, Page::Documents);
    state.logout(&common::session_config(LogoutPolicy::Retain));
    assert!(!state.is_authenticated());
    assert_eq!(state.screen(), Screen::Login);
}

#[test]
fn retained_session_resumes_where_it_left_off() {
    let mut state = common::signed_in(Role::Applicant, Page::Appointments);
    state.logout(&common::session_config(LogoutPolicy::Retain));
    state.login();
    assert_eq!(state.role(), Role::Applicant);
    assert_eq!(state.page(), Page::Appointments);
}

#[test]
fn reset_policy_restores_defaults() {
    let mut state = common::signed_in(Role::Applicant, Page::Appointments);
    state.logout(&common::session_config(LogoutPolicy::Reset));
    assert_eq!(state.role(), Role::Admin);
    assert_eq!(state.page(), Page::Dashboard);
}

#[test]
fn role_switch_keeps_current_page() {
    let mut state = common::signed_in(Role::Admin, Page::Dashboard);
    assert_eq!(state.screen(), Screen::Shell(View::AdminDashboard));

    state.set_role(Role::Applicant);
    assert_eq!(state.page(), Page::Dashboard);
    assert_eq!(state.screen(), Screen::Shell(View::DefaultDashboard));
}

#[test]
fn role_switch_on_restricted_page_does_not_redirect() {
    let mut state = common::signed_in(Role::Admin, Page::Officers);
    state.set_role(Role::Officer);
    assert_eq!(state.page(), Page::Officers);
}

#[test]
fn setting_the_same_role_twice_is_idempotent() {
    let mut once = common::signed_in(Role::Officer, Page::Settings);
    once.set_role(Role::Admin);
    let mut twice = once;
    twice.set_role(Role::Admin);
    assert_eq!(once, twice);
}

#[test]
fn navigation_state_serializes_with_kebab_pages() {
    let state = common::signed_in(Role::Officer, Page::PassportScan);
    let json = serde_json::to_value(state).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"authenticated": true, "role": "officer", "page": "passport-scan"})
    );
}

#[test]
fn shipped_config_starts_as_admin_on_dashboard() {
    let config = common::shipped_config();
    let state = NavigationState::from_config(&config.session);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), Role::Admin);
    assert_eq!(state.page(), Page::Dashboard);
    assert_eq!(config.session.logout_policy, LogoutPolicy::Retain);
}

#[test]
fn unknown_config_identifiers_fall_back_to_defaults() {
    let config = shared_types::AppConfig::from_toml(
        r#"
        [session]
        default_role = "superuser"
        default_page = "reports"
        "#,
    )
    .unwrap();
    assert_eq!(config.session.default_role, Role::Admin);
    assert_eq!(config.session.default_page, Page::Dashboard);
}
