use pretty_assertions::assert_eq;
use shared_types::{
    is_allowed, menu_for, resolve_view, Page, Role, Screen, View, ViewAccess, ALL_PAGES,
    ALL_ROLES, MENU,
};

use crate::common;

#[test]
fn menu_entry_visible_iff_role_is_allowed() {
    for role in ALL_ROLES {
        let visible = menu_for(role);
        for entry in MENU {
            assert_eq!(
                visible.contains(&entry),
                entry.allowed_roles.contains(&role),
                "{} for {role}",
                entry.label
            );
        }
    }
}

#[test]
fn common_pages_are_offered_to_every_role() {
    let common_pages = [
        Page::Dashboard,
        Page::Applications,
        Page::Appointments,
        Page::Documents,
        Page::PassportScan,
        Page::Settings,
    ];
    for role in ALL_ROLES {
        let targets: Vec<Page> = menu_for(role).iter().map(|e| e.target).collect();
        for page in common_pages {
            assert!(targets.contains(&page), "{page} missing for {role}");
        }
    }
}

#[test]
fn portal_entries_follow_role() {
    assert_eq!(
        common::menu_labels(Role::Applicant),
        vec!["Dashboard", "Applications", "Appointments", "Documents", "Passport Scan", "Settings"]
    );
    assert_eq!(
        common::menu_labels(Role::Officer),
        vec![
            "Dashboard",
            "Applications",
            "Appointments",
            "Documents",
            "Passport Scan",
            "Officer Portal",
            "Settings"
        ]
    );
    assert_eq!(
        common::menu_labels(Role::Admin),
        vec![
            "Dashboard",
            "Applications",
            "Appointments",
            "Documents",
            "Passport Scan",
            "Admin Portal",
            "Officers",
            "Settings"
        ]
    );
}

#[test]
fn settings_is_always_last() {
    for role in ALL_ROLES {
        let menu = menu_for(role);
        assert_eq!(menu.last().map(|e| e.target), Some(Page::Settings));
    }
}

#[test]
fn dashboard_dispatches_on_role() {
    assert_eq!(resolve_view(Page::Dashboard, Role::Applicant), View::DefaultDashboard);
    assert_eq!(resolve_view(Page::Dashboard, Role::Officer), View::OfficerDashboard);
    assert_eq!(resolve_view(Page::Dashboard, Role::Admin), View::AdminDashboard);
}

#[test]
fn other_pages_resolve_independently_of_role() {
    for page in ALL_PAGES.into_iter().filter(|p| *p != Page::Dashboard) {
        let views: Vec<View> = ALL_ROLES.iter().map(|r| resolve_view(page, *r)).collect();
        assert!(views.windows(2).all(|w| w[0] == w[1]), "{page} varies by role");
    }
}

#[test]
fn officers_view_is_restricted_for_non_admins() {
    assert_eq!(View::Officers.access(Role::Admin), ViewAccess::Granted);
    assert_eq!(View::Officers.access(Role::Officer), ViewAccess::Restricted);
    assert_eq!(View::Officers.access(Role::Applicant), ViewAccess::Restricted);
}

#[test]
fn applicant_reaching_officers_gets_restricted_card() {
    let state = common::signed_in(Role::Applicant, Page::Officers);
    assert_eq!(state.page(), Page::Officers);
    assert_eq!(state.screen(), Screen::Shell(View::Officers));
    assert_eq!(View::Officers.access(state.role()), ViewAccess::Restricted);
}

#[test]
fn access_predicate_agrees_with_menu() {
    for role in ALL_ROLES {
        for entry in MENU {
            assert_eq!(is_allowed(role, entry.target), entry.visible_to(role));
        }
    }
}

#[test]
fn portal_left_open_after_role_switch_is_restricted() {
    let mut state = common::signed_in(Role::Admin, Page::AdminDashboard);
    state.set_role(Role::Applicant);
    assert_eq!(state.page(), Page::AdminDashboard);
    assert_eq!(state.screen(), Screen::Shell(View::AdminDashboard));
    assert_eq!(View::AdminDashboard.access(state.role()), ViewAccess::Restricted);

    let mut state = common::signed_in(Role::Officer, Page::OfficerDashboard);
    state.set_role(Role::Admin);
    assert_eq!(View::OfficerDashboard.access(state.role()), ViewAccess::Restricted);
}

#[test]
fn restricted_views_agree_with_the_menu() {
    for role in ALL_ROLES {
        for page in ALL_PAGES.into_iter().filter(|p| *p != Page::Dashboard) {
            let granted = resolve_view(page, role).access(role) == ViewAccess::Granted;
            assert_eq!(granted, is_allowed(role, page), "{page} for {role}");
        }
    }
}
