//! Role-gated navigation: which pages a role may reach, which menu entries it
//! sees, and which view mounts for a given page.

use serde::{Deserialize, Serialize};

use crate::page::Page;
use crate::role::Role;

const EVERY_ROLE: &[Role] = &[Role::Applicant, Role::Officer, Role::Admin];
const OFFICER_ONLY: &[Role] = &[Role::Officer];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Roles allowed to reach `page`.
pub fn allowed_roles(page: Page) -> &'static [Role] {
    match page {
        Page::OfficerDashboard => OFFICER_ONLY,
        Page::AdminDashboard | Page::Officers => ADMIN_ONLY,
        Page::Dashboard
        | Page::Applications
        | Page::Appointments
        | Page::Documents
        | Page::Settings
        | Page::PassportScan => EVERY_ROLE,
    }
}

/// Shared access predicate for the sidebar filter and in-page guards.
pub fn is_allowed(role: Role, page: Page) -> bool {
    allowed_roles(page).contains(&role)
}

/// A sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: Page,
    pub allowed_roles: &'static [Role],
    pub badge: Option<&'static str>,
}

impl MenuEntry {
    const fn new(label: &'static str, target: Page, allowed_roles: &'static [Role]) -> Self {
        Self {
            label,
            target,
            allowed_roles,
            badge: None,
        }
    }

    const fn with_badge(mut self, badge: &'static str) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn visible_to(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// Full menu in display order. Settings is always last.
pub const MENU: [MenuEntry; 9] = [
    MenuEntry::new("Dashboard", Page::Dashboard, EVERY_ROLE),
    MenuEntry::new("Applications", Page::Applications, EVERY_ROLE).with_badge("12"),
    MenuEntry::new("Appointments", Page::Appointments, EVERY_ROLE),
    MenuEntry::new("Documents", Page::Documents, EVERY_ROLE),
    MenuEntry::new("Passport Scan", Page::PassportScan, EVERY_ROLE),
    MenuEntry::new("Officer Portal", Page::OfficerDashboard, OFFICER_ONLY).with_badge("New"),
    MenuEntry::new("Admin Portal", Page::AdminDashboard, ADMIN_ONLY).with_badge("Pro"),
    MenuEntry::new("Officers", Page::Officers, ADMIN_ONLY),
    MenuEntry::new("Settings", Page::Settings, EVERY_ROLE),
];

/// Entries visible to `role`, preserving menu order.
pub fn menu_for(role: Role) -> Vec<MenuEntry> {
    MENU.iter().copied().filter(|e| e.visible_to(role)).collect()
}

/// The component mounted in the content area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    DefaultDashboard,
    OfficerDashboard,
    AdminDashboard,
    Applications,
    Appointments,
    Documents,
    Officers,
    Settings,
    PassportScan,
}

/// Whether a mounted view shows its content or the restricted card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAccess {
    Granted,
    Restricted,
}

impl View {
    /// The role-restricted page whose access rule this view inherits.
    ///
    /// `Dashboard` only resolves to a portal view for that portal's own
    /// role, so checking the portal page covers both ways in.
    fn gated_page(&self) -> Option<Page> {
        match self {
            View::Officers => Some(Page::Officers),
            View::OfficerDashboard => Some(Page::OfficerDashboard),
            View::AdminDashboard => Some(Page::AdminDashboard),
            _ => None,
        }
    }

    /// Re-checked at render time, so a view left mounted after a role
    /// switch falls back to the restricted card.
    pub fn access(&self, role: Role) -> ViewAccess {
        match self.gated_page() {
            Some(page) if !is_allowed(role, page) => ViewAccess::Restricted,
            _ => ViewAccess::Granted,
        }
    }
}

/// Pure mapping from the current page and role to the mounted view.
///
/// `Dashboard` dispatches on role. Every other page maps one-to-one.
pub fn resolve_view(page: Page, role: Role) -> View {
    match page {
        Page::Dashboard => match role {
            Role::Officer => View::OfficerDashboard,
            Role::Admin => View::AdminDashboard,
            Role::Applicant => View::DefaultDashboard,
        },
        Page::OfficerDashboard => View::OfficerDashboard,
        Page::AdminDashboard => View::AdminDashboard,
        Page::Applications => View::Applications,
        Page::Appointments => View::Appointments,
        Page::Documents => View::Documents,
        Page::Officers => View::Officers,
        Page::Settings => View::Settings,
        Page::PassportScan => View::PassportScan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ALL_PAGES;
    use crate::role::ALL_ROLES;

    #[test]
    fn menu_entries_match_page_access() {
        for entry in MENU {
            assert_eq!(entry.allowed_roles, allowed_roles(entry.target));
        }
    }

    #[test]
    fn every_page_reachable_by_some_role() {
        for page in ALL_PAGES {
            assert!(ALL_ROLES.iter().any(|r| is_allowed(*r, page)), "{page}");
        }
    }

    #[test]
    fn officer_menu_order() {
        let labels: Vec<_> = menu_for(Role::Officer).iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Applications",
                "Appointments",
                "Documents",
                "Passport Scan",
                "Officer Portal",
                "Settings",
            ]
        );
    }

    #[test]
    fn applicant_menu_has_six_entries() {
        assert_eq!(menu_for(Role::Applicant).len(), 6);
    }

    #[test]
    fn badges() {
        let badge = |page: Page| MENU.iter().find(|e| e.target == page).and_then(|e| e.badge);
        assert_eq!(badge(Page::Applications), Some("12"));
        assert_eq!(badge(Page::OfficerDashboard), Some("New"));
        assert_eq!(badge(Page::AdminDashboard), Some("Pro"));
        assert_eq!(badge(Page::Settings), None);
    }

    #[test]
    fn portal_views_restricted_to_their_role() {
        assert_eq!(View::AdminDashboard.access(Role::Applicant), ViewAccess::Restricted);
        assert_eq!(View::AdminDashboard.access(Role::Officer), ViewAccess::Restricted);
        assert_eq!(View::AdminDashboard.access(Role::Admin), ViewAccess::Granted);
        assert_eq!(View::OfficerDashboard.access(Role::Admin), ViewAccess::Restricted);
        assert_eq!(View::OfficerDashboard.access(Role::Officer), ViewAccess::Granted);
    }

    #[test]
    fn dashboard_dispatch_always_grants_its_view() {
        for role in ALL_ROLES {
            assert_eq!(resolve_view(Page::Dashboard, role).access(role), ViewAccess::Granted);
        }
    }

    #[test]
    fn shared_views_never_restricted() {
        for role in ALL_ROLES {
            for view in [View::DefaultDashboard, View::Applications, View::Settings] {
                assert_eq!(view.access(role), ViewAccess::Granted);
            }
        }
    }

    #[test]
    fn officers_view_restricted_for_non_admins() {
        assert_eq!(View::Officers.access(Role::Officer), ViewAccess::Restricted);
        assert_eq!(View::Officers.access(Role::Admin), ViewAccess::Granted);
    }
}
