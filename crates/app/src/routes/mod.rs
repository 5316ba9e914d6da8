pub mod applications;
pub mod appointments;
pub mod dashboard;
pub mod documents;
pub mod login;
pub mod officers;
pub mod passport_scan;
pub mod settings;

use crate::access_gate::RoleGate;
use crate::nav::use_navigation;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCheck, LdChevronsUpDown, LdCrown, LdFileText, LdFolderOpen, LdLayoutDashboard,
    LdLogOut, LdMenu, LdMoon, LdScanLine, LdSettings, LdShield, LdSun, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Page, View, ALL_ROLES};
use shared_ui::theme::ThemeState;
use shared_ui::{
    Badge, BadgeTone, Button, ButtonSize, ButtonVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger,
    InitialsAvatar, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuBadge, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarSeparator, SidebarTrigger,
};

const OFFICERS_RESTRICTED: &str = "Only administrators can access the officers management page.";
const OFFICER_PORTAL_RESTRICTED: &str = "Only immigration officers can access the officer portal.";
const ADMIN_PORTAL_RESTRICTED: &str = "Only administrators can access the admin portal.";

/// Signed-in shell: role-filtered sidebar, navbar and the mounted view.
#[component]
pub fn AppLayout(view: View) -> Element {
    let mut nav = use_navigation();
    let mut theme: ThemeState = use_context();

    let state = nav.snapshot();
    let role = state.role();
    let page = state.page();
    let menu = state.visible_menu();
    let mode = theme.mode();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        div { class: "sidebar-brand-mark",
                            Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                        }
                        div { class: "sidebar-brand-text",
                            span { class: "sidebar-brand-name", "Immigration Portal" }
                            span { class: "sidebar-brand-tagline", "Management System" }
                        }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup { heading: "Navigation",
                        SidebarMenu {
                            for entry in menu {
                                SidebarMenuItem { key: "{entry.target}",
                                    SidebarMenuButton {
                                        active: entry.target == page,
                                        onclick: move |_| nav.navigate(entry.target),
                                        MenuIcon { page: entry.target }
                                        span { "{entry.label}" }
                                        if let Some(badge) = entry.badge {
                                            SidebarMenuBadge { "{badge}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    DropdownMenu {
                        DropdownMenuTrigger {
                            div { class: "sidebar-user",
                                InitialsAvatar { initials: role.initials() }
                                div { class: "sidebar-user-text",
                                    span { class: "sidebar-user-name", "John Doe" }
                                    span { class: "sidebar-user-role", "{role.display_name()}" }
                                }
                                Icon::<LdChevronsUpDown> { icon: LdChevronsUpDown, width: 16, height: 16 }
                            }
                        }
                        DropdownMenuContent {
                            DropdownMenuLabel { "Switch Role" }
                            for (index, choice) in ALL_ROLES.into_iter().enumerate() {
                                DropdownMenuItem::<String> {
                                    key: "{choice}",
                                    value: choice.as_str().to_string(),
                                    index,
                                    on_select: move |_: String| nav.set_role(choice),
                                    span { class: "role-option", "{choice.display_name()}" }
                                    if choice == role {
                                        Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                                    }
                                }
                            }
                            DropdownMenuSeparator {}
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: ALL_ROLES.len(),
                                on_select: move |_: String| nav.logout(),
                                Icon::<LdLogOut> { icon: LdLogOut, width: 14, height: 14 }
                                "Sign out"
                            }
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "navbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                    }
                    h2 { class: "navbar-title", "{page.title()}" }
                    div { class: "navbar-spacer" }
                    Badge { tone: BadgeTone::Outline, "{role.display_name()}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| theme.toggle(),
                        if mode.is_dark() {
                            Icon::<LdSun> { icon: LdSun, width: 16, height: 16 }
                        } else {
                            Icon::<LdMoon> { icon: LdMoon, width: 16, height: 16 }
                        }
                        "{mode.toggle_label()}"
                    }
                }

                div { class: "page-content",
                    ViewContent { view }
                }
            }
        }
    }
}

/// The component mounted for `view`.
#[component]
fn ViewContent(view: View) -> Element {
    match view {
        View::DefaultDashboard => rsx! { dashboard::DefaultDashboard {} },
        View::OfficerDashboard => rsx! {
            RoleGate { view: View::OfficerDashboard, message: OFFICER_PORTAL_RESTRICTED,
                dashboard::officer::OfficerDashboard {}
            }
        },
        View::AdminDashboard => rsx! {
            RoleGate { view: View::AdminDashboard, message: ADMIN_PORTAL_RESTRICTED,
                dashboard::admin::AdminDashboard {}
            }
        },
        View::Applications => rsx! { applications::Applications {} },
        View::Appointments => rsx! { appointments::Appointments {} },
        View::Documents => rsx! { documents::Documents {} },
        View::Officers => rsx! {
            RoleGate { view: View::Officers, message: OFFICERS_RESTRICTED,
                officers::Officers {}
            }
        },
        View::Settings => rsx! { settings::Settings {} },
        View::PassportScan => rsx! { passport_scan::PassportScan {} },
    }
}

#[component]
fn MenuIcon(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Page::Applications => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        Page::Appointments => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        Page::Documents => rsx! { Icon::<LdFolderOpen> { icon: LdFolderOpen, width: 18, height: 18 } },
        Page::PassportScan => rsx! { Icon::<LdScanLine> { icon: LdScanLine, width: 18, height: 18 } },
        Page::OfficerDashboard => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        Page::AdminDashboard => rsx! { Icon::<LdCrown> { icon: LdCrown, width: 18, height: 18 } },
        Page::Officers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Page::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{resolve_view, NavigationState, Role};

    #[component]
    fn Mounted(state: NavigationState) -> Element {
        use_context_provider(|| Signal::new(state));
        rsx! {
            ViewContent { view: resolve_view(state.page, state.role) }
        }
    }

    /// Signs in as admin on `page`, then switches to `role` without
    /// navigating, and renders whatever view is left mounted.
    fn render_after_switch(page: Page, role: Role) -> String {
        let mut state = NavigationState::default();
        state.login();
        state.navigate(page);
        state.set_role(role);

        let mut dom = VirtualDom::new_with_props(Mounted, MountedProps { state });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn applicant_on_officers_page_sees_restricted_card() {
        let html = render_after_switch(Page::Officers, Role::Applicant);
        assert!(html.contains("Access Restricted"));
        assert!(html.contains(OFFICERS_RESTRICTED));
        assert!(!html.contains("Officers Management"));
    }

    #[test]
    fn stale_admin_portal_falls_back_after_role_switch() {
        let html = render_after_switch(Page::AdminDashboard, Role::Applicant);
        assert!(html.contains("Access Restricted"));
        assert!(html.contains(ADMIN_PORTAL_RESTRICTED));
    }

    #[test]
    fn stale_officer_portal_falls_back_for_admins() {
        let html = render_after_switch(Page::OfficerDashboard, Role::Admin);
        assert!(html.contains(OFFICER_PORTAL_RESTRICTED));
    }
}
