use crate::nav::use_navigation;
use dioxus::prelude::*;
use shared_types::{View, ViewAccess};
use shared_ui::AccessRestricted;

/// Renders `children` when the active role may see `view`, otherwise the
/// Access Restricted card with `message`.
#[component]
pub fn RoleGate(view: View, message: String, children: Element) -> Element {
    let nav = use_navigation();
    let role = nav.role();

    match view.access(role) {
        ViewAccess::Granted => rsx! { {children} },
        ViewAccess::Restricted => {
            tracing::warn!(role = %role, view = ?view, "restricted view rendered its fallback");
            rsx! { AccessRestricted { message } }
        }
    }
}
