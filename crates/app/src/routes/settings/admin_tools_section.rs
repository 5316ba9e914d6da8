use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_types::settings::ADMIN_TOOLS;
use shared_ui::{use_toast, Button, ButtonVariant, ToastOptions};
use tracing::info;

/// Administrator-only system tools. The page decides visibility.
#[component]
pub fn AdminToolsSection() -> Element {
    let toast = use_toast();

    rsx! {
        hr { class: "settings-divider" }
        div { class: "admin-tools",
            h4 { class: "settings-subheading admin-tools-heading",
                Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                "Admin Settings"
            }
            for tool in ADMIN_TOOLS {
                Button {
                    key: "{tool}",
                    variant: ButtonVariant::Outline,
                    class: "admin-tool",
                    onclick: move |_| {
                        info!(tool, "admin tool opened");
                        toast.info(format!("{tool} opened"), ToastOptions::new());
                    },
                    "{tool}"
                }
            }
        }
    }
}
