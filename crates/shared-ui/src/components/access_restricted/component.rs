use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaShieldHalved;
use dioxus_free_icons::Icon;

/// Card rendered in place of a page the active role may not see.
#[component]
pub fn AccessRestricted(
    #[props(default = "Access Restricted".to_string())] title: String,
    message: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "access-restricted", role: "alert",
            div { class: "access-restricted-icon",
                Icon::<FaShieldHalved> { icon: FaShieldHalved, width: 40, height: 40 }
            }
            h2 { class: "access-restricted-title", "{title}" }
            p { class: "access-restricted-message", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_message() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                AccessRestricted { message: "Only administrators can access the officers management page." }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Access Restricted"));
        assert!(html.contains("Only administrators can access the officers management page."));
        assert!(html.contains("role=\"alert\""));
    }
}
