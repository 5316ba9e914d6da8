use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Circle showing a person's initials, used by the account menu and the
/// officer roster.
#[component]
pub fn InitialsAvatar(initials: String, #[props(default)] large: bool) -> Element {
    rsx! {
        Avatar { "data-size": if large { "lg" } else { "md" },
            AvatarFallback { "{initials}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_avatar_renders_the_portal_avatar() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                InitialsAvatar { initials: "SJ", large: true }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("portal-avatar"));
    }
}
