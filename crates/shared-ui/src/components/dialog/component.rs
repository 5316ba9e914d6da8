use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

fn portal_class(attributes: &mut Vec<Attribute>, class: &'static str) {
    attributes.push(Attribute::new("class", class, None, false));
}

/// Modal root. Closes on overlay click and Escape.
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    portal_class(&mut props.attributes, "portal-dialog-overlay");
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    props
        .class
        .get_or_insert_with(|| "portal-dialog-content".to_string());
    rsx! { prim::DialogContent { ..props } }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    portal_class(&mut props.attributes, "portal-dialog-title");
    rsx! { prim::DialogTitle { ..props } }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    portal_class(&mut props.attributes, "portal-dialog-description");
    rsx! { prim::DialogDescription { ..props } }
}
