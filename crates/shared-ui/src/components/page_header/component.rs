use dioxus::prelude::*;

/// Title row at the top of every screen. Children render as the action group
/// on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_subtitle() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                PageHeader { title: "Documents", subtitle: "Manage your immigration documents" }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<h1 class=\"page-title\">Documents</h1>"));
        assert!(html.contains("Manage your immigration documents"));
    }
}
