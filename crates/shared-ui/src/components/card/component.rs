use dioxus::prelude::*;

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Bordered surface used for every panel in the portal.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-title", attributes);
    rsx! {
        h3 { ..merged, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-description", attributes);
    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-content", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Headline metric tile: a title, a large value, a caption and an optional
/// trend line rendered in the success colour.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] description: String,
    #[props(default)] trend: Option<String>,
    #[props(default)] icon: Element,
) -> Element {
    rsx! {
        Card { class: "stat-card",
            div { class: "stat-card-top",
                span { class: "stat-card-title", "{title}" }
                span { class: "stat-card-icon", {icon} }
            }
            div { class: "stat-card-value", "{value}" }
            if !description.is_empty() {
                p { class: "stat-card-description", "{description}" }
            }
            if let Some(trend) = trend {
                p { class: "stat-card-trend", "{trend}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn stat_card_renders_value_and_trend() {
        let html = render(|| {
            rsx! {
                StatCard {
                    title: "Total Applications",
                    value: "2,350",
                    description: "Across all visa types",
                    trend: Some("+12% from last month".to_string()),
                }
            }
        });
        assert!(html.contains("Total Applications"));
        assert!(html.contains("2,350"));
        assert!(html.contains("stat-card-trend"));
    }

    #[test]
    fn stat_card_without_trend_omits_trend_line() {
        let html = render(|| rsx! { StatCard { title: "Pending", value: "4" } });
        assert!(!html.contains("stat-card-trend"));
        assert!(!html.contains("stat-card-description"));
    }

    #[test]
    fn card_merges_extra_class() {
        let html = render(|| rsx! { Card { class: "chart-card", "body" } });
        assert!(html.contains("card"));
        assert!(html.contains("chart-card"));
    }
}
