use dioxus::prelude::*;

/// Colour tone of a badge. Status badges map their domain state onto one of
/// these; the sidebar uses `Accent` for menu counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    Outline,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
            BadgeTone::Info => "info",
            BadgeTone::Accent => "accent",
            BadgeTone::Outline => "outline",
        }
    }
}

/// Inline pill for statuses, priorities and counters.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged, {children} }
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
    fn renders_tone_attribute() {
        let html = render(|| rsx! { Badge { tone: BadgeTone::Danger, "Rejected" } });
        assert!(html.contains("data-tone=\"danger\""));
        assert!(html.contains("Rejected"));
    }

    #[test]
    fn default_tone_is_neutral() {
        let html = render(|| rsx! { Badge { "12" } });
        assert!(html.contains("data-tone=\"neutral\""));
    }
}
