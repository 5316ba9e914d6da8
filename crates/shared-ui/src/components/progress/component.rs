use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Labelled bar with the percentage shown on the right. `value` is clamped
/// to 0..=100.
#[component]
pub fn ProgressBar(value: f64, #[props(default)] label: String) -> Element {
    let value = value.clamp(0.0, 100.0);
    rsx! {
        div { class: "progress-row",
            if !label.is_empty() {
                div { class: "progress-label-row",
                    span { class: "progress-label", "{label}" }
                    span { class: "progress-value", "{value:.0}%" }
                }
            }
            Progress { value: Some(value),
                ProgressIndicator {}
            }
        }
    }
}
