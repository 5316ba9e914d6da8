use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// Labelled text input. An `error` message renders under the field and marks
/// it invalid.
#[component]
pub fn TextField(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

/// Native `<select>` with the field styling. Children are `option` elements.
#[component]
pub fn SelectField(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", "{label}" }
            }
            select {
                class: "field-select",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Settings row: title and description on the left, a switch on the right.
#[component]
pub fn ToggleRow(
    title: String,
    #[props(default)] description: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "toggle-row",
            div { class: "toggle-row-text",
                span { class: "toggle-row-title", "{title}" }
                if !description.is_empty() {
                    span { class: "toggle-row-description", "{description}" }
                }
            }
            Switch {
                checked: Some(checked),
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb {}
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
    fn text_field_shows_error() {
        let html = render(|| {
            rsx! {
                TextField { label: "Email", value: "nope", error: Some("Enter a valid email address".to_string()) }
            }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("aria-invalid=\"true\""));
        assert!(html.contains("Enter a valid email address"));
    }

    #[test]
    fn text_field_without_error_is_valid() {
        let html = render(|| rsx! { TextField { label: "Name", value: "John Doe" } });
        assert!(html.contains("aria-invalid=\"false\""));
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn select_field_renders_options() {
        let html = render(|| {
            rsx! {
                SelectField { label: "Language", value: "en",
                    option { value: "en", "English" }
                    option { value: "fr", "French" }
                }
            }
        });
        assert!(html.contains("English"));
        assert!(html.contains("French"));
    }
}
