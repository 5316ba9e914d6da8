use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdGlobe;
use dioxus_free_icons::Icon;
use shared_types::settings::{Language, ProfileSettings};
use shared_ui::theme::ThemeState;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, SelectField, ToggleRow};

/// System preferences: dark mode and display language. The admin tools
/// block is passed in as children.
#[component]
pub fn PreferencesSection(profile: Signal<ProfileSettings>, children: Element) -> Element {
    let mut theme: ThemeState = use_context();
    let mut profile = profile;
    let language = profile.read().language;

    rsx! {
        Card {
            CardHeader {
                CardTitle { class: "settings-card-title",
                    Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                    "System Preferences"
                }
                CardDescription { "Customize your experience" }
            }
            CardContent { class: "settings-stack",
                ToggleRow {
                    title: "Dark Mode",
                    description: "Switch to dark theme",
                    checked: theme.mode().is_dark(),
                    on_change: move |v: bool| theme.set_dark(v),
                }
                SelectField {
                    label: "Language",
                    value: language.as_str(),
                    onchange: move |e: Event<FormData>| {
                        profile.write().language = Language::parse(&e.value());
                    },
                    for lang in Language::ALL {
                        option { key: "{lang.as_str()}", value: lang.as_str(), "{lang.label()}" }
                    }
                }
                {children}
            }
        }
    }
}
