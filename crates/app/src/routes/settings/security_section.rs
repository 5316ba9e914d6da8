use super::FieldErrors;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_types::settings::SecuritySettings;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    TextField, ToastOptions, ToggleRow,
};

/// Parse the timeout input. Anything that is not a whole number reads as 0
/// and is rejected by the range check on save.
fn parse_timeout(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn SecuritySection(security: Signal<SecuritySettings>, field_errors: Signal<FieldErrors>) -> Element {
    let toast = use_toast();
    let mut security = security;
    let current = security.read().clone();
    let timeout_error = field_errors.read().get("session_timeout_minutes").cloned();

    rsx! {
        Card {
            CardHeader {
                CardTitle { class: "settings-card-title",
                    Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                    "Security Settings"
                }
                CardDescription { "Manage your account security" }
            }
            CardContent { class: "settings-stack",
                ToggleRow {
                    title: "Two-Factor Authentication",
                    description: "Add an extra layer of security",
                    checked: current.two_factor,
                    on_change: move |v: bool| security.write().two_factor = v,
                }
                ToggleRow {
                    title: "Login Alerts",
                    description: "Get notified of new logins",
                    checked: current.login_alerts,
                    on_change: move |v: bool| security.write().login_alerts = v,
                }
                TextField {
                    label: "Session Timeout (minutes)",
                    input_type: "number",
                    value: "{current.session_timeout_minutes}",
                    error: timeout_error,
                    on_input: move |e: FormEvent| {
                        security.write().session_timeout_minutes = parse_timeout(&e.value());
                    },
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        toast.info("Password reset link sent to your email".to_string(), ToastOptions::new());
                    },
                    "Change Password"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_input_parses_whole_minutes() {
        assert_eq!(parse_timeout(" 45 "), 45);
        assert_eq!(parse_timeout(""), 0);
        assert_eq!(parse_timeout("ten"), 0);
    }
}
