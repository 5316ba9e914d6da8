mod admin_tools_section;
mod notifications_section;
mod preferences_section;
mod profile_section;
mod security_section;

use crate::nav::use_navigation;
use dioxus::prelude::*;
use shared_types::settings::{
    shows_admin_tools, NotificationSettings, ProfileSettings, SecuritySettings,
};
use shared_types::AppError;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, ToastOptions,
};
use std::collections::HashMap;
use tracing::{info, warn};

use admin_tools_section::AdminToolsSection;
use notifications_section::NotificationsSection;
use preferences_section::PreferencesSection;
use profile_section::ProfileSection;
use security_section::SecuritySection;

/// Field name to message, as reported by [`AppError::field_errors`].
pub(crate) type FieldErrors = HashMap<String, String>;

/// Validate every settings card at once. Profile errors come first so the
/// toast names the card the user sees at the top.
fn check_all(profile: &ProfileSettings, security: &SecuritySettings) -> Result<(), AppError> {
    profile.check()?;
    security.check()
}

/// Settings page. Each card is its own component and edits a slice of the
/// state held here, so "Save All Settings" sees every pending change.
#[component]
pub fn Settings() -> Element {
    let nav = use_navigation();
    let toast = use_toast();

    let profile = use_signal(ProfileSettings::default);
    let security = use_signal(SecuritySettings::default);
    let notifications = use_signal(NotificationSettings::default);
    let mut field_errors = use_signal(FieldErrors::new);

    let admin = shows_admin_tools(nav.role());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        PageHeader {
            title: "Settings",
            subtitle: "Manage your account preferences and system settings",
        }

        div { class: "settings-grid",
            ProfileSection { profile, field_errors }
            SecuritySection { security, field_errors }
            NotificationsSection { notifications }
            PreferencesSection { profile,
                if admin {
                    AdminToolsSection {}
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Save All Changes" }
                CardDescription { "Apply all your settings changes across the system" }
            }
            CardContent {
                Button {
                    variant: ButtonVariant::Primary,
                    class: "settings-save-all",
                    onclick: move |_| {
                        match check_all(&profile.read(), &security.read()) {
                            Ok(()) => {
                                field_errors.set(FieldErrors::new());
                                info!(notifications = ?*notifications.read(), "settings saved");
                                toast.success("All settings saved".to_string(), ToastOptions::new());
                            }
                            Err(e) => {
                                warn!(error = %e, "settings rejected");
                                toast.error(e.friendly_message(), ToastOptions::new());
                                field_errors.set(e.field_errors);
                            }
                        }
                    },
                    "Save All Settings"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_every_check() {
        assert!(check_all(&ProfileSettings::default(), &SecuritySettings::default()).is_ok());
    }

    #[test]
    fn profile_errors_are_reported_before_security() {
        let profile = ProfileSettings {
            name: String::new(),
            ..ProfileSettings::default()
        };
        let security = SecuritySettings {
            session_timeout_minutes: 1,
            ..SecuritySettings::default()
        };
        let err = check_all(&profile, &security).unwrap_err();
        assert!(err.field_errors.contains_key("name"));
        assert!(!err.field_errors.contains_key("session_timeout_minutes"));
    }

    #[test]
    fn short_session_timeout_is_rejected() {
        let security = SecuritySettings {
            session_timeout_minutes: 2,
            ..SecuritySettings::default()
        };
        let err = check_all(&ProfileSettings::default(), &security).unwrap_err();
        assert_eq!(err.friendly_message(), "Session timeout must be 5-240 minutes");
    }
}
