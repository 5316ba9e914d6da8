use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::settings::NotificationSettings;
use shared_types::FeatureFlags;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, ToggleRow};

/// Channel and topic toggles. Push delivery is only offered where desktop
/// notifications are switched on.
#[component]
pub fn NotificationsSection(notifications: Signal<NotificationSettings>) -> Element {
    let flags: FeatureFlags = use_context();
    let mut notifications = notifications;
    let current = *notifications.read();

    rsx! {
        Card {
            CardHeader {
                CardTitle { class: "settings-card-title",
                    Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                    "Notification Preferences"
                }
                CardDescription { "Choose how you want to be notified" }
            }
            CardContent { class: "settings-stack",
                ToggleRow {
                    title: "Email Notifications",
                    description: "Receive updates via email",
                    checked: current.email,
                    on_change: move |v: bool| notifications.write().email = v,
                }
                if flags.desktop_notifications {
                    ToggleRow {
                        title: "Push Notifications",
                        description: "Desktop alerts when work completes",
                        checked: current.push,
                        on_change: move |v: bool| {
                            notifications.write().push = v;
                            if v {
                                crate::notify::send(
                                    "Push notifications enabled",
                                    "You will now receive desktop notifications.",
                                );
                            }
                        },
                    }
                }
                ToggleRow {
                    title: "SMS Notifications",
                    description: "Receive updates via text message",
                    checked: current.sms,
                    on_change: move |v: bool| notifications.write().sms = v,
                }

                hr { class: "settings-divider" }

                h4 { class: "settings-subheading", "Notification Types" }
                ToggleRow {
                    title: "Status Updates",
                    checked: current.status_updates,
                    on_change: move |v: bool| notifications.write().status_updates = v,
                }
                ToggleRow {
                    title: "Appointments",
                    checked: current.appointments,
                    on_change: move |v: bool| notifications.write().appointments = v,
                }
                ToggleRow {
                    title: "Document Updates",
                    checked: current.documents,
                    on_change: move |v: bool| notifications.write().documents = v,
                }
            }
        }
    }
}
