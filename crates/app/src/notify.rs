use shared_types::FeatureFlags;

#[cfg(feature = "desktop")]
const APP_NAME: &str = "Immigration Portal";

/// Whether a completed operation should also raise a desktop notification.
fn wants_desktop(flags: &FeatureFlags) -> bool {
    flags.desktop_notifications && cfg!(feature = "desktop")
}

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "desktop notification failed");
        }
    }
}

/// Send a desktop notification when the feature flag allows it.
pub fn send_if_enabled(flags: &FeatureFlags, title: &str, body: &str) {
    if wants_desktop(flags) {
        send(title, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_flag_never_notifies() {
        let flags = FeatureFlags::default();
        assert!(!wants_desktop(&flags));
    }

    #[test]
    fn enabled_flag_follows_platform() {
        let flags = FeatureFlags {
            desktop_notifications: true,
            ..FeatureFlags::default()
        };
        assert_eq!(wants_desktop(&flags), cfg!(feature = "desktop"));
    }

    #[test]
    fn send_noop_does_not_panic() {
        send("Upload complete", "Medical Certificate uploaded");
    }
}
