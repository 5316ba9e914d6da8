use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional affordances are shown.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file hides all optional features.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Fingerprint / Face ID buttons on the login screen.
    #[serde(default)]
    pub biometric_login: bool,
    /// "Join Meeting" on virtual appointments.
    #[serde(default)]
    pub virtual_meetings: bool,
    #[serde(default)]
    pub document_downloads: bool,
    #[serde(default)]
    pub desktop_notifications: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.biometric_login);
        assert!(!flags.virtual_meetings);
        assert!(!flags.document_downloads);
        assert!(!flags.desktop_notifications);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let flags: FeatureFlags = toml::from_str("virtual_meetings = true").unwrap();
        assert!(flags.virtual_meetings);
        assert!(!flags.biometric_login);
        assert!(!flags.document_downloads);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
