use serde::{Deserialize, Serialize};
#[cfg(feature = "validation")]
use validator::Validate;

use crate::error::AppError;
use crate::role::Role;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Chinese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Chinese => "chinese",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::Chinese => "中文",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ProfileSettings {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 7, max = 20, message = "Phone number must be 7-20 characters"))
    )]
    pub phone: String,
    pub language: Language,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            language: Language::English,
        }
    }
}

impl ProfileSettings {
    /// Validate before saving. Always succeeds without the `validation` feature.
    pub fn check(&self) -> Result<(), AppError> {
        #[cfg(feature = "validation")]
        self.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SecuritySettings {
    pub two_factor: bool,
    pub login_alerts: bool,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 5, max = 240, message = "Session timeout must be 5-240 minutes"))
    )]
    pub session_timeout_minutes: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor: false,
            login_alerts: true,
            session_timeout_minutes: 30,
        }
    }
}

impl SecuritySettings {
    pub fn check(&self) -> Result<(), AppError> {
        #[cfg(feature = "validation")]
        self.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub status_updates: bool,
    pub appointments: bool,
    pub documents: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            sms: true,
            status_updates: true,
            appointments: true,
            documents: false,
        }
    }
}

/// System tools shown only to administrators.
pub const ADMIN_TOOLS: [&str; 3] = ["System Backup", "User Management", "System Logs"];

pub fn shows_admin_tools(role: Role) -> bool {
    role.is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn default_profile_is_valid() {
        assert!(ProfileSettings::default().check().is_ok());
        assert!(SecuritySettings::default().check().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let profile = ProfileSettings {
            name: String::new(),
            ..ProfileSettings::default()
        };
        let err = profile.check().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.get("name").map(String::as_str), Some("Full name is required"));
    }

    #[test]
    fn bad_email_rejected() {
        let profile = ProfileSettings {
            email: "john.doe".into(),
            ..ProfileSettings::default()
        };
        let err = profile.check().unwrap_err();
        assert!(err.field_errors.contains_key("email"));
    }

    #[test]
    fn session_timeout_bounds() {
        let security = SecuritySettings {
            session_timeout_minutes: 1,
            ..SecuritySettings::default()
        };
        assert!(security.check().is_err());
    }

    #[test]
    fn notification_defaults() {
        let n = NotificationSettings::default();
        assert!(n.email && n.sms && n.status_updates && n.appointments);
        assert!(!n.push && !n.documents);
    }

    #[test]
    fn language_parse_falls_back() {
        assert_eq!(Language::parse("french"), Language::French);
        assert_eq!(Language::parse("klingon"), Language::English);
    }

    #[test]
    fn admin_tools_visibility() {
        assert!(shows_admin_tools(Role::Admin));
        assert!(!shows_admin_tools(Role::Officer));
    }
}
