use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::feature_flags::FeatureFlags;
use crate::page::Page;
use crate::role::Role;

/// What happens to role and page when the user signs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoutPolicy {
    /// Keep the last role and page so the next login resumes there.
    #[default]
    Retain,
    /// Return to `default_role` / `default_page`.
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(deserialize_with = "lenient_role")]
    pub default_role: Role,
    #[serde(deserialize_with = "lenient_page")]
    pub default_page: Page,
    pub logout_policy: LogoutPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_role: Role::Admin,
            default_page: Page::Dashboard,
            logout_policy: LogoutPolicy::Retain,
        }
    }
}

// Unknown identifiers in config fall back to the defaults instead of
// rejecting the whole file.
fn lenient_role<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Role, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(Role::from_str_or_default(&raw))
}

fn lenient_page<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Page, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(Page::from_str_or_default(&raw))
}

/// Durations of the simulated operations, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    pub login_ms: u32,
    pub upload_ms: u32,
    pub download_ms: u32,
    pub reschedule_ms: u32,
    pub join_ms: u32,
    pub report_ms: u32,
    pub scan_tick_ms: u32,
    /// Progress added per scan tick.
    pub scan_step: u8,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_ms: 2000,
            upload_ms: 2000,
            download_ms: 1000,
            reschedule_ms: 1500,
            join_ms: 1000,
            report_ms: 2000,
            scan_tick_ms: 300,
            scan_step: 10,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        toml::from_str(raw).map_err(|e| AppError::config(format!("invalid config.toml: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timing.login_ms, 2000);
        assert_eq!(config.timing.scan_step, 10);
        assert_eq!(config.session.logout_policy, LogoutPolicy::Retain);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [session]
            logout_policy = "reset"

            [timing]
            upload_ms = 50

            [features]
            document_downloads = true
            "#,
        )
        .unwrap();
        assert_eq!(config.session.logout_policy, LogoutPolicy::Reset);
        assert_eq!(config.session.default_role, Role::Admin);
        assert_eq!(config.timing.upload_ms, 50);
        assert_eq!(config.timing.download_ms, 1000);
        assert!(config.features.document_downloads);
        assert!(!config.features.virtual_meetings);
    }

    #[test]
    fn unknown_role_and_page_fall_back() {
        let config = AppConfig::from_toml(
            r#"
            [session]
            default_role = "superuser"
            default_page = "reports"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.default_role, Role::Admin);
        assert_eq!(config.session.default_page, Page::Dashboard);
    }

    #[test]
    fn configured_role_and_page() {
        let config = AppConfig::from_toml(
            r#"
            [session]
            default_role = "applicant"
            default_page = "passport-scan"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.default_role, Role::Applicant);
        assert_eq!(config.session.default_page, Page::PassportScan);
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = AppConfig::from_toml("[timing\nlogin_ms = ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ConfigError);
    }

    #[test]
    fn bad_logout_policy_is_config_error() {
        let err = AppConfig::from_toml("[session]\nlogout_policy = \"forget\"").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ConfigError);
    }
}
