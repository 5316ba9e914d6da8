use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
///
/// Only `InvalidIdentifier`, `ValidationError` and `ConfigError` are produced
/// today. The authentication and upload kinds describe the failures a real
/// backend would introduce; the simulated flows always succeed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    InvalidIdentifier,
    AccessDenied,
    ValidationError,
    ConfigError,
    InvalidCredentials,
    AccountLocked,
    NetworkFailure,
    FileTooLarge,
    UnsupportedFormat,
    Canceled,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidIdentifier => write!(f, "InvalidIdentifier"),
            AppErrorKind::AccessDenied => write!(f, "AccessDenied"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::ConfigError => write!(f, "ConfigError"),
            AppErrorKind::InvalidCredentials => write!(f, "InvalidCredentials"),
            AppErrorKind::AccountLocked => write!(f, "AccountLocked"),
            AppErrorKind::NetworkFailure => write!(f, "NetworkFailure"),
            AppErrorKind::FileTooLarge => write!(f, "FileTooLarge"),
            AppErrorKind::UnsupportedFormat => write!(f, "UnsupportedFormat"),
            AppErrorKind::Canceled => write!(f, "Canceled"),
        }
    }
}

/// Structured application error shared by the domain and UI crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InvalidIdentifier, message)
    }

    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::AccessDenied, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::ConfigError, message)
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InvalidCredentials, message)
    }

    pub fn account_locked(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::AccountLocked, message)
    }

    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NetworkFailure, message)
    }

    pub fn file_too_large(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::FileTooLarge, message)
    }

    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::UnsupportedFormat, message)
    }

    pub fn canceled(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Canceled, message)
    }

    /// Whether this error belongs to the authentication family.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::InvalidCredentials
                | AppErrorKind::AccountLocked
                | AppErrorKind::NetworkFailure
        )
    }

    /// Whether this error belongs to the upload family.
    pub fn is_upload_error(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::NetworkFailure
                | AppErrorKind::FileTooLarge
                | AppErrorKind::UnsupportedFormat
        )
    }

    /// Message suitable for a toast or inline banner.
    ///
    /// Validation errors with field details surface the first field message
    /// (sorted by field name so the output is stable).
    pub fn friendly_message(&self) -> String {
        if self.kind == AppErrorKind::ValidationError {
            let mut fields: Vec<_> = self.field_errors.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));
            if let Some((_, msg)) = fields.first() {
                return (*msg).clone();
            }
        }
        if self.message.is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::invalid_identifier("unknown role: guest");
        assert_eq!(err.to_string(), "InvalidIdentifier: unknown role: guest");
    }

    #[test]
    fn friendly_message_prefers_first_field_error() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Full name is required".to_string());
        fields.insert("email".to_string(), "Enter a valid email".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.friendly_message(), "Enter a valid email");
    }

    #[test]
    fn friendly_message_fallback_for_empty_message() {
        let err = AppError::network_failure("");
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn auth_and_upload_families() {
        assert!(AppError::invalid_credentials("bad").is_auth_error());
        assert!(AppError::account_locked("locked").is_auth_error());
        assert!(!AppError::file_too_large("big").is_auth_error());
        assert!(AppError::file_too_large("big").is_upload_error());
        assert!(AppError::unsupported_format("gif").is_upload_error());
        assert!(AppError::network_failure("offline").is_upload_error());
        assert!(!AppError::access_denied("no").is_upload_error());
    }

    #[test]
    fn serializes_without_empty_field_errors() {
        let err = AppError::access_denied("Only administrators");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("field_errors"));
        let back: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
