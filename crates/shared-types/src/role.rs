use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The persona the dashboard is currently rendered for.
///
/// Exactly one role is active at a time. The default is `Admin`, which is
/// what a fresh session starts with before the login screen picks one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
    Officer,
    #[default]
    Admin,
}

/// Every role, in the order the role switcher lists them.
pub const ALL_ROLES: [Role; 3] = [Role::Applicant, Role::Officer, Role::Admin];

impl Role {
    /// Lowercase identifier used in config files and serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Officer => "officer",
            Role::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Applicant => "Applicant",
            Role::Officer => "Officer",
            Role::Admin => "Admin",
        }
    }

    /// Two-letter avatar initials shown in the sidebar footer.
    pub fn initials(&self) -> &'static str {
        match self {
            Role::Applicant => "AP",
            Role::Officer => "OF",
            Role::Admin => "AD",
        }
    }

    /// Parse a role identifier. Unknown values fall back to the default role.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "applicant" => Ok(Role::Applicant),
            "officer" => Ok(Role::Officer),
            "admin" => Ok(Role::Admin),
            other => Err(AppError::invalid_identifier(format!(
                "unknown role: {other}"
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn default_role_is_admin() {
        assert_eq!(Role::default(), Role::Admin);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Officer".parse::<Role>().unwrap(), Role::Officer);
        assert_eq!(" APPLICANT ".parse::<Role>().unwrap(), Role::Applicant);
    }

    #[test]
    fn parse_unknown_role_is_invalid_identifier() {
        let err = "guest".parse::<Role>().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidIdentifier);
        assert!(err.message.contains("guest"));
    }

    #[test]
    fn from_str_or_default_fails_open() {
        assert_eq!(Role::from_str_or_default("judge"), Role::Admin);
        assert_eq!(Role::from_str_or_default("officer"), Role::Officer);
    }

    #[test]
    fn as_str_parses_back() {
        for role in ALL_ROLES {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Officer).unwrap(), "\"officer\"");
    }

    #[test]
    fn initials_per_role() {
        assert_eq!(Role::Applicant.initials(), "AP");
        assert_eq!(Role::Officer.initials(), "OF");
        assert_eq!(Role::Admin.initials(), "AD");
    }
}
