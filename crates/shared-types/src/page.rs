use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A top-level page of the dashboard shell.
///
/// Pages are replaced wholesale on navigation; there is no history stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Dashboard,
    Applications,
    Appointments,
    Documents,
    Officers,
    Settings,
    PassportScan,
    OfficerDashboard,
    AdminDashboard,
}

pub const ALL_PAGES: [Page; 9] = [
    Page::Dashboard,
    Page::Applications,
    Page::Appointments,
    Page::Documents,
    Page::Officers,
    Page::Settings,
    Page::PassportScan,
    Page::OfficerDashboard,
    Page::AdminDashboard,
];

impl Page {
    /// Kebab-case identifier, e.g. `passport-scan`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Applications => "applications",
            Page::Appointments => "appointments",
            Page::Documents => "documents",
            Page::Officers => "officers",
            Page::Settings => "settings",
            Page::PassportScan => "passport-scan",
            Page::OfficerDashboard => "officer-dashboard",
            Page::AdminDashboard => "admin-dashboard",
        }
    }

    /// Heading shown in the navbar while the page is mounted.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Applications => "Applications",
            Page::Appointments => "Appointments",
            Page::Documents => "Documents",
            Page::Officers => "Officers",
            Page::Settings => "Settings",
            Page::PassportScan => "Passport Scan",
            Page::OfficerDashboard => "Officer Portal",
            Page::AdminDashboard => "Admin Portal",
        }
    }

    /// Unknown identifiers fall back to the dashboard.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ALL_PAGES
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| AppError::invalid_identifier(format!("unknown page: {needle}")))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn identifiers_parse_back() {
        for page in ALL_PAGES {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        let err = "reports".parse::<Page>().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidIdentifier);
    }

    #[test]
    fn unknown_page_defaults_to_dashboard() {
        assert_eq!(Page::from_str_or_default("reports"), Page::Dashboard);
        assert_eq!(Page::from_str_or_default(""), Page::Dashboard);
        assert_eq!(
            Page::from_str_or_default("Passport-Scan"),
            Page::PassportScan
        );
    }

    #[test]
    fn serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Page::OfficerDashboard).unwrap(),
            "\"officer-dashboard\""
        );
        let page: Page = serde_json::from_str("\"passport-scan\"").unwrap();
        assert_eq!(page, Page::PassportScan);
    }
}
