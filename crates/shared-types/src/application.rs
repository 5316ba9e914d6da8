use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Processing status of an immigration application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// Status filter offered by the applications toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(ApplicationStatus::Pending),
        StatusFilter::Only(ApplicationStatus::UnderReview),
        StatusFilter::Only(ApplicationStatus::Approved),
        StatusFilter::Only(ApplicationStatus::Rejected),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(s) => s.label(),
        }
    }

    /// Unknown values select everything.
    pub fn parse(s: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|f| f.as_str() == s)
            .unwrap_or_default()
    }

    pub fn matches(&self, status: ApplicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: String,
    pub kind: String,
    pub applicant: String,
    pub country: String,
    pub status: ApplicationStatus,
    pub submitted: String,
    pub last_update: String,
    pub officer: String,
}

impl Application {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        kind: &str,
        applicant: &str,
        country: &str,
        status: ApplicationStatus,
        submitted: &str,
        last_update: &str,
        officer: &str,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            applicant: applicant.into(),
            country: country.into(),
            status,
            submitted: submitted.into(),
            last_update: last_update.into(),
            officer: officer.into(),
        }
    }
}

pub fn fixtures() -> Vec<Application> {
    use ApplicationStatus::*;
    vec![
        Application::new("APP-2024-001", "Work Permit", "John Smith", "India", Approved, "2024-01-15", "2024-01-20", "Sarah Johnson"),
        Application::new("APP-2024-002", "Tourist Visa", "Maria Garcia", "Mexico", Pending, "2024-01-18", "2024-01-18", "Mike Wilson"),
        Application::new("APP-2024-003", "Student Visa", "Li Wei", "China", UnderReview, "2024-01-20", "2024-01-22", "Sarah Johnson"),
        Application::new("APP-2024-004", "Family Visa", "Ahmed Hassan", "Egypt", Rejected, "2024-01-10", "2024-01-25", "Mike Wilson"),
    ]
}

/// Case-insensitive search on applicant, id or type, combined with the
/// status filter.
pub fn filter_applications<'a>(
    apps: &'a [Application],
    search: &str,
    filter: StatusFilter,
) -> Vec<&'a Application> {
    let needle = search.trim().to_lowercase();
    apps.iter()
        .filter(|a| {
            needle.is_empty()
                || a.applicant.to_lowercase().contains(&needle)
                || a.id.to_lowercase().contains(&needle)
                || a.kind.to_lowercase().contains(&needle)
        })
        .filter(|a| filter.matches(a.status))
        .collect()
}

// ── Role affordances ────────────────────────────────────────────

/// Applicant and officer columns are hidden from applicants.
pub fn shows_people_columns(role: Role) -> bool {
    role != Role::Applicant
}

pub fn can_create_application(role: Role) -> bool {
    role == Role::Applicant
}

pub fn can_edit_application(role: Role) -> bool {
    role == Role::Officer
}

pub fn page_subtitle(role: Role) -> &'static str {
    match role {
        Role::Applicant => "Track your immigration applications",
        Role::Officer => "Review and manage assigned applications",
        Role::Admin => "Oversee all immigration applications",
    }
}

// ── Detail view ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalInfo {
    pub full_name: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub nationality: String,
    pub passport_number: String,
    pub gender: String,
    pub marital_status: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl PersonalInfo {
    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Full Name", self.full_name.as_str()),
            ("Date of Birth", self.date_of_birth.as_str()),
            ("Place of Birth", self.place_of_birth.as_str()),
            ("Nationality", self.nationality.as_str()),
            ("Passport Number", self.passport_number.as_str()),
            ("Gender", self.gender.as_str()),
            ("Marital Status", self.marital_status.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Address", self.address.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmittedDocumentStatus {
    Verified,
    Pending,
    Missing,
}

impl SubmittedDocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmittedDocumentStatus::Verified => "verified",
            SubmittedDocumentStatus::Pending => "pending",
            SubmittedDocumentStatus::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittedDocument {
    pub name: String,
    pub status: SubmittedDocumentStatus,
    pub upload_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub date: String,
    pub time: String,
    pub event: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationDetail {
    pub application: Application,
    pub personal: PersonalInfo,
    pub priority: String,
    pub estimated_processing: String,
    pub documents: Vec<SubmittedDocument>,
    pub timeline: Vec<TimelineEvent>,
}

impl ApplicationDetail {
    /// Detail record for `app`. Personal data, documents and timeline are
    /// sample content shared by every application.
    pub fn for_application(app: &Application) -> Self {
        let doc = |name: &str, status, date: Option<&str>| SubmittedDocument {
            name: name.into(),
            status,
            upload_date: date.map(Into::into),
        };
        let event = |date: &str, time: &str, event: &str, description: &str, completed| TimelineEvent {
            date: date.into(),
            time: time.into(),
            event: event.into(),
            description: description.into(),
            completed,
        };
        use SubmittedDocumentStatus::*;
        Self {
            application: app.clone(),
            personal: PersonalInfo {
                full_name: "John Michael Smith".into(),
                date_of_birth: "January 15, 1990".into(),
                place_of_birth: "New York, USA".into(),
                nationality: "American".into(),
                passport_number: "P123456789".into(),
                gender: "Male".into(),
                marital_status: "Single".into(),
                email: "john.smith@email.com".into(),
                phone: "+1 (555) 123-4567".into(),
                address: "123 Main Street, New York, NY 10001".into(),
            },
            priority: "Normal".into(),
            estimated_processing: "7-14 business days".into(),
            documents: vec![
                doc("Passport Copy", Verified, Some("2024-01-15")),
                doc("Birth Certificate", Verified, Some("2024-01-16")),
                doc("Employment Letter", Verified, Some("2024-01-17")),
                doc("Bank Statement", Pending, Some("2024-01-18")),
                doc("Medical Certificate", Missing, None),
            ],
            timeline: vec![
                event("2024-01-15", "09:30 AM", "Application Submitted", "Initial application submitted with required documents", true),
                event("2024-01-16", "02:15 PM", "Document Review Started", "Officer Sarah Johnson began reviewing submitted documents", true),
                event("2024-01-18", "11:45 AM", "Additional Documents Requested", "Medical certificate required for processing", true),
                event("2024-01-20", "10:00 AM", "Interview Scheduled", "Biometric appointment scheduled for January 25th", false),
            ],
        }
    }

    pub fn verified_documents(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.status == SubmittedDocumentStatus::Verified)
            .count()
    }

    pub fn completed_steps(&self) -> usize {
        self.timeline.iter().filter(|e| e.completed).count()
    }
}

pub fn report_file_name(app: &Application) -> String {
    format!("application-{}-details.txt", app.id)
}

/// Plain-text report offered for download from the detail dialog.
pub fn detail_report(detail: &ApplicationDetail, generated_at: NaiveDateTime) -> String {
    let app = &detail.application;
    let p = &detail.personal;
    let documents = detail
        .documents
        .iter()
        .map(|d| match &d.upload_date {
            Some(date) => format!("{}: {} ({})", d.name, d.status.as_str().to_uppercase(), date),
            None => format!("{}: {}", d.name, d.status.as_str().to_uppercase()),
        })
        .collect::<Vec<_>>()
        .join("\n");
    let timeline = detail
        .timeline
        .iter()
        .map(|e| format!("{} {} - {}\n{}", e.date, e.time, e.event, e.description))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "APPLICATION DETAILS REPORT
========================

Application ID: {id}
Application Type: {kind}
Status: {status}

PERSONAL INFORMATION
--------------------
Full Name: {name}
Date of Birth: {dob}
Nationality: {nationality}
Passport Number: {passport}
Email: {email}
Phone: {phone}

APPLICATION STATUS
------------------
Submission Date: {submitted}
Last Updated: {updated}
Assigned Officer: {officer}
Priority: {priority}

DOCUMENT STATUS
---------------
{documents}

TIMELINE
--------
{timeline}

Generated on: {generated}
",
        id = app.id,
        kind = app.kind,
        status = app.status.as_str(),
        name = p.full_name,
        dob = p.date_of_birth,
        nationality = p.nationality,
        passport = p.passport_number,
        email = p.email,
        phone = p.phone,
        submitted = app.submitted,
        updated = app.last_update,
        officer = app.officer,
        priority = detail.priority,
        generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ids(apps: Vec<&Application>) -> Vec<&str> {
        apps.into_iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn empty_search_and_all_returns_everything() {
        let apps = fixtures();
        assert_eq!(filter_applications(&apps, "", StatusFilter::All).len(), 4);
    }

    #[test]
    fn search_matches_applicant_id_and_type() {
        let apps = fixtures();
        assert_eq!(ids(filter_applications(&apps, "maria", StatusFilter::All)), vec!["APP-2024-002"]);
        assert_eq!(ids(filter_applications(&apps, "app-2024-004", StatusFilter::All)), vec!["APP-2024-004"]);
        assert_eq!(ids(filter_applications(&apps, "VISA", StatusFilter::All)).len(), 3);
    }

    #[test]
    fn status_filter_combines_with_search() {
        let apps = fixtures();
        let only = StatusFilter::Only(ApplicationStatus::UnderReview);
        assert_eq!(ids(filter_applications(&apps, "", only)), vec!["APP-2024-003"]);
        assert!(filter_applications(&apps, "maria", only).is_empty());
    }

    #[test]
    fn status_filter_parse() {
        assert_eq!(StatusFilter::parse("under_review"), StatusFilter::Only(ApplicationStatus::UnderReview));
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }

    #[test]
    fn role_affordances() {
        assert!(!shows_people_columns(Role::Applicant));
        assert!(shows_people_columns(Role::Officer));
        assert!(can_create_application(Role::Applicant));
        assert!(!can_create_application(Role::Admin));
        assert!(can_edit_application(Role::Officer));
        assert!(!can_edit_application(Role::Admin));
    }

    #[test]
    fn report_contents() {
        let app = &fixtures()[1];
        let detail = ApplicationDetail::for_application(app);
        let at = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let report = detail_report(&detail, at);
        assert!(report.starts_with("APPLICATION DETAILS REPORT\n"));
        assert!(report.contains("Application ID: APP-2024-002"));
        assert!(report.contains("Assigned Officer: Mike Wilson"));
        assert!(report.contains("Bank Statement: PENDING (2024-01-18)"));
        assert!(report.contains("Medical Certificate: MISSING\n"));
        assert!(report.contains("2024-01-20 10:00 AM - Interview Scheduled\nBiometric"));
        assert!(report.contains("Generated on: 2024-02-01 09:05:00"));
        assert_eq!(report_file_name(app), "application-APP-2024-002-details.txt");
    }

    #[test]
    fn detail_counts() {
        let detail = ApplicationDetail::for_application(&fixtures()[0]);
        assert_eq!(detail.verified_documents(), 3);
        assert_eq!(detail.completed_steps(), 3);
    }
}
