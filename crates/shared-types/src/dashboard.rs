//! Static content behind the three dashboards.

use serde::Serialize;

use crate::application::ApplicationStatus;
use crate::officer::OfficerStatus;
use crate::page::Page;
use crate::role::Role;

// ── Default dashboard ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub trend: &'static str,
}

const fn card(
    title: &'static str,
    value: &'static str,
    description: &'static str,
    trend: &'static str,
) -> StatCard {
    StatCard {
        title,
        value,
        description,
        trend,
    }
}

pub fn welcome_message(role: Role) -> &'static str {
    match role {
        Role::Applicant => "Welcome back! Track your immigration applications and appointments.",
        Role::Officer => "Officer Dashboard - Review applications and manage cases efficiently.",
        Role::Admin => "Admin Dashboard - Oversee the entire immigration management system.",
    }
}

pub fn stat_cards(role: Role) -> [StatCard; 4] {
    match role {
        Role::Applicant => [
            card("My Applications", "3", "Active applications", "+1 this month"),
            card("Pending Reviews", "2", "Awaiting officer review", "2 in queue"),
            card("Appointments", "1", "Upcoming this week", "Next: Tomorrow"),
            card("Documents", "8", "Uploaded documents", "All verified"),
        ],
        Role::Officer => [
            card("Assigned Cases", "24", "Cases to review", "+3 today"),
            card("Pending Reviews", "12", "Awaiting your review", "High priority: 4"),
            card("Approved Today", "8", "Applications approved", "+2 from yesterday"),
            card("Interviews", "5", "Scheduled this week", "Next: 2 PM"),
        ],
        Role::Admin => [
            card("Total Applications", "1,247", "All time applications", "+12% from last month"),
            card("Pending Reviews", "89", "Awaiting officer review", "Average: 3.2 days"),
            card("Active Officers", "15", "Officers online", "Peak hours: 12"),
            card("System Alerts", "3", "Require attention", "1 critical"),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Upload,
    Status,
    Appointment,
    Message,
    Review,
    Assignment,
    Interview,
    Request,
    System,
    Alert,
    User,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

const fn activity(
    kind: ActivityKind,
    title: &'static str,
    description: &'static str,
    time: &'static str,
) -> Activity {
    Activity {
        kind,
        title,
        description,
        time,
    }
}

pub fn recent_activity(role: Role) -> [Activity; 4] {
    use ActivityKind::*;
    match role {
        Role::Applicant => [
            activity(Upload, "Document uploaded", "Passport copy uploaded successfully", "2 hours ago"),
            activity(Status, "Application status updated", "Work permit application moved to review", "1 day ago"),
            activity(Appointment, "Appointment scheduled", "Biometric appointment for next Tuesday", "2 days ago"),
            activity(Message, "Message from officer", "Additional documents requested", "3 days ago"),
        ],
        Role::Officer => [
            activity(Review, "Application reviewed", "Approved work permit for John Smith", "30 minutes ago"),
            activity(Assignment, "New case assigned", "Tourist visa application #VT-2024-0156", "1 hour ago"),
            activity(Interview, "Interview completed", "Citizenship interview with Maria Garcia", "3 hours ago"),
            activity(Request, "Document request sent", "Additional proof of income requested", "5 hours ago"),
        ],
        Role::Admin => [
            activity(System, "System backup completed", "Daily backup completed successfully", "1 hour ago"),
            activity(Alert, "High volume alert", "Application volume 25% above average", "2 hours ago"),
            activity(User, "New officer added", "Sarah Johnson joined as Immigration Officer", "4 hours ago"),
            activity(Maintenance, "Maintenance scheduled", "System maintenance planned for Sunday 2 AM", "6 hours ago"),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyStat {
    pub month: &'static str,
    pub applications: u32,
    pub approved: u32,
    pub rejected: u32,
    pub pending: u32,
}

pub const MONTHLY_STATS: [MonthlyStat; 6] = [
    MonthlyStat { month: "Jan", applications: 65, approved: 45, rejected: 12, pending: 8 },
    MonthlyStat { month: "Feb", applications: 78, approved: 52, rejected: 15, pending: 11 },
    MonthlyStat { month: "Mar", applications: 90, approved: 68, rejected: 10, pending: 12 },
    MonthlyStat { month: "Apr", applications: 85, approved: 61, rejected: 14, pending: 10 },
    MonthlyStat { month: "May", applications: 95, approved: 72, rejected: 11, pending: 12 },
    MonthlyStat { month: "Jun", applications: 110, approved: 85, rejected: 13, pending: 12 },
];

/// Bar height for `value` as a percentage of the busiest month.
pub fn bar_percent(value: u32) -> f64 {
    let max = MONTHLY_STATS
        .iter()
        .map(|m| m.applications)
        .max()
        .unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryShare {
    pub name: &'static str,
    pub percent: u8,
}

pub const COUNTRY_SHARE: [CountryShare; 5] = [
    CountryShare { name: "India", percent: 35 },
    CountryShare { name: "China", percent: 25 },
    CountryShare { name: "Mexico", percent: 20 },
    CountryShare { name: "Philippines", percent: 12 },
    CountryShare { name: "Others", percent: 8 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub target: Page,
}

/// Shortcuts offered on the applicant dashboard. Other roles get none.
pub fn quick_actions(role: Role) -> Vec<QuickAction> {
    if role != Role::Applicant {
        return Vec::new();
    }
    vec![
        QuickAction { label: "New Application", target: Page::Applications },
        QuickAction { label: "Upload Documents", target: Page::Documents },
        QuickAction { label: "Schedule Appointment", target: Page::Appointments },
    ]
}

// ── Officer dashboard ───────────────────────────────────────────

pub const OFFICER_TABS: [(&str, &str); 4] = [
    ("pending", "Pending Review"),
    ("visa-arrival", "Visa on Arrival"),
    ("evisa", "E-Visa Checker"),
    ("analytics", "Analytics"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinationCountry {
    pub code: &'static str,
    pub name: &'static str,
    pub applications: u32,
}

pub const DESTINATIONS: [DestinationCountry; 6] = [
    DestinationCountry { code: "US", name: "United States", applications: 245 },
    DestinationCountry { code: "CA", name: "Canada", applications: 189 },
    DestinationCountry { code: "UK", name: "United Kingdom", applications: 156 },
    DestinationCountry { code: "AU", name: "Australia", applications: 134 },
    DestinationCountry { code: "DE", name: "Germany", applications: 98 },
    DestinationCountry { code: "FR", name: "France", applications: 87 },
];

/// Applications for the selected destination code, or all of them for `"all"`
/// and unknown codes.
pub fn destination_total(code: &str) -> u32 {
    match DESTINATIONS.iter().find(|d| d.code == code) {
        Some(d) => d.applications,
        None => DESTINATIONS.iter().map(|d| d.applications).sum(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Normal,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingReview {
    pub id: &'static str,
    pub applicant: &'static str,
    pub country: &'static str,
    pub kind: &'static str,
    pub priority: Priority,
    pub submitted: &'static str,
    pub visa_on_arrival: bool,
    pub e_visa: bool,
}

pub const PENDING_REVIEWS: [PendingReview; 3] = [
    PendingReview {
        id: "APP-2024-156",
        applicant: "Maria Rodriguez",
        country: "Mexico",
        kind: "Tourist Visa",
        priority: Priority::High,
        submitted: "2024-01-25",
        visa_on_arrival: false,
        e_visa: true,
    },
    PendingReview {
        id: "APP-2024-157",
        applicant: "Ahmed Hassan",
        country: "Egypt",
        kind: "Business Visa",
        priority: Priority::Normal,
        submitted: "2024-01-24",
        visa_on_arrival: true,
        e_visa: false,
    },
    PendingReview {
        id: "APP-2024-158",
        applicant: "Li Wei",
        country: "China",
        kind: "Student Visa",
        priority: Priority::Urgent,
        submitted: "2024-01-23",
        visa_on_arrival: false,
        e_visa: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisaOnArrival {
    pub country: &'static str,
    pub duration: &'static str,
    pub fee: &'static str,
}

pub const VISA_ON_ARRIVAL: [VisaOnArrival; 4] = [
    VisaOnArrival { country: "Thailand", duration: "30 days", fee: "$35" },
    VisaOnArrival { country: "UAE", duration: "90 days", fee: "$100" },
    VisaOnArrival { country: "Turkey", duration: "90 days", fee: "$50" },
    VisaOnArrival { country: "Jordan", duration: "30 days", fee: "$40" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EVisa {
    pub id: &'static str,
    pub applicant: &'static str,
    pub destination: &'static str,
    pub status: ApplicationStatus,
    pub kind: &'static str,
    pub valid_until: &'static str,
}

pub const E_VISAS: [EVisa; 3] = [
    EVisa {
        id: "EVISA-2024-001",
        applicant: "John Smith",
        destination: "India",
        status: ApplicationStatus::Approved,
        kind: "Tourist",
        valid_until: "2024-12-31",
    },
    EVisa {
        id: "EVISA-2024-002",
        applicant: "Sarah Johnson",
        destination: "Vietnam",
        status: ApplicationStatus::Pending,
        kind: "Business",
        valid_until: "2024-11-15",
    },
    EVisa {
        id: "EVISA-2024-003",
        applicant: "Michael Chen",
        destination: "Sri Lanka",
        status: ApplicationStatus::Rejected,
        kind: "Tourist",
        valid_until: "N/A",
    },
];

/// Case-insensitive match on e-visa id, applicant or destination.
pub fn search_evisas(term: &str) -> Vec<EVisa> {
    let needle = term.trim().to_lowercase();
    E_VISAS
        .iter()
        .copied()
        .filter(|v| {
            needle.is_empty()
                || v.id.to_lowercase().contains(&needle)
                || v.applicant.to_lowercase().contains(&needle)
                || v.destination.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Header figures on the officer dashboard: (label, value).
pub const OFFICER_HEADER_STATS: [(&str, &str); 4] = [
    ("Today's Reviews", "18"),
    ("Avg. Processing", "2.5h"),
    ("Approval Rate", "94%"),
    ("Active Cases", "156"),
];

// ── Admin dashboard ─────────────────────────────────────────────

pub const ADMIN_TABS: [(&str, &str); 5] = [
    ("overview", "Overview"),
    ("officers", "Officers"),
    ("countries", "Countries"),
    ("visa-services", "Visa Services"),
    ("system", "System"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalStats {
    pub total_applications: u32,
    pub active_officers: u32,
    pub countries_supported: u32,
    pub system_uptime: f64,
    pub daily_applications: u32,
    pub approval_rate: f64,
    pub avg_processing: &'static str,
    pub pending_reviews: u32,
}

pub const GLOBAL_STATS: GlobalStats = GlobalStats {
    total_applications: 15847,
    active_officers: 45,
    countries_supported: 195,
    system_uptime: 99.9,
    daily_applications: 234,
    approval_rate: 87.5,
    avg_processing: "3.2 days",
    pending_reviews: 1247,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub applications: u32,
}

pub const REGIONS: [Region; 6] = [
    Region { code: "global", name: "Global", applications: 15847 },
    Region { code: "americas", name: "Americas", applications: 5234 },
    Region { code: "europe", name: "Europe", applications: 4567 },
    Region { code: "asia", name: "Asia Pacific", applications: 3890 },
    Region { code: "africa", name: "Africa", applications: 1456 },
    Region { code: "middle-east", name: "Middle East", applications: 700 },
];

/// Unknown codes select the global region.
pub fn region(code: &str) -> Region {
    REGIONS
        .iter()
        .copied()
        .find(|r| r.code == code)
        .unwrap_or(REGIONS[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "7 Days",
            TimeRange::Month => "30 Days",
            TimeRange::Quarter => "90 Days",
            TimeRange::Year => "1 Year",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopCountry {
    pub country: &'static str,
    pub applications: u32,
    pub growth: &'static str,
}

pub const TOP_COUNTRIES: [TopCountry; 5] = [
    TopCountry { country: "United States", applications: 2456, growth: "+12%" },
    TopCountry { country: "Canada", applications: 1890, growth: "+8%" },
    TopCountry { country: "United Kingdom", applications: 1567, growth: "+15%" },
    TopCountry { country: "Australia", applications: 1234, growth: "+5%" },
    TopCountry { country: "Germany", applications: 987, growth: "+18%" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemAlert {
    pub level: AlertLevel,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
}

pub const SYSTEM_ALERTS: [SystemAlert; 3] = [
    SystemAlert {
        level: AlertLevel::Warning,
        title: "High Application Volume",
        message: "Applications increased by 25% in the last 24 hours",
        time: "2 hours ago",
    },
    SystemAlert {
        level: AlertLevel::Info,
        title: "System Maintenance",
        message: "Scheduled maintenance on Sunday 2:00 AM - 4:00 AM",
        time: "1 day ago",
    },
    SystemAlert {
        level: AlertLevel::Success,
        title: "New Officer Onboarded",
        message: "Sarah Johnson has been added to the Europe region",
        time: "2 days ago",
    },
];

pub const ADMIN_QUICK_ACTIONS: [&str; 4] = [
    "Add New Officer",
    "System Backup",
    "Export Reports",
    "Refresh Cache",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfficerPerformance {
    pub name: &'static str,
    pub region: &'static str,
    pub status: OfficerStatus,
    pub cases_assigned: u32,
    pub completion_rate: u8,
    pub avg_processing: &'static str,
}

pub const OFFICER_PERFORMANCE: [OfficerPerformance; 3] = [
    OfficerPerformance {
        name: "Sarah Johnson",
        region: "Europe",
        status: OfficerStatus::Active,
        cases_assigned: 24,
        completion_rate: 94,
        avg_processing: "2.8 days",
    },
    OfficerPerformance {
        name: "Mike Wilson",
        region: "Americas",
        status: OfficerStatus::Active,
        cases_assigned: 18,
        completion_rate: 89,
        avg_processing: "3.1 days",
    },
    OfficerPerformance {
        name: "Emily Chen",
        region: "Asia Pacific",
        status: OfficerStatus::Busy,
        cases_assigned: 31,
        completion_rate: 92,
        avg_processing: "2.5 days",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisaService {
    pub name: &'static str,
    pub detail: &'static str,
    pub status: &'static str,
    pub rate: u8,
    pub rate_label: &'static str,
}

pub const ARRIVAL_SERVICES: [VisaService; 2] = [
    VisaService { name: "Thailand", detail: "30 days • $35 fee", status: "Active", rate: 85, rate_label: "approval rate" },
    VisaService { name: "UAE", detail: "90 days • $100 fee", status: "Active", rate: 92, rate_label: "approval rate" },
];

pub const E_VISA_SERVICES: [VisaService; 2] = [
    VisaService { name: "India E-Visa", detail: "1,234 applications today", status: "Processing", rate: 78, rate_label: "processed" },
    VisaService { name: "Vietnam E-Visa", detail: "567 applications today", status: "Active", rate: 95, rate_label: "processed" },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthMetric {
    pub label: &'static str,
    pub percent: f64,
}

pub const SYSTEM_HEALTH: [HealthMetric; 3] = [
    HealthMetric { label: "Database Performance", percent: 98.0 },
    HealthMetric { label: "API Response Time", percent: 95.0 },
    HealthMetric { label: "Server Uptime", percent: 99.9 },
];

pub const SYSTEM_LOGS: [(AlertLevel, &str); 4] = [
    (AlertLevel::Success, "System backup completed successfully"),
    (AlertLevel::Info, "New officer Sarah Johnson added"),
    (AlertLevel::Warning, "High traffic detected"),
    (AlertLevel::Success, "Database optimization completed"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ALL_ROLES;

    #[test]
    fn every_role_has_four_cards_and_activities() {
        for role in ALL_ROLES {
            assert_eq!(stat_cards(role).len(), 4);
            assert_eq!(recent_activity(role).len(), 4);
            assert!(!welcome_message(role).is_empty());
        }
    }

    #[test]
    fn admin_cards() {
        assert_eq!(stat_cards(Role::Admin)[0].value, "1,247");
        assert_eq!(stat_cards(Role::Officer)[0].title, "Assigned Cases");
    }

    #[test]
    fn monthly_stats_add_up() {
        for m in MONTHLY_STATS {
            assert!(m.approved + m.rejected + m.pending <= m.applications, "{}", m.month);
        }
        assert_eq!(bar_percent(110), 100.0);
        assert_eq!(bar_percent(55), 50.0);
    }

    #[test]
    fn country_share_sums_to_hundred() {
        let total: u32 = COUNTRY_SHARE.iter().map(|c| c.percent as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn quick_actions_only_for_applicants() {
        let targets: Vec<_> = quick_actions(Role::Applicant).iter().map(|a| a.target).collect();
        assert_eq!(targets, vec![Page::Applications, Page::Documents, Page::Appointments]);
        assert!(quick_actions(Role::Officer).is_empty());
        assert!(quick_actions(Role::Admin).is_empty());
    }

    #[test]
    fn destination_filter() {
        assert_eq!(destination_total("all"), 909);
        assert_eq!(destination_total("UK"), 156);
    }

    #[test]
    fn evisa_search() {
        assert_eq!(search_evisas("").len(), 3);
        assert_eq!(search_evisas("vietnam")[0].id, "EVISA-2024-002");
        assert_eq!(search_evisas("evisa-2024-003")[0].applicant, "Michael Chen");
        assert!(search_evisas("nowhere").is_empty());
    }

    #[test]
    fn region_lookup_and_time_range() {
        assert_eq!(region("europe").applications, 4567);
        assert_eq!(region("mars").code, "global");
        assert_eq!(TimeRange::parse("90d"), TimeRange::Quarter);
        assert_eq!(TimeRange::parse("2w"), TimeRange::Month);
    }
}
