use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OfficerStatus {
    Active,
    Busy,
    Offline,
}

impl OfficerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OfficerStatus::Active => "Active",
            OfficerStatus::Busy => "Busy",
            OfficerStatus::Offline => "Offline",
        }
    }
}

/// An immigration officer on the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Officer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub status: OfficerStatus,
    pub location: String,
    pub assigned_cases: u32,
    pub completed_cases: u32,
    pub join_date: String,
}

impl Officer {
    /// "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn roster() -> Vec<Officer> {
    let officer = |id, name: &str, phone_suffix: &str, department: &str, status, location: &str, assigned, completed, joined: &str| {
        let email = format!("{}@immigration.gov", name.to_lowercase().replace(' ', "."));
        Officer {
            id,
            name: name.into(),
            email,
            phone: format!("+1 (555) {phone_suffix}"),
            department: department.into(),
            status,
            location: location.into(),
            assigned_cases: assigned,
            completed_cases: completed,
            join_date: joined.into(),
        }
    };
    use OfficerStatus::*;
    vec![
        officer(1, "Sarah Johnson", "123-4567", "Work Permits", Active, "Downtown Office", 24, 156, "2022-03-15"),
        officer(2, "Mike Wilson", "234-5678", "Tourist Visas", Active, "North Office", 18, 203, "2021-08-22"),
        officer(3, "Emily Chen", "345-6789", "Student Visas", Busy, "Downtown Office", 31, 89, "2023-01-10"),
        officer(4, "David Rodriguez", "456-7890", "Family Visas", Offline, "South Office", 12, 134, "2020-11-05"),
    ]
}

/// Totals shown above the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub total: usize,
    pub active: usize,
    pub assigned: u32,
    pub completed: u32,
}

impl RosterSummary {
    pub fn of(officers: &[Officer]) -> Self {
        Self {
            total: officers.len(),
            active: officers
                .iter()
                .filter(|o| o.status == OfficerStatus::Active)
                .count(),
            assigned: officers.iter().map(|o| o.assigned_cases).sum(),
            completed: officers.iter().map(|o| o.completed_cases).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_of_roster() {
        assert_eq!(
            RosterSummary::of(&roster()),
            RosterSummary {
                total: 4,
                active: 2,
                assigned: 85,
                completed: 582,
            }
        );
    }

    #[test]
    fn emails_follow_name() {
        let roster = roster();
        assert_eq!(roster[3].email, "david.rodriguez@immigration.gov");
        assert_eq!(roster[1].phone, "+1 (555) 234-5678");
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(roster()[2].initials(), "EC");
        assert_eq!(initials("john michael smith"), "JMS");
        assert_eq!(initials(""), "");
    }
}
