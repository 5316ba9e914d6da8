//! Badge tones for the status enums shown across the pages.

use shared_types::application::ApplicationStatus;
use shared_types::appointment::AppointmentStatus;
use shared_types::dashboard::{AlertLevel, Priority};
use shared_types::document::DocumentStatus;
use shared_types::officer::OfficerStatus;
use shared_ui::BadgeTone;

pub fn application(status: ApplicationStatus) -> BadgeTone {
    match status {
        ApplicationStatus::Approved => BadgeTone::Success,
        ApplicationStatus::Rejected => BadgeTone::Danger,
        ApplicationStatus::UnderReview => BadgeTone::Info,
        ApplicationStatus::Pending => BadgeTone::Warning,
    }
}

pub fn appointment(status: AppointmentStatus) -> BadgeTone {
    match status {
        AppointmentStatus::Confirmed => BadgeTone::Success,
        AppointmentStatus::Pending => BadgeTone::Warning,
        AppointmentStatus::Cancelled => BadgeTone::Danger,
    }
}

pub fn document(status: DocumentStatus) -> BadgeTone {
    match status {
        DocumentStatus::Verified => BadgeTone::Success,
        DocumentStatus::Pending => BadgeTone::Warning,
        DocumentStatus::Rejected => BadgeTone::Danger,
        DocumentStatus::Missing => BadgeTone::Neutral,
    }
}

pub fn officer(status: OfficerStatus) -> BadgeTone {
    match status {
        OfficerStatus::Active => BadgeTone::Success,
        OfficerStatus::Busy => BadgeTone::Warning,
        OfficerStatus::Offline => BadgeTone::Neutral,
    }
}

pub fn priority(priority: Priority) -> BadgeTone {
    match priority {
        Priority::Urgent => BadgeTone::Danger,
        Priority::High => BadgeTone::Warning,
        Priority::Normal => BadgeTone::Info,
    }
}

pub fn alert(level: AlertLevel) -> BadgeTone {
    match level {
        AlertLevel::Warning => BadgeTone::Warning,
        AlertLevel::Info => BadgeTone::Info,
        AlertLevel::Success => BadgeTone::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_use_strong_tones() {
        assert_eq!(application(ApplicationStatus::Approved), BadgeTone::Success);
        assert_eq!(application(ApplicationStatus::Rejected), BadgeTone::Danger);
        assert_eq!(document(DocumentStatus::Rejected), BadgeTone::Danger);
        assert_eq!(appointment(AppointmentStatus::Cancelled), BadgeTone::Danger);
    }

    #[test]
    fn missing_documents_are_neutral() {
        assert_eq!(document(DocumentStatus::Missing), BadgeTone::Neutral);
    }

    #[test]
    fn urgent_outranks_high() {
        assert_eq!(priority(Priority::Urgent), BadgeTone::Danger);
        assert_eq!(priority(Priority::High), BadgeTone::Warning);
    }
}
