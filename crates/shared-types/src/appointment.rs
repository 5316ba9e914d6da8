use serde::{Deserialize, Serialize};

use crate::role::Role;

const MEETING_ROOM_BASE: &str = "https://meet.immigration.gov/room/";
const DIRECTIONS_BASE: &str = "https://maps.google.com/maps?q=";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentMode {
    InPerson,
    Virtual,
}

impl AppointmentMode {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentMode::InPerson => "in-person",
            AppointmentMode::Virtual => "virtual",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: u32,
    pub title: String,
    pub applicant: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub mode: AppointmentMode,
    pub status: AppointmentStatus,
    pub purpose: String,
}

pub fn fixtures() -> Vec<Appointment> {
    let appt = |id, title: &str, applicant: &str, date: &str, time: &str, location: &str, mode, status, purpose: &str| Appointment {
        id,
        title: title.into(),
        applicant: applicant.into(),
        date: date.into(),
        time: time.into(),
        location: location.into(),
        mode,
        status,
        purpose: purpose.into(),
    };
    use AppointmentMode::*;
    use AppointmentStatus::*;
    vec![
        appt(1, "Biometric Appointment", "John Smith", "2024-02-15", "10:00 AM", "Immigration Office - Downtown", InPerson, Confirmed, "Work Permit Application"),
        appt(2, "Citizenship Interview", "Maria Garcia", "2024-02-16", "2:00 PM", "Virtual Meeting", Virtual, Pending, "Citizenship Application"),
        appt(3, "Document Review", "Li Wei", "2024-02-18", "11:30 AM", "Immigration Office - North", InPerson, Confirmed, "Student Visa Application"),
    ]
}

pub fn meeting_url(id: u32) -> String {
    format!("{MEETING_ROOM_BASE}{id}")
}

pub fn directions_url(location: &str) -> String {
    format!("{DIRECTIONS_BASE}{}", urlencoding::encode(location))
}

pub fn page_subtitle(role: Role) -> &'static str {
    match role {
        Role::Applicant => "Manage your scheduled appointments",
        Role::Officer | Role::Admin => "View and schedule appointments with applicants",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_url_uses_id() {
        assert_eq!(meeting_url(2), "https://meet.immigration.gov/room/2");
    }

    #[test]
    fn directions_url_encodes_location() {
        assert_eq!(
            directions_url("Immigration Office - Downtown"),
            "https://maps.google.com/maps?q=Immigration%20Office%20-%20Downtown"
        );
    }

    #[test]
    fn one_virtual_appointment() {
        let virtual_count = fixtures()
            .iter()
            .filter(|a| a.mode == AppointmentMode::Virtual)
            .count();
        assert_eq!(virtual_count, 1);
    }
}
