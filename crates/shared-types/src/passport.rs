//! Passport scanning and biometric verification flow.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanStep {
    #[default]
    Upload,
    Scanning,
    Biometric,
    Complete,
}

impl ScanStep {
    pub const ALL: [ScanStep; 4] = [
        ScanStep::Upload,
        ScanStep::Scanning,
        ScanStep::Biometric,
        ScanStep::Complete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScanStep::Upload => "Upload Document",
            ScanStep::Scanning => "Scan & Extract",
            ScanStep::Biometric => "Biometric Verification",
            ScanStep::Complete => "Complete",
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            ScanStep::Upload => 0,
            ScanStep::Scanning => 1,
            ScanStep::Biometric => 2,
            ScanStep::Complete => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BiometricStep {
    #[default]
    Fingerprint,
    Face,
    Complete,
}

/// How a step indicator is drawn relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Upcoming,
    Current,
    Done,
}

/// State of one passport verification run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PassportScan {
    pub step: ScanStep,
    pub progress: u8,
    pub biometric: BiometricStep,
}

impl PassportScan {
    /// Begin scanning from the upload step. Ignored elsewhere.
    pub fn start(&mut self) -> bool {
        if self.step != ScanStep::Upload {
            return false;
        }
        self.step = ScanStep::Scanning;
        self.progress = 0;
        true
    }

    /// Advance scan progress by `step`, capped at 100. Reaching 100 moves to
    /// the biometric step. Returns `true` once scanning is over.
    pub fn tick(&mut self, step: u8) -> bool {
        if self.step != ScanStep::Scanning {
            return true;
        }
        self.progress = self.progress.saturating_add(step.max(1)).min(100);
        if self.progress == 100 {
            self.step = ScanStep::Biometric;
            return true;
        }
        false
    }

    /// Fingerprint then face; the face scan completes the whole run.
    pub fn advance_biometric(&mut self) {
        if self.step != ScanStep::Biometric {
            return;
        }
        match self.biometric {
            BiometricStep::Fingerprint => self.biometric = BiometricStep::Face,
            BiometricStep::Face => {
                self.biometric = BiometricStep::Complete;
                self.step = ScanStep::Complete;
            }
            BiometricStep::Complete => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn step_status(&self, step: ScanStep) -> StepStatus {
        if self.step == ScanStep::Complete {
            return StepStatus::Done;
        }
        match step.ordinal().cmp(&self.step.ordinal()) {
            std::cmp::Ordering::Less => StepStatus::Done,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

/// Data read from the passport's machine-readable zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPassport {
    pub passport_number: String,
    pub full_name: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub gender: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub issuing_authority: String,
}

impl ExtractedPassport {
    pub fn sample() -> Self {
        Self {
            passport_number: "P123456789".into(),
            full_name: "JOHN MICHAEL SMITH".into(),
            nationality: "UNITED STATES OF AMERICA".into(),
            date_of_birth: "15 JAN 1990".into(),
            place_of_birth: "NEW YORK, USA".into(),
            gender: "M".into(),
            issue_date: "20 MAR 2020".into(),
            expiry_date: "19 MAR 2030".into(),
            issuing_authority: "UNITED STATES DEPARTMENT OF STATE".into(),
        }
    }

    /// `(label, value)` pairs, labels humanised from the camelCase keys.
    pub fn fields(&self) -> Vec<(String, &str)> {
        [
            ("passportNumber", self.passport_number.as_str()),
            ("fullName", self.full_name.as_str()),
            ("nationality", self.nationality.as_str()),
            ("dateOfBirth", self.date_of_birth.as_str()),
            ("placeOfBirth", self.place_of_birth.as_str()),
            ("gender", self.gender.as_str()),
            ("issueDate", self.issue_date.as_str()),
            ("expiryDate", self.expiry_date.as_str()),
            ("issuingAuthority", self.issuing_authority.as_str()),
        ]
        .into_iter()
        .map(|(key, value)| (humanize_key(key), value))
        .collect()
    }
}

/// `dateOfBirth` -> `Date Of Birth`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

pub const REPORT_FILE_NAME: &str = "passport-verification-report.txt";

pub fn verification_report(data: &ExtractedPassport, generated_at: NaiveDateTime) -> String {
    let mut out = String::from("PASSPORT VERIFICATION REPORT\n============================\n\n");
    for (label, value) in data.fields() {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out.push_str("\nDocument Verified: Passport authenticated\n");
    out.push_str("Biometric Match: Identity confirmed\n");
    out.push_str("Security Passed: All checks complete\n\n");
    out.push_str(&format!(
        "Generated on: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_run() {
        let mut scan = PassportScan::default();
        assert!(scan.start());
        let mut ticks = 0;
        while !scan.tick(10) {
            ticks += 1;
        }
        assert_eq!(ticks, 9);
        assert_eq!(scan.step, ScanStep::Biometric);
        assert_eq!(scan.progress, 100);

        scan.advance_biometric();
        assert_eq!(scan.biometric, BiometricStep::Face);
        assert_eq!(scan.step, ScanStep::Biometric);
        scan.advance_biometric();
        assert_eq!(scan.step, ScanStep::Complete);
        assert_eq!(scan.biometric, BiometricStep::Complete);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let mut scan = PassportScan::default();
        scan.start();
        scan.progress = 95;
        assert!(scan.tick(10));
        assert_eq!(scan.progress, 100);
    }

    #[test]
    fn start_only_from_upload() {
        let mut scan = PassportScan {
            step: ScanStep::Biometric,
            progress: 100,
            biometric: BiometricStep::Face,
        };
        assert!(!scan.start());
        assert_eq!(scan.step, ScanStep::Biometric);
    }

    #[test]
    fn biometric_ignored_outside_its_step() {
        let mut scan = PassportScan::default();
        scan.advance_biometric();
        assert_eq!(scan.biometric, BiometricStep::Fingerprint);
    }

    #[test]
    fn reset_returns_to_upload() {
        let mut scan = PassportScan {
            step: ScanStep::Complete,
            progress: 100,
            biometric: BiometricStep::Complete,
        };
        scan.reset();
        assert_eq!(scan, PassportScan::default());
    }

    #[test]
    fn step_indicators() {
        let mut scan = PassportScan::default();
        scan.start();
        assert_eq!(scan.step_status(ScanStep::Upload), StepStatus::Done);
        assert_eq!(scan.step_status(ScanStep::Scanning), StepStatus::Current);
        assert_eq!(scan.step_status(ScanStep::Complete), StepStatus::Upcoming);
        scan.step = ScanStep::Complete;
        assert_eq!(scan.step_status(ScanStep::Complete), StepStatus::Done);
    }

    #[test]
    fn humanized_labels() {
        assert_eq!(humanize_key("dateOfBirth"), "Date Of Birth");
        assert_eq!(humanize_key("gender"), "Gender");
        let sample = ExtractedPassport::sample();
        let fields = sample.fields();
        assert_eq!(fields[0], ("Passport Number".to_string(), "P123456789"));
        assert_eq!(fields.len(), 9);
    }
}
