use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Verification status of a supporting document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Verified,
    Pending,
    Rejected,
    Missing,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Verified,
        DocumentStatus::Pending,
        DocumentStatus::Rejected,
        DocumentStatus::Missing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Verified => "Verified",
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Rejected => "Rejected",
            DocumentStatus::Missing => "Missing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub status: DocumentStatus,
    pub upload_date: Option<String>,
    pub size: Option<String>,
    pub format: Option<String>,
    pub required: bool,
    pub rejection_reason: Option<String>,
}

impl Document {
    fn uploaded(id: u32, name: &str, category: &str, status: DocumentStatus, date: &str, size: &str) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            status,
            upload_date: Some(date.into()),
            size: Some(size.into()),
            format: Some("PDF".into()),
            required: true,
            rejection_reason: None,
        }
    }

    /// Upload is offered to applicants for documents that still need one.
    pub fn can_upload(&self, role: Role) -> bool {
        role == Role::Applicant
            && matches!(self.status, DocumentStatus::Missing | DocumentStatus::Rejected)
    }

    /// View and download need a file on record.
    pub fn has_file(&self) -> bool {
        self.status != DocumentStatus::Missing
    }

    /// Record a fresh upload: the document goes back to review and any
    /// earlier rejection reason is cleared.
    pub fn resubmit(&mut self, date: &str) {
        self.status = DocumentStatus::Pending;
        self.upload_date = Some(date.to_string());
        self.format.get_or_insert_with(|| "PDF".to_string());
        self.rejection_reason = None;
    }
}

pub fn fixtures() -> Vec<Document> {
    use DocumentStatus::*;
    let mut bank = Document::uploaded(4, "Bank Statement", "Financial", Rejected, "2024-01-12", "3.2 MB");
    bank.rejection_reason = Some("Document is older than 3 months".into());
    vec![
        Document::uploaded(1, "Passport Copy", "Identity", Verified, "2024-01-15", "2.4 MB"),
        Document::uploaded(2, "Birth Certificate", "Identity", Pending, "2024-01-18", "1.8 MB"),
        Document::uploaded(3, "Employment Letter", "Work", Verified, "2024-01-20", "856 KB"),
        bank,
        Document {
            id: 5,
            name: "Medical Certificate".into(),
            category: "Health".into(),
            status: Missing,
            upload_date: None,
            size: None,
            format: None,
            required: true,
            rejection_reason: None,
        },
    ]
}

/// Share of required documents that are verified, rounded to a whole percent.
/// No required documents counts as complete.
pub fn completion_percentage(docs: &[Document]) -> u8 {
    let required = docs.iter().filter(|d| d.required).count();
    if required == 0 {
        return 100;
    }
    let verified = docs
        .iter()
        .filter(|d| d.required && d.status == DocumentStatus::Verified)
        .count();
    ((verified as f64 / required as f64) * 100.0).round() as u8
}

pub fn count_by_status(docs: &[Document], status: DocumentStatus) -> usize {
    docs.iter().filter(|d| d.status == status).count()
}

/// `Passport Copy` becomes `passport-copy.txt`.
pub fn download_file_name(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}.txt")
}

pub fn download_content(doc: &Document, generated_at: NaiveDateTime) -> String {
    format!(
        "IMMIGRATION DOCUMENT: {name}
================================

Document ID: DOC-{id}
Generated: {generated}
Applicant: John Doe
Application ID: APP-2024-001

This is a sample document for demonstration purposes.
In a real application, this would contain the actual document data.

Status: Verified
Verification Date: {date}
Verified By: Immigration Officer Sarah Johnson

---
This document is digitally signed and verified.
",
        name = doc.name,
        id = doc.id,
        generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
        date = generated_at.format("%Y-%m-%d"),
    )
}

pub fn page_subtitle(role: Role) -> &'static str {
    match role {
        Role::Applicant => "Upload and manage your application documents",
        Role::Officer | Role::Admin => "Review and verify applicant documents",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn completion_of_fixtures_is_forty_percent() {
        assert_eq!(completion_percentage(&fixtures()), 40);
    }

    #[test]
    fn completion_rounds() {
        let mut docs = fixtures();
        docs.truncate(3);
        // 2 of 3 verified
        assert_eq!(completion_percentage(&docs), 67);
        assert_eq!(completion_percentage(&[]), 100);
    }

    #[test]
    fn optional_documents_do_not_count() {
        let mut docs = fixtures();
        for d in docs.iter_mut().filter(|d| d.status == DocumentStatus::Missing) {
            d.required = false;
        }
        assert_eq!(completion_percentage(&docs), 50);
    }

    #[test]
    fn counts() {
        let docs = fixtures();
        assert_eq!(count_by_status(&docs, DocumentStatus::Verified), 2);
        assert_eq!(count_by_status(&docs, DocumentStatus::Pending), 1);
        assert_eq!(count_by_status(&docs, DocumentStatus::Rejected), 1);
        assert_eq!(count_by_status(&docs, DocumentStatus::Missing), 1);
    }

    #[test]
    fn file_name_collapses_whitespace() {
        assert_eq!(download_file_name("Passport Copy"), "passport-copy.txt");
        assert_eq!(download_file_name("Bank  Statement"), "bank-statement.txt");
    }

    #[test]
    fn upload_only_for_applicant_on_missing_or_rejected() {
        let docs = fixtures();
        let uploadable: Vec<_> = docs
            .iter()
            .filter(|d| d.can_upload(Role::Applicant))
            .map(|d| d.id)
            .collect();
        assert_eq!(uploadable, vec![4, 5]);
        assert!(docs.iter().all(|d| !d.can_upload(Role::Officer)));
    }

    #[test]
    fn resubmitted_document_awaits_review() {
        let mut bank = fixtures().remove(3);
        assert_eq!(bank.status, DocumentStatus::Rejected);
        bank.resubmit("2024-02-01");
        assert_eq!(bank.status, DocumentStatus::Pending);
        assert_eq!(bank.upload_date.as_deref(), Some("2024-02-01"));
        assert!(bank.rejection_reason.is_none());
        assert!(!bank.can_upload(Role::Applicant));
    }

    #[test]
    fn download_content_header() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let text = download_content(&fixtures()[0], at);
        assert!(text.starts_with("IMMIGRATION DOCUMENT: Passport Copy\n"));
        assert!(text.contains("Document ID: DOC-1"));
        assert!(text.contains("Verification Date: 2024-03-04"));
    }
}
