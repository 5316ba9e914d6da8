use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shared_types::application::{self, filter_applications, StatusFilter};
use shared_types::document::{self, completion_percentage, count_by_status, DocumentStatus};
use shared_types::officer::{roster, RosterSummary};
use shared_types::passport::{PassportScan, ScanStep, StepStatus};
use shared_types::Role;

#[test]
fn search_and_filter_combine() {
    let apps = application::fixtures();
    let found = filter_applications(&apps, "visa", StatusFilter::All);
    assert_eq!(found.len(), 3);

    let pending = filter_applications(&apps, "visa", StatusFilter::parse("pending"));
    assert_eq!(pending.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["APP-2024-002"]);
}

#[test]
fn applicants_do_not_see_people_columns() {
    assert!(!application::shows_people_columns(Role::Applicant));
    assert!(application::shows_people_columns(Role::Officer));
    assert!(application::shows_people_columns(Role::Admin));
}

#[test]
fn document_counts_cover_every_fixture() {
    let docs = document::fixtures();
    let total: usize = DocumentStatus::ALL
        .iter()
        .map(|s| count_by_status(&docs, *s))
        .sum();
    assert_eq!(total, docs.len());
    assert!(completion_percentage(&docs) <= 100);
}

#[test]
fn resubmitting_raises_nothing_to_verified() {
    let mut docs = document::fixtures();
    let before = completion_percentage(&docs);
    let date = NaiveDate::from_ymd_opt(2024, 2, 1)
        .unwrap()
        .format("%Y-%m-%d")
        .to_string();
    for doc in docs.iter_mut() {
        if doc.status == DocumentStatus::Rejected {
            doc.resubmit(&date);
        }
    }
    assert_eq!(count_by_status(&docs, DocumentStatus::Rejected), 0);
    assert_eq!(completion_percentage(&docs), before);
}

#[test]
fn roster_summary_adds_up() {
    let officers = roster();
    let summary = RosterSummary::of(&officers);
    assert_eq!(summary.total, officers.len());
    assert!(summary.active <= summary.total);
}

#[test]
fn full_scan_walks_every_step() {
    let mut scan = PassportScan::default();
    assert!(scan.start());
    let mut ticks = 0;
    while !scan.tick(10) {
        ticks += 1;
    }
    assert_eq!(ticks, 9);
    assert_eq!(scan.step, ScanStep::Biometric);
    assert_eq!(scan.step_status(ScanStep::Scanning), StepStatus::Done);

    scan.advance_biometric();
    scan.advance_biometric();
    assert_eq!(scan.step, ScanStep::Complete);
    assert!(ScanStep::ALL.iter().all(|s| scan.step_status(*s) == StepStatus::Done));

    scan.reset();
    assert_eq!(scan, PassportScan::default());
}
