use pretty_assertions::assert_eq;
use shared_types::{AppError, SimulatedOp, TaskState};

use crate::common;

#[test]
fn second_start_while_pending_is_ignored() {
    let mut task = TaskState::default();
    assert!(task.begin());
    assert!(!task.begin());
    assert!(task.is_pending());
}

#[test]
fn settled_task_can_run_again() {
    let mut task = TaskState::default();
    task.begin();
    task.succeed();
    assert!(task.is_settled());
    assert!(task.begin());
}

#[test]
fn cancel_only_affects_pending_tasks() {
    let mut task = TaskState::default();
    task.cancel();
    assert_eq!(task, TaskState::Idle);

    task.begin();
    task.cancel();
    assert_eq!(task, TaskState::Canceled);

    task.succeed();
    assert_eq!(task, TaskState::Canceled);
}

#[test]
fn failure_carries_its_error() {
    let mut task = TaskState::default();
    task.begin();
    task.fail(AppError::network_failure("offline"));
    assert_eq!(task.error().map(|e| e.message.as_str()), Some("offline"));
    assert!(task.error().is_some_and(AppError::is_upload_error));
}

#[test]
fn shipped_timings_match_operations() {
    let timing = common::shipped_config().timing;
    assert_eq!(SimulatedOp::Login.duration_ms(&timing), 2000);
    assert_eq!(SimulatedOp::Upload.duration_ms(&timing), 2000);
    assert_eq!(SimulatedOp::Download.duration_ms(&timing), 1000);
    assert_eq!(SimulatedOp::Reschedule.duration_ms(&timing), 1500);
    assert_eq!(SimulatedOp::JoinMeeting.duration_ms(&timing), 1000);
    assert_eq!(SimulatedOp::GenerateReport.duration_ms(&timing), 2000);
}
