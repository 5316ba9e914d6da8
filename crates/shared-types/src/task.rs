use serde::{Deserialize, Serialize};

use crate::config::TimingConfig;
use crate::error::AppError;

/// Lifecycle of a simulated operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TaskState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(AppError),
    Canceled,
}

impl TaskState {
    /// Start (or restart) the task. Allowed from any state except `Pending`.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = TaskState::Pending;
        true
    }

    pub fn succeed(&mut self) {
        if self.is_pending() {
            *self = TaskState::Succeeded;
        }
    }

    pub fn fail(&mut self, error: AppError) {
        if self.is_pending() {
            *self = TaskState::Failed(error);
        }
    }

    pub fn cancel(&mut self) {
        if self.is_pending() {
            *self = TaskState::Canceled;
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TaskState::Pending)
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            TaskState::Succeeded | TaskState::Failed(_) | TaskState::Canceled
        )
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            TaskState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// The timed operations the dashboard simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulatedOp {
    Login,
    Upload,
    Download,
    Reschedule,
    JoinMeeting,
    GenerateReport,
}

impl SimulatedOp {
    pub fn duration_ms(&self, timing: &TimingConfig) -> u32 {
        match self {
            SimulatedOp::Login => timing.login_ms,
            SimulatedOp::Upload => timing.upload_ms,
            SimulatedOp::Download => timing.download_ms,
            SimulatedOp::Reschedule => timing.reschedule_ms,
            SimulatedOp::JoinMeeting => timing.join_ms,
            SimulatedOp::GenerateReport => timing.report_ms,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimulatedOp::Login => "login",
            SimulatedOp::Upload => "upload",
            SimulatedOp::Download => "download",
            SimulatedOp::Reschedule => "reschedule",
            SimulatedOp::JoinMeeting => "join meeting",
            SimulatedOp::GenerateReport => "generate report",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut task = TaskState::default();
        assert!(task.begin());
        assert!(task.is_pending());
        task.succeed();
        assert_eq!(task, TaskState::Succeeded);
        assert!(task.is_settled());
    }

    #[test]
    fn begin_while_pending_is_rejected() {
        let mut task = TaskState::Pending;
        assert!(!task.begin());
        assert!(task.is_pending());
    }

    #[test]
    fn settled_state_ignores_late_transitions() {
        let mut task = TaskState::Pending;
        task.cancel();
        task.succeed();
        task.fail(AppError::network_failure("offline"));
        assert_eq!(task, TaskState::Canceled);
    }

    #[test]
    fn restart_after_settle() {
        let mut task = TaskState::Succeeded;
        assert!(task.begin());
        task.fail(AppError::file_too_large("over 10 MB"));
        assert_eq!(task.error().map(|e| e.message.as_str()), Some("over 10 MB"));
    }

    #[test]
    fn durations_come_from_timing() {
        let timing = TimingConfig::default();
        assert_eq!(SimulatedOp::Login.duration_ms(&timing), 2000);
        assert_eq!(SimulatedOp::Reschedule.duration_ms(&timing), 1500);
        assert_eq!(SimulatedOp::JoinMeeting.duration_ms(&timing), 1000);
    }
}
