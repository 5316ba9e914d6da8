//! Timed stand-ins for work a real backend would do.
//!
//! Futures are spawned on the scope of the component that starts them, so
//! navigating away drops the pending timer and no completion fires into a
//! view that is gone.

use dioxus::prelude::*;
use shared_types::{SimulatedOp, TaskState};
use tracing::{debug, warn};

/// Wait `ms` milliseconds on the renderer's own timer. Every platform the
/// app targets runs a webview, so `setTimeout` is always there.
pub async fn sleep_ms(ms: u32) {
    let script = format!("await new Promise(resolve => setTimeout(resolve, {ms})); return true;");
    if let Err(e) = document::eval(&script).await {
        warn!(error = ?e, ms, "timer script failed, continuing immediately");
    }
}

/// A simulated operation bound to the calling component.
#[derive(Clone, Copy, PartialEq)]
pub struct SimulatedTask {
    op: SimulatedOp,
    state: Signal<TaskState>,
}

pub fn use_simulated_task(op: SimulatedOp) -> SimulatedTask {
    let state = use_signal(TaskState::default);
    SimulatedTask { op, state }
}

impl SimulatedTask {
    pub fn is_pending(&self) -> bool {
        self.state.read().is_pending()
    }

    pub fn state(&self) -> TaskState {
        self.state.read().clone()
    }

    /// Start the operation unless one is already in flight. After the
    /// configured delay the task succeeds and `on_done` runs.
    pub fn run(&self, on_done: impl FnOnce() + 'static) {
        let mut state = self.state;
        if !state.write().begin() {
            debug!(op = self.op.label(), "ignored, already pending");
            return;
        }

        let op = self.op;
        let ms = op.duration_ms(&crate::config().timing);
        debug!(op = op.label(), ms, "simulated task started");

        spawn(async move {
            sleep_ms(ms).await;
            state.write().succeed();
            debug!(op = op.label(), "simulated task succeeded");
            on_done();
        });
    }
}
