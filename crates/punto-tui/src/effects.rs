//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never spawns or sleeps; it decides, the runtime performs.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Sleep for `delay`, then report `TaskCompleted` unless `token` is
    /// cancelled first.
    StartTimer {
        kind: TaskKind,
        task: TaskId,
        token: CancellationToken,
        delay: Duration,
    },

    /// Cancel an in-flight timer.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
