//! UI event types.
//!
//! All external inputs (terminal, timers, render notifications) are converted
//! to `UiEvent` before being processed by the reducer.
//!
//! ## Timer Lifecycle
//!
//! Deferred work is a cancellable timer:
//! - The reducer allocates the `TaskId` and token and registers them in
//!   `TaskState` before emitting `UiEffect::StartTimer`
//! - The runtime sleeps in a spawned task and sends `UiEvent::TaskCompleted`
//! - The reducer honours a completion only if its id is still the active one

use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TimerOutcome};

#[derive(Debug)]
pub enum UiEvent {
    /// Frame cadence tick; the only event that triggers a render.
    Tick,
    /// Current terminal size, prepended to every batch of events.
    Frame { width: u16, height: u16 },
    /// A frame containing the attached (still hidden) detail overlay was drawn.
    FrameRendered,
    Terminal(CrosstermEvent),
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<TimerOutcome>,
    },
}
