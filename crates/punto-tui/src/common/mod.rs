//! Shared leaf types for TUI features.
//!
//! Contains types with no feature dependencies (tasks, text helpers, palette).
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod task;
pub mod text;
pub mod theme;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskState, Tasks, TimerOutcome};
