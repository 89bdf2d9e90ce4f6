use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TimerOutcome};
use crate::events::UiEvent;

/// Sleeps for `delay` unless `cancel` fires first.
pub async fn timer(
    kind: TaskKind,
    id: TaskId,
    cancel: CancellationToken,
    delay: Duration,
) -> UiEvent {
    let result = tokio::select! {
        () = tokio::time::sleep(delay) => TimerOutcome::Elapsed,
        () = cancel.cancelled() => TimerOutcome::Cancelled,
    };
    UiEvent::TaskCompleted {
        kind,
        completed: TaskCompleted { id, result },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(event: UiEvent) -> TimerOutcome {
        match event {
            UiEvent::TaskCompleted { completed, .. } => completed.result,
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_elapses() {
        let event = timer(
            TaskKind::SearchDebounce,
            TaskId(1),
            CancellationToken::new(),
            Duration::from_millis(300),
        )
        .await;
        assert_eq!(outcome(event), TimerOutcome::Elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_reports_cancelled() {
        let token = CancellationToken::new();
        let handle = tokio::spawn(timer(
            TaskKind::DetailDetach,
            TaskId(2),
            token.clone(),
            Duration::from_secs(60),
        ));
        token.cancel();
        let event = handle.await.unwrap();
        assert_eq!(outcome(event), TimerOutcome::Cancelled);
    }
}
