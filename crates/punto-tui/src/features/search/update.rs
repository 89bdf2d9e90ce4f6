//! Search tab input handling.
//!
//! Every edit restarts a single debounce timer. Only the completion of the
//! latest timer applies the query, so a burst of keystrokes produces one
//! search against the final text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use punto_core::Tab;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskKind, TimerOutcome};
use crate::effects::UiEffect;
use crate::features::detail;
use crate::state::{TuiState, contains};

/// Restarts the debounce timer for the current query.
fn schedule_debounce(tui: &mut TuiState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    let task = tui.task_seq.next_id();
    let token = CancellationToken::new();
    if let Some(superseded) = tui.tasks.search_debounce.start(task, token.clone()) {
        effects.push(UiEffect::CancelTask {
            kind: TaskKind::SearchDebounce,
            token: Some(superseded),
        });
    }
    effects.push(UiEffect::StartTimer {
        kind: TaskKind::SearchDebounce,
        task,
        token,
        delay: tui.config.search.debounce(),
    });
    effects
}

pub fn handle_debounce_elapsed(tui: &mut TuiState, completed: &TaskCompleted<TimerOutcome>) {
    if !tui.tasks.search_debounce.finish_if_active(completed.id) {
        tracing::debug!(task = completed.id.0, "ignoring superseded search debounce");
        return;
    }
    if completed.result != TimerOutcome::Elapsed {
        return;
    }
    tui.search.settle(tui.store.events());
    tracing::debug!(
        query = tui.search.settled_query(),
        results = tui.search.results().len(),
        "search settled"
    );
}

fn open_selected(tui: &mut TuiState) -> Vec<UiEffect> {
    match tui.search.selected_event() {
        Some(index) => detail::open_event(tui, index),
        None => Vec::new(),
    }
}

/// Handles a key on the search tab. `None` when the key is left to the
/// global bindings.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => {
            tui.search.push_char(ch);
            Some(schedule_debounce(tui))
        }
        KeyCode::Backspace => Some(if tui.search.backspace() {
            schedule_debounce(tui)
        } else {
            Vec::new()
        }),
        KeyCode::Esc => {
            if tui.search.clear() {
                Some(schedule_debounce(tui))
            } else {
                tui.tabs.select(Tab::Feed);
                Some(Vec::new())
            }
        }
        KeyCode::Down => {
            tui.search.select_next();
            Some(Vec::new())
        }
        KeyCode::Up => {
            tui.search.select_previous();
            Some(Vec::new())
        }
        KeyCode::Enter => Some(open_selected(tui)),
        _ => None,
    }
}

/// Click on the clear button or a result row.
pub fn handle_mouse_down(tui: &mut TuiState, column: u16, row: u16) -> Vec<UiEffect> {
    if contains(tui.hits.search_clear.get(), column, row) {
        return if tui.search.clear() {
            schedule_debounce(tui)
        } else {
            Vec::new()
        };
    }
    let hit = tui
        .hits
        .search_results
        .borrow()
        .iter()
        .find(|(rect, _)| contains(*rect, column, row))
        .map(|(_, position)| *position);
    match hit {
        Some(position) => {
            tui.search.select(position);
            open_selected(tui)
        }
        None => Vec::new(),
    }
}

pub fn handle_scroll(tui: &mut TuiState, down: bool) {
    if down {
        tui.search.select_next();
    } else {
        tui.search.select_previous();
    }
}

#[cfg(test)]
mod tests {
    use punto_core::EventStore;
    use punto_core::config::Config;
    use punto_core::model::Event;
    use ratatui::layout::Rect;

    use super::*;
    use crate::common::TaskId;

    fn tui() -> TuiState {
        let store = EventStore::from_events(vec![
            Event::new("1", "Economía", "Suben los precios"),
            Event::new("2", "Fútbol", "La selección juega el martes"),
        ])
        .unwrap();
        TuiState::new(Config::default(), store)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn timer_id(effects: &[UiEffect]) -> TaskId {
        effects
            .iter()
            .find_map(|effect| match effect {
                UiEffect::StartTimer { task, .. } => Some(*task),
                _ => None,
            })
            .unwrap()
    }

    fn elapsed(id: TaskId) -> TaskCompleted<TimerOutcome> {
        TaskCompleted {
            id,
            result: TimerOutcome::Elapsed,
        }
    }

    #[test]
    fn test_typing_burst_settles_once_with_final_query() {
        let mut tui = tui();
        let mut ids = Vec::new();
        for ch in "fút".chars() {
            let effects = handle_key(&mut tui, key(KeyCode::Char(ch))).unwrap();
            ids.push(timer_id(&effects));
        }

        // Earlier timers lose the race even if they fire.
        handle_debounce_elapsed(&mut tui, &elapsed(ids[0]));
        assert_eq!(tui.search.settled_query(), "");
        assert_eq!(tui.search.results(), [0, 1]);

        handle_debounce_elapsed(&mut tui, &elapsed(ids[2]));
        assert_eq!(tui.search.settled_query(), "fút");
        assert_eq!(tui.search.results(), [1]);
    }

    #[test]
    fn test_restart_cancels_previous_timer() {
        let mut tui = tui();
        handle_key(&mut tui, key(KeyCode::Char('a'))).unwrap();
        let effects = handle_key(&mut tui, key(KeyCode::Char('b'))).unwrap();
        assert!(matches!(
            effects[0],
            UiEffect::CancelTask {
                kind: TaskKind::SearchDebounce,
                token: Some(_)
            }
        ));
    }

    #[test]
    fn test_cancelled_timer_does_not_settle() {
        let mut tui = tui();
        let effects = handle_key(&mut tui, key(KeyCode::Char('x'))).unwrap();
        let completed = TaskCompleted {
            id: timer_id(&effects),
            result: TimerOutcome::Cancelled,
        };
        handle_debounce_elapsed(&mut tui, &completed);
        assert!(tui.search.is_pending());
        assert!(!tui.tasks.search_debounce.is_running());
    }

    #[test]
    fn test_escape_clears_then_leaves_tab() {
        let mut tui = tui();
        tui.tabs.select(Tab::Search);
        handle_key(&mut tui, key(KeyCode::Char('x'))).unwrap();

        let effects = handle_key(&mut tui, key(KeyCode::Esc)).unwrap();
        assert_eq!(tui.search.query(), "");
        assert!(!effects.is_empty());
        assert_eq!(tui.tabs.active(), Tab::Search);

        handle_key(&mut tui, key(KeyCode::Esc)).unwrap();
        assert_eq!(tui.tabs.active(), Tab::Feed);
    }

    #[test]
    fn test_clicking_result_opens_detail() {
        let mut tui = tui();
        tui.hits
            .search_results
            .borrow_mut()
            .extend([(Rect::new(0, 4, 40, 2), 0), (Rect::new(0, 6, 40, 2), 1)]);
        let effects = handle_mouse_down(&mut tui, 3, 7);
        assert!(effects.is_empty());
        assert_eq!(tui.search.selected(), 1);
        assert_eq!(tui.detail.event(), Some(1));
    }

    #[test]
    fn test_control_keys_fall_through() {
        let mut tui = tui();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut tui, ctrl_c).is_none());
        assert_eq!(tui.search.query(), "");
    }
}
