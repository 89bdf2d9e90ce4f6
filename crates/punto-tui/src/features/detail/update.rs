//! Detail overlay input handling.
//!
//! Translates the navigator's `DetailCommand`s into timer effects and routes
//! keys, taps and drags to the navigator.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use punto_core::gesture::Direction;
use punto_core::{DetailCommand, DetailPhase};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskKind, TimerOutcome};
use crate::effects::UiEffect;
use crate::overlays::{Overlay, SourcesState};
use crate::state::{TouchTarget, TuiState, contains};

/// Whether the overlay currently takes input.
pub fn is_interactive(tui: &TuiState) -> bool {
    matches!(
        tui.detail.phase(),
        DetailPhase::Opening | DetailPhase::Open | DetailPhase::Dragging
    )
}

/// Attaches the event at `index` to the detail overlay.
pub fn open_event(tui: &mut TuiState, index: usize) -> Vec<UiEffect> {
    let Some(event) = tui.store.get(index) else {
        return Vec::new();
    };
    let commands = tui.detail.open(index, event);
    // A drag in progress belongs to whatever was under the finger before.
    if tui.touch.take() == Some(TouchTarget::Feed) {
        tui.feed.touch_cancel();
    }
    run_commands(tui, commands)
}

pub fn back(tui: &mut TuiState) -> Vec<UiEffect> {
    let commands = tui.detail.back(Instant::now());
    run_commands(tui, commands)
}

fn run_commands(tui: &mut TuiState, commands: Vec<DetailCommand>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for command in commands {
        match command {
            DetailCommand::CancelPending => {
                if let Some(token) = tui.tasks.detail_detach.take_cancel() {
                    effects.push(UiEffect::CancelTask {
                        kind: TaskKind::DetailDetach,
                        token: Some(token),
                    });
                }
            }
            DetailCommand::ScheduleDetach(delay) => {
                let task = tui.task_seq.next_id();
                let token = CancellationToken::new();
                if let Some(superseded) = tui.tasks.detail_detach.start(task, token.clone()) {
                    effects.push(UiEffect::CancelTask {
                        kind: TaskKind::DetailDetach,
                        token: Some(superseded),
                    });
                }
                effects.push(UiEffect::StartTimer {
                    kind: TaskKind::DetailDetach,
                    task,
                    token,
                    delay,
                });
            }
        }
    }
    effects
}

/// Exit timer completion. Stale or cancelled timers are dropped.
pub fn handle_detach_elapsed(tui: &mut TuiState, completed: &TaskCompleted<TimerOutcome>) {
    if !tui.tasks.detail_detach.finish_if_active(completed.id) {
        tracing::warn!(task = completed.id.0, "ignoring stale detach timer");
        return;
    }
    if completed.result == TimerOutcome::Elapsed && tui.detail.detach_elapsed() {
        tracing::debug!("detail detached");
    }
}

/// Opens the sources overlay for a narrative of the attached event.
pub fn open_sources(tui: &mut TuiState, narrative: usize) -> Option<Overlay> {
    let index = tui.detail.event()?;
    let event = tui.store.get(index)?;
    if !tui.detail.open_sources(event, narrative) {
        return None;
    }
    tui.detail
        .disclosure()
        .map(|disclosure| Overlay::Sources(SourcesState::new(disclosure)))
}

/// Result of routing input to the detail overlay.
#[derive(Debug, Default)]
pub struct DetailOutcome {
    pub effects: Vec<UiEffect>,
    pub overlay: Option<Overlay>,
}

impl DetailOutcome {
    fn effects(effects: Vec<UiEffect>) -> Self {
        Self {
            effects,
            overlay: None,
        }
    }
}

/// Handles a key while the overlay is interactive. `None` when the key is not
/// a detail binding.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Option<DetailOutcome> {
    match key.code {
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => {
            Some(DetailOutcome::effects(back(tui)))
        }
        KeyCode::Tab => {
            tui.detail.cycle_narrative(true);
            Some(DetailOutcome::default())
        }
        KeyCode::BackTab => {
            tui.detail.cycle_narrative(false);
            Some(DetailOutcome::default())
        }
        KeyCode::Char('s') => {
            let narrative = tui.detail.active_narrative();
            Some(DetailOutcome {
                effects: Vec::new(),
                overlay: open_sources(tui, narrative),
            })
        }
        _ => None,
    }
}

/// Handles a mouse event while the overlay is interactive. Returns `None`
/// when the event is outside the overlay and not part of its drag.
pub fn handle_mouse(tui: &mut TuiState, mouse: MouseEvent) -> Option<DetailOutcome> {
    let point = tui.point_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !contains(tui.hits.detail.get(), mouse.column, mouse.row) {
                return None;
            }
            if tui.detail.touch_start(point) {
                tui.touch = Some(TouchTarget::Detail);
            }
            Some(DetailOutcome::default())
        }
        MouseEventKind::Drag(MouseButton::Left)
            if tui.touch == Some(TouchTarget::Detail) =>
        {
            tui.detail.touch_move(point);
            Some(DetailOutcome::default())
        }
        MouseEventKind::Up(MouseButton::Left)
            if tui.touch == Some(TouchTarget::Detail) =>
        {
            tui.touch = None;
            let was_tap = tui.detail.touch_direction() == Some(Direction::Undetermined);
            let commands = tui.detail.touch_end(point, Instant::now());
            let mut outcome = DetailOutcome::effects(run_commands(tui, commands));
            if was_tap && tui.detail.phase() == DetailPhase::Open {
                let tapped = handle_tap(tui, mouse.column, mouse.row);
                outcome.effects.extend(tapped.effects);
                outcome.overlay = tapped.overlay;
            }
            Some(outcome)
        }
        _ => None,
    }
}

/// A press and release without a decisive drag: back button, source badge,
/// or narrative pill. Badges are checked before pills so a badge tap opens
/// the disclosure without also switching tabs.
fn handle_tap(tui: &mut TuiState, column: u16, row: u16) -> DetailOutcome {
    if contains(tui.hits.detail_back.get(), column, row) {
        return DetailOutcome::effects(back(tui));
    }
    let pills = tui.hits.pills.borrow().clone();
    if let Some(hit) = pills.iter().find(|hit| contains(hit.badge, column, row)) {
        return DetailOutcome {
            effects: Vec::new(),
            overlay: open_sources(tui, hit.narrative),
        };
    }
    if let Some(hit) = pills.iter().find(|hit| contains(hit.pill, column, row)) {
        tui.detail.select_narrative(hit.narrative);
    }
    DetailOutcome::default()
}
