//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Input routing order: modal overlay, detail overlay, active tab, then the
//! global bindings.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use crossterm::event::{MouseButton, MouseEventKind};
use punto_core::Tab;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{detail, feed, navbar, search};
use crate::overlays::{self, HelpState, Overlay};
use crate::state::{AppState, TouchTarget, TuiState, contains};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.tui.detail.settle_animation(Instant::now());
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::FrameRendered => {
            app.tui.detail.frame_rendered(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskCompleted { kind, completed } => {
            match kind {
                TaskKind::SearchDebounce => search::handle_debounce_elapsed(&mut app.tui, &completed),
                TaskKind::DetailDetach => detail::handle_detach_elapsed(&mut app.tui, &completed),
            }
            vec![]
        }
    };
    reconcile_overlay(app);
    effects
}

fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    let previous = tui.terminal_size;
    tui.terminal_size = (width, height);
    if previous == (width, height) {
        return;
    }
    let terminal = &tui.config.terminal;
    let content_rows = height.saturating_sub(navbar::HEIGHT);
    let page_height = f32::from(content_rows) * terminal.cell_height_px;
    let viewport_width = f32::from(width) * terminal.cell_width_px;
    tui.feed.set_page_height(page_height);
    tui.detail.resize(viewport_width);
}

/// The sources overlay mirrors the navigator's disclosure; drop it once the
/// disclosure is gone (event detached or replaced).
fn reconcile_overlay(app: &mut AppState) {
    if let Some(Overlay::Sources(state)) = &app.overlay
        && app.tui.detail.disclosure() != Some(state.disclosure)
    {
        app.overlay = None;
    }
}

fn close_overlay(app: &mut AppState) {
    if matches!(app.overlay, Some(Overlay::Sources(_))) {
        app.tui.detail.close_sources();
    }
    app.overlay = None;
}

fn apply_overlay_update(app: &mut AppState, update: &overlays::OverlayUpdate) {
    match update.transition {
        overlays::OverlayTransition::Stay => {}
        overlays::OverlayTransition::Close => close_overlay(app),
    }
}

fn apply_detail_outcome(app: &mut AppState, outcome: detail::DetailOutcome) -> Vec<UiEffect> {
    if let Some(overlay) = outcome.overlay {
        app.overlay = Some(overlay);
    }
    outcome.effects
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if let Some(update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        apply_overlay_update(app, &update);
        return vec![];
    }

    let detail_active = detail::is_interactive(&app.tui);
    if detail_active && let Some(outcome) = detail::handle_key(&mut app.tui, key) {
        return apply_detail_outcome(app, outcome);
    }

    if !detail_active {
        let handled = match app.tui.tabs.active() {
            Tab::Feed => feed::handle_key(&mut app.tui, key),
            Tab::Search => search::handle_key(&mut app.tui, key),
            Tab::Discover | Tab::Account => None,
        };
        if let Some(effects) = handled {
            return effects;
        }
    }

    handle_global_key(app, key)
}

fn handle_global_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('?') => {
            app.overlay = Some(Overlay::Help(HelpState));
            vec![]
        }
        KeyCode::Char(ch) => {
            if let Some(tab) = Tab::from_shortcut(ch) {
                app.tui.tabs.select(tab);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if app.overlay.is_some() {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && !contains(app.tui.hits.overlay.get(), mouse.column, mouse.row)
        {
            close_overlay(app);
        }
        return vec![];
    }

    if navbar::handle_mouse(&mut app.tui, mouse) {
        return vec![];
    }

    let detail_active = detail::is_interactive(&app.tui);
    if (detail_active || app.tui.touch == Some(TouchTarget::Detail))
        && let Some(outcome) = detail::handle_mouse(&mut app.tui, mouse)
    {
        return apply_detail_outcome(app, outcome);
    }
    if detail_active {
        return vec![];
    }

    match app.tui.tabs.active() {
        Tab::Feed => feed::handle_mouse(&mut app.tui, mouse).unwrap_or_default(),
        Tab::Search => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                search::handle_mouse_down(&mut app.tui, mouse.column, mouse.row)
            }
            MouseEventKind::ScrollDown => {
                search::handle_scroll(&mut app.tui, true);
                vec![]
            }
            MouseEventKind::ScrollUp => {
                search::handle_scroll(&mut app.tui, false);
                vec![]
            }
            _ => vec![],
        },
        Tab::Discover | Tab::Account => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use punto_core::config::Config;
    use punto_core::model::{Event as NewsEvent, Narrative, Source};
    use punto_core::{DetailPhase, EventStore};

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TimerOutcome};

    fn store() -> EventStore {
        let narratives = vec![
            Narrative::new("Oficial", "El gobierno celebra el acuerdo")
                .with_sources(vec![Source::new("Télam", ""), Source::new("Página 12", "")]),
            Narrative::new("Oposición", "La oposición denuncia el costo")
                .with_sources(vec![Source::new("Clarín", "")]),
        ];
        EventStore::from_events(vec![
            NewsEvent::new("a", "Acuerdo con el FMI", "Se firmó el acuerdo")
                .with_narratives(narratives),
            NewsEvent::new("b", "Paro de transporte", "No hay colectivos"),
        ])
        .unwrap()
    }

    fn app() -> AppState {
        let mut app = AppState::new(Config::default(), store());
        update(
            &mut app,
            UiEvent::Frame {
                width: 50,
                height: 24,
            },
        );
        app
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn timer(effects: &[UiEffect], wanted: TaskKind) -> Option<(TaskId, Duration)> {
        effects.iter().find_map(|effect| match effect {
            UiEffect::StartTimer {
                kind, task, delay, ..
            } if *kind == wanted => Some((*task, *delay)),
            _ => None,
        })
    }

    fn complete(app: &mut AppState, kind: TaskKind, id: TaskId, result: TimerOutcome) {
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted { id, result },
            },
        );
    }

    fn open_revealed(app: &mut AppState) {
        press(app, KeyCode::Enter);
        update(app, UiEvent::FrameRendered);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Open);
    }

    #[test]
    fn test_frame_sizes_feed_and_detail() {
        let app = app();
        assert!((app.tui.feed.page_height() - 22.0 * 16.0).abs() < f32::EPSILON);
        assert!((app.tui.detail.viewport_width() - 400.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_open_reveals_only_after_frame_rendered() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Opening);
        assert!(app.tui.awaiting_reveal());

        update(&mut app, UiEvent::FrameRendered);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Open);
        assert!(app.tui.detail.is_visible());
    }

    #[test]
    fn test_narratives_and_sources_walkthrough() {
        let mut app = app();
        open_revealed(&mut app);
        assert_eq!(app.tui.detail.active_narrative(), 0);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tui.detail.active_narrative(), 1);

        press(&mut app, KeyCode::Char('s'));
        let Some(Overlay::Sources(state)) = &app.overlay else {
            panic!("sources overlay should be open");
        };
        assert_eq!(state.disclosure.narrative_index, 1);

        // Esc closes the overlay, not the detail.
        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        assert!(app.tui.detail.disclosure().is_none());
        assert_eq!(app.tui.detail.phase(), DetailPhase::Open);

        let effects = press(&mut app, KeyCode::Esc);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Closing);
        let (id, delay) = timer(&effects, TaskKind::DetailDetach).unwrap();
        assert_eq!(delay, Duration::from_millis(350));

        complete(&mut app, TaskKind::DetailDetach, id, TimerOutcome::Elapsed);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Closed);
        assert_eq!(app.tui.detail.event(), None);
    }

    #[test]
    fn test_reopen_during_exit_ignores_stale_detach() {
        let mut app = app();
        open_revealed(&mut app);
        let effects = press(&mut app, KeyCode::Esc);
        let (stale, _) = timer(&effects, TaskKind::DetailDetach).unwrap();

        // Open B before A's exit timer fires.
        app.tui.feed.select(1);
        let effects = press(&mut app, KeyCode::Enter);
        assert!(effects.iter().any(|effect| matches!(
            effect,
            UiEffect::CancelTask {
                kind: TaskKind::DetailDetach,
                token: Some(_)
            }
        )));
        assert_eq!(app.tui.detail.event(), Some(1));

        // The cancelled timer may still report elapsed if it raced.
        complete(&mut app, TaskKind::DetailDetach, stale, TimerOutcome::Elapsed);
        assert_eq!(app.tui.detail.event(), Some(1));
        assert_eq!(app.tui.detail.phase(), DetailPhase::Opening);
    }

    #[test]
    fn test_detach_drops_sources_overlay() {
        let mut app = app();
        open_revealed(&mut app);
        app.overlay = detail::open_sources(&mut app.tui, 0);
        assert!(app.overlay.is_some());

        let effects = detail::back(&mut app.tui);
        let (id, _) = timer(&effects, TaskKind::DetailDetach).unwrap();
        complete(&mut app, TaskKind::DetailDetach, id, TimerOutcome::Elapsed);
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_global_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tui.tabs.active(), Tab::Search);

        // Printable keys belong to the search input on the search tab.
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.tui.search.query(), "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tui.tabs.active(), Tab::Feed);

        press(&mut app, KeyCode::Char('?'));
        assert!(matches!(app.overlay, Some(Overlay::Help(_))));
        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());

        let effects = press(&mut app, KeyCode::Char('q'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_tab_switch_keeps_detail_open() {
        let mut app = app();
        open_revealed(&mut app);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tui.tabs.active(), Tab::Discover);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Open);
    }

    fn draw(app: &AppState) {
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(50, 24)).unwrap();
        terminal
            .draw(|frame| crate::render::render(app, frame))
            .unwrap();
    }

    fn mouse(app: &mut AppState, kind: MouseEventKind, column: u16, row: u16) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        )
    }

    fn gesture(app: &mut AppState, from: (u16, u16), to: (u16, u16)) -> Vec<UiEffect> {
        mouse(app, MouseEventKind::Down(MouseButton::Left), from.0, from.1);
        mouse(app, MouseEventKind::Drag(MouseButton::Left), to.0, to.1);
        mouse(app, MouseEventKind::Up(MouseButton::Left), to.0, to.1)
    }

    #[test]
    fn test_swipe_tap_and_drag_dismiss_end_to_end() {
        let store = EventStore::from_events(vec![
            NewsEvent::new("a", "Acuerdo con el FMI", "Se firmó el acuerdo").with_narratives(
                vec![
                    Narrative::new("Oficial", "Celebran"),
                    Narrative::new("Oposición", "Critican"),
                ],
            ),
        ])
        .unwrap();
        let mut app = AppState::new(Config::default(), store);
        update(
            &mut app,
            UiEvent::Frame {
                width: 50,
                height: 24,
            },
        );
        draw(&app);

        // Swipe left on the card: 12 columns is 96px, past the 60px threshold.
        gesture(&mut app, (40, 10), (28, 10));
        assert_eq!(app.tui.detail.event(), Some(0));
        draw(&app);
        update(&mut app, UiEvent::FrameRendered);
        app.tui
            .detail
            .settle_animation(Instant::now() + Duration::from_secs(1));
        draw(&app);

        let pills = app.tui.hits.pills.borrow().clone();
        assert_eq!(pills.len(), 2);
        assert_eq!(app.tui.detail.active_narrative(), 0);

        // Tap the second pill's title.
        let opposition = pills[1].pill;
        gesture(
            &mut app,
            (opposition.x, opposition.y),
            (opposition.x, opposition.y),
        );
        assert_eq!(app.tui.detail.active_narrative(), 1);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Open);

        // Drag right 16 columns: 128px of a 400px viewport.
        let effects = gesture(&mut app, (10, 12), (26, 12));
        assert_eq!(app.tui.detail.phase(), DetailPhase::Closing);
        let (id, delay) = timer(&effects, TaskKind::DetailDetach).unwrap();
        assert_eq!(delay, Duration::from_millis(250));

        complete(&mut app, TaskKind::DetailDetach, id, TimerOutcome::Elapsed);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Closed);
        assert_eq!(app.tui.feed.current_index(), 0);
    }

    #[test]
    fn test_open_during_feed_drag_releases_the_touch() {
        let mut app = app();
        draw(&app);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 20, 10);
        assert_eq!(app.tui.touch, Some(TouchTarget::Feed));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tui.detail.event(), Some(0));
        assert_eq!(app.tui.touch, None);
        assert_eq!(app.tui.feed.touch_direction(), None);

        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 20, 10);
        assert_eq!(app.tui.touch, None);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Opening);
    }

    #[test]
    fn test_badge_tap_opens_sources_without_switching_tab() {
        let mut app = app();
        draw(&app);
        open_revealed(&mut app);
        app.tui
            .detail
            .settle_animation(Instant::now() + Duration::from_secs(1));
        draw(&app);

        let pills = app.tui.hits.pills.borrow().clone();
        let badge = pills[1].badge;
        assert!(contains(pills[1].pill, badge.x, badge.y));
        gesture(&mut app, (badge.x, badge.y), (badge.x, badge.y));

        let Some(Overlay::Sources(state)) = &app.overlay else {
            panic!("sources overlay should be open");
        };
        assert_eq!(state.disclosure.narrative_index, 1);
        assert_eq!(app.tui.detail.active_narrative(), 0);
        assert_eq!(app.tui.detail.phase(), DetailPhase::Open);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut app = app();
        draw(&app);
        open_revealed(&mut app);
        app.tui
            .detail
            .settle_animation(Instant::now() + Duration::from_secs(1));
        draw(&app);

        // 14 columns is 112px, under the 120px threshold.
        let effects = gesture(&mut app, (10, 12), (24, 12));
        assert!(timer(&effects, TaskKind::DetailDetach).is_none());
        assert_eq!(app.tui.detail.phase(), DetailPhase::Open);
    }

    #[test]
    fn test_click_outside_overlay_closes_it() {
        let mut app = app();
        app.overlay = Some(Overlay::Help(HelpState));
        app.tui.hits.overlay.set(ratatui::layout::Rect::new(10, 5, 20, 10));
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 1, 1);
        assert!(app.overlay.is_none());
    }
}
