//! Feed input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use punto_core::FeedCommand;
use punto_core::gesture::Direction;

use crate::effects::UiEffect;
use crate::features::detail;
use crate::state::{TouchTarget, TuiState, contains};

fn run(tui: &mut TuiState, command: Option<FeedCommand>) -> Vec<UiEffect> {
    match command {
        Some(FeedCommand::Open(index)) => detail::open_event(tui, index),
        None => Vec::new(),
    }
}

/// Paging and open keys. `None` when the key is not a feed binding.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
            tui.feed.next();
            Some(Vec::new())
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
            tui.feed.previous();
            Some(Vec::new())
        }
        KeyCode::Home | KeyCode::Char('g') => {
            tui.feed.select(0);
            Some(Vec::new())
        }
        KeyCode::End | KeyCode::Char('G') => {
            tui.feed.select(tui.feed.len().saturating_sub(1));
            Some(Vec::new())
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            let command = tui.feed.open_current();
            Some(run(tui, command))
        }
        _ => None,
    }
}

/// Drag, tap and wheel handling for the feed. `None` when the event is
/// outside the feed and not part of its drag.
pub fn handle_mouse(tui: &mut TuiState, mouse: MouseEvent) -> Option<Vec<UiEffect>> {
    let point = tui.point_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !contains(tui.hits.content.get(), mouse.column, mouse.row) {
                return None;
            }
            tui.feed.touch_start(point);
            tui.touch = Some(TouchTarget::Feed);
            Some(Vec::new())
        }
        MouseEventKind::Drag(MouseButton::Left) if tui.touch == Some(TouchTarget::Feed) => {
            if let Some(step) = tui.feed.touch_move(point)
                && step.direction == Direction::Vertical
            {
                tui.feed.scroll_by(-step.step.dy);
            }
            Some(Vec::new())
        }
        MouseEventKind::Up(MouseButton::Left) if tui.touch == Some(TouchTarget::Feed) => {
            tui.touch = None;
            let was_tap = tui.feed.touch_direction() == Some(Direction::Undetermined);
            let mut command = tui.feed.touch_end(point);
            tui.feed.settle();
            if command.is_none()
                && was_tap
                && contains(tui.hits.feed_open.get(), mouse.column, mouse.row)
            {
                command = tui.feed.open_current();
            }
            Some(run(tui, command))
        }
        MouseEventKind::ScrollDown if contains(tui.hits.content.get(), mouse.column, mouse.row) => {
            tui.feed.next();
            Some(Vec::new())
        }
        MouseEventKind::ScrollUp if contains(tui.hits.content.get(), mouse.column, mouse.row) => {
            tui.feed.previous();
            Some(Vec::new())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use punto_core::EventStore;
    use punto_core::config::Config;
    use punto_core::model::Event;
    use ratatui::layout::Rect;

    use super::*;

    fn tui() -> TuiState {
        let store = EventStore::from_events(vec![
            Event::new("1", "Uno", ""),
            Event::new("2", "Dos", ""),
            Event::new("3", "Tres", ""),
        ])
        .unwrap();
        let mut tui = TuiState::new(Config::default(), store);
        tui.hits.content.set(Rect::new(0, 0, 80, 22));
        // 22 rows of 16px.
        tui.feed.set_page_height(352.0);
        tui
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drag(tui: &mut TuiState, from: (u16, u16), to: (u16, u16)) -> Vec<UiEffect> {
        handle_mouse(tui, mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1)).unwrap();
        handle_mouse(tui, mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1)).unwrap();
        handle_mouse(tui, mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1)).unwrap()
    }

    #[test]
    fn test_left_swipe_opens_current_event() {
        let mut tui = tui();
        tui.feed.select(1);
        // 12 columns of 8px is well past the open threshold.
        drag(&mut tui, (40, 10), (28, 10));
        assert_eq!(tui.detail.event(), Some(1));
        assert!(tui.touch.is_none());
    }

    #[test]
    fn test_vertical_drag_pages_without_opening() {
        let mut tui = tui();
        drag(&mut tui, (40, 20), (40, 6));
        assert_eq!(tui.feed.current_index(), 1);
        assert_eq!(tui.detail.event(), None);
    }

    #[test]
    fn test_tap_on_open_button_opens() {
        let mut tui = tui();
        tui.hits.feed_open.set(Rect::new(2, 18, 18, 1));
        drag(&mut tui, (5, 18), (5, 18));
        assert_eq!(tui.detail.event(), Some(0));
    }

    #[test]
    fn test_tap_elsewhere_does_nothing() {
        let mut tui = tui();
        tui.hits.feed_open.set(Rect::new(2, 18, 18, 1));
        drag(&mut tui, (40, 5), (40, 5));
        assert_eq!(tui.detail.event(), None);
    }

    #[test]
    fn test_keys_page_and_open() {
        let mut tui = tui();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        handle_key(&mut tui, key(KeyCode::Char('j'))).unwrap();
        handle_key(&mut tui, key(KeyCode::End)).unwrap();
        assert_eq!(tui.feed.current_index(), 2);
        handle_key(&mut tui, key(KeyCode::Enter)).unwrap();
        assert_eq!(tui.detail.event(), Some(2));
    }
}
