//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! return effects. The only writes are the hit rects in `HitAreas`, which the
//! reducer reads back to route mouse input.

use std::time::Instant;

use punto_core::Tab;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::features::{detail, feed, navbar, placeholder, search};
use crate::overlays::OverlayExt;
use crate::state::AppState;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let tui = &app.tui;
    let now = Instant::now();

    let [content, navbar_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(navbar::HEIGHT)]).areas(area);
    tui.hits.content.set(content);

    // Clear per-view hit rects; the active view re-records its own.
    tui.hits.feed_open.set(Rect::default());
    tui.hits.search_clear.set(Rect::default());
    tui.hits.search_results.borrow_mut().clear();

    match tui.tabs.active() {
        Tab::Feed => feed::render_feed(tui, frame, content),
        Tab::Search => search::render_search(tui, frame, content),
        tab @ (Tab::Discover | Tab::Account) => placeholder::render_placeholder(tab, frame, content),
    }

    if tui.detail.is_attached() {
        detail::render_detail(tui, frame, content, now);
    } else {
        tui.hits.detail.set(Rect::default());
        tui.hits.detail_back.set(Rect::default());
        tui.hits.pills.borrow_mut().clear();
    }

    navbar::render_navbar(tui, frame, navbar_area);

    let popup = app.overlay.render(frame, area, tui).unwrap_or_default();
    tui.hits.overlay.set(popup);
}

#[cfg(test)]
mod tests {
    use punto_core::EventStore;
    use punto_core::config::Config;
    use punto_core::model::{Event, Narrative, Source};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::features::detail::open_event;
    use crate::overlays::{HelpState, Overlay};

    fn app() -> AppState {
        let store = EventStore::from_events(vec![
            Event::new("a", "Acuerdo con el FMI", "Se firmó el acuerdo")
                .with_sources(vec![Source::new("Clarín", "")])
                .with_narratives(vec![
                    Narrative::new("Oficial", "Celebran")
                        .with_sources(vec![Source::new("Télam", "")]),
                ]),
        ])
        .unwrap();
        AppState::new(Config::default(), store)
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_feed_card_and_navbar() {
        let app = app();
        let screen = draw(&app);
        assert!(screen.contains("Punto Medio"));
        assert!(screen.contains("Acuerdo con el FMI"));
        assert!(screen.contains("Ver narrativas"));
        assert!(screen.contains("Inicio"));
        assert!(screen.contains("Cuenta"));
        assert_eq!(app.tui.hits.navbar.get()[0].y, 23);
        assert!(!app.tui.hits.feed_open.get().is_empty());
    }

    #[test]
    fn test_detail_stays_hidden_until_revealed() {
        let mut app = app();
        app.tui.detail.resize(60.0 * 8.0);
        open_event(&mut app.tui, 0);
        let screen = draw(&app);
        assert!(!screen.contains("Volver"));
        assert!(app.tui.hits.detail.get().is_empty());

        app.tui.detail.frame_rendered(Instant::now());
        // Skip the entrance slide.
        app.tui
            .detail
            .settle_animation(Instant::now() + std::time::Duration::from_secs(1));
        let screen = draw(&app);
        assert!(screen.contains("Volver"));
        assert!(screen.contains("Oficial"));
        assert!(!app.tui.hits.detail.get().is_empty());
        assert_eq!(app.tui.hits.pills.borrow().len(), 1);
    }

    #[test]
    fn test_help_overlay_records_popup() {
        let mut app = app();
        app.overlay = Some(Overlay::Help(HelpState));
        let screen = draw(&app);
        assert!(screen.contains("Atajos"));
        assert!(!app.tui.hits.overlay.get().is_empty());
    }

    #[test]
    fn test_placeholder_tab() {
        let mut app = app();
        app.tui.tabs.select(Tab::Discover);
        let screen = draw(&app);
        assert!(screen.contains("Descubrir"));
        assert!(screen.contains("Próximamente"));
    }
}
