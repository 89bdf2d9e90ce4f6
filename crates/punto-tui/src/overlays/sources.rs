//! Sources disclosure overlay.

use crossterm::event::{KeyCode, KeyEvent};
use punto_core::disclosure::{OUTLET_CAPTION, SourcesDisclosure};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::common::text::truncate_with_ellipsis;
use crate::common::theme;
use crate::state::TuiState;

const WIDTH: u16 = 56;
/// Rows per outlet: name and caption.
const ROW_HEIGHT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcesState {
    pub disclosure: SourcesDisclosure,
    /// First outlet shown.
    pub scroll: usize,
}

impl SourcesState {
    pub fn new(disclosure: SourcesDisclosure) -> Self {
        Self {
            disclosure,
            scroll: 0,
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let count = tui
            .detail_event()
            .map_or(0, |event| self.disclosure.sources(event).len());
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 's') | KeyCode::Enter => OverlayUpdate::close(),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll + 1 < count {
                    self.scroll += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) -> Rect {
        let Some(event) = tui.detail_event() else {
            return Rect::default();
        };
        let sources = self.disclosure.sources(event);
        let title = self.disclosure.title(event);
        let hints = [InputHint::new("Esc", "cerrar"), InputHint::new("↑↓", "desplazar")];
        // Border, description, spacer, rows, hints.
        let height = (sources.len() * ROW_HEIGHT + 5).min(u16::MAX as usize) as u16;
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: &title,
                border_color: theme::ACCENT,
                width: WIDTH,
                height,
                hints: &hints,
            },
        );

        let body = layout.body;
        let text_width = body.width.saturating_sub(2) as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                self.disclosure.description(event),
                theme::muted(),
            )),
            Line::default(),
        ];
        let visible_rows = (body.height as usize).saturating_sub(lines.len()) / ROW_HEIGHT;
        for source in sources.iter().skip(self.scroll).take(visible_rows) {
            lines.push(Line::from(vec![
                Span::styled("● ", theme::accent()),
                Span::styled(
                    truncate_with_ellipsis(&source.outlet_name, text_width),
                    theme::bold(),
                ),
            ]));
            let caption = format!("{OUTLET_CAPTION} · {}", source.icon_or_placeholder());
            lines.push(Line::from(Span::styled(
                format!("  {}", truncate_with_ellipsis(&caption, text_width)),
                theme::muted(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), body);
        layout.popup
    }
}
