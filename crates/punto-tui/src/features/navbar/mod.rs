//! Bottom tab bar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use punto_core::Tab;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::theme;
use crate::state::{TuiState, contains};

/// Rows taken by the navbar: top border and labels.
pub const HEIGHT: u16 = 2;

pub fn render_navbar(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(inner);
    let active = tui.tabs.active();
    for (tab, slot) in Tab::ALL.into_iter().zip(slots) {
        let style = if tab == active {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        let label = Line::from(vec![
            Span::styled(format!("{} ", tab.shortcut()), theme::muted()),
            Span::styled(tab.label(), style),
        ]);
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), slot);
    }
    tui.hits.navbar.set(slots);
}

/// Switches tab on a click inside the navbar. Returns whether it was handled.
pub fn handle_mouse(tui: &mut TuiState, mouse: MouseEvent) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    let slots = tui.hits.navbar.get();
    let Some(tab) = Tab::ALL
        .into_iter()
        .zip(slots)
        .find_map(|(tab, slot)| contains(slot, mouse.column, mouse.row).then_some(tab))
    else {
        return false;
    };
    tui.tabs.select(tab);
    true
}
