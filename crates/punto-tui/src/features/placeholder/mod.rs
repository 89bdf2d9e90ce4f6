//! Tabs that only announce upcoming content.

use punto_core::Tab;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::common::theme;

pub fn render_placeholder(tab: Tab, frame: &mut Frame, area: Rect) {
    let Some((heading, body)) = tab.placeholder() else {
        return;
    };
    let lines = vec![
        Line::from(Span::styled(heading, theme::accent_bold())),
        Line::default(),
        Line::from(Span::styled(body, theme::muted())),
    ];
    let width = area.width.min(48);
    let inner = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.saturating_sub(4) / 2,
        width,
        area.height.min(6),
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
