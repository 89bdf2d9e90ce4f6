//! Detail overlay rendering.
//!
//! The overlay is drawn at full width into a scratch buffer and copied into
//! the frame shifted right by the current slide offset, so text does not
//! reflow while it moves.

use std::time::Instant;

use punto_core::model::{Event, Narrative};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::common::text::{clamp_lines, truncate_with_ellipsis, wrap};
use crate::common::theme;
use crate::state::{PillHit, TuiState};

const BACK_LABEL: &str = " ← Volver ";
const NO_NARRATIVES: &str = "Todavía no hay narrativas para esta noticia.";
const TITLE_MAX_LINES: usize = 3;

pub fn render_detail(tui: &TuiState, frame: &mut Frame, area: Rect, now: Instant) {
    tui.hits.pills.borrow_mut().clear();
    tui.hits.detail.set(Rect::default());
    tui.hits.detail_back.set(Rect::default());

    let Some(event) = tui.detail_event() else {
        return;
    };

    let cell_width = tui.config.terminal.cell_width_px;
    let shift = (tui.detail.offset_at(now) / cell_width).round().max(0.0) as u16;
    let shift = shift.min(area.width);
    if shift >= area.width || area.height == 0 {
        return;
    }

    let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
    let layout = draw(tui, event, &mut scratch);

    let buf = frame.buffer_mut();
    for y in 0..area.height {
        for x in 0..area.width - shift {
            buf[(area.x + shift + x, area.y + y)] = scratch[(x, y)].clone();
        }
    }

    let offset = |rect: Rect| {
        if rect.is_empty() {
            return rect;
        }
        let x = area.x + shift + rect.x;
        let right = (area.x + area.width).min(x.saturating_add(rect.width));
        Rect::new(x, area.y + rect.y, right.saturating_sub(x), rect.height)
    };
    tui.hits.detail.set(offset(Rect::new(0, 0, area.width, area.height)));
    tui.hits.detail_back.set(offset(layout.back));
    tui.hits.pills.borrow_mut().extend(layout.pills.iter().map(|hit| PillHit {
        narrative: hit.narrative,
        pill: offset(hit.pill),
        badge: offset(hit.badge),
    }));
}

/// Hit regions in scratch-buffer coordinates.
struct DetailLayout {
    back: Rect,
    pills: Vec<PillHit>,
}

fn draw(tui: &TuiState, event: &Event, buf: &mut Buffer) -> DetailLayout {
    let area = buf.area;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::accent());
    let inner = block.inner(area);
    block.render(area, buf);

    let content = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    let width = content.width as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();
    let back = Rect::new(content.x, content.y, BACK_LABEL.width() as u16, 1);
    lines.push(Line::from(Span::styled(BACK_LABEL, theme::accent_bold())));
    lines.push(Line::from(Span::styled(
        truncate_with_ellipsis(&format!("▣ {}", event.image_or_placeholder()), width),
        theme::muted(),
    )));
    lines.push(Line::default());
    for line in clamp_lines(&event.title, width, TITLE_MAX_LINES) {
        lines.push(Line::from(Span::styled(line, theme::bold())));
    }
    lines.push(Line::from(Span::styled(
        event.coverage_caption(),
        theme::muted(),
    )));
    lines.push(Line::default());

    let mut pills = Vec::new();
    let active = tui.detail.active_narrative();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0usize;
    for (index, narrative) in event.narratives.iter().enumerate() {
        let (pill_text, badge_text) = pill_labels(narrative, width);
        let pill_width = pill_text.width() + badge_text.width();
        if row_width > 0 && row_width + 1 + pill_width > width {
            lines.push(Line::from(std::mem::take(&mut row)));
            row_width = 0;
        }
        if row_width > 0 {
            row.push(Span::raw(" "));
            row_width += 1;
        }
        let y = content.y + lines.len() as u16;
        let x = content.x + row_width as u16;
        let pill = Rect::new(x, y, pill_width as u16, 1);
        let badge = Rect::new(
            x + pill_text.width() as u16,
            y,
            badge_text.width() as u16,
            1,
        );
        pills.push(PillHit {
            narrative: index,
            pill,
            badge,
        });

        let style = if index == active {
            theme::pill_active()
        } else {
            theme::pill_inactive()
        };
        row.push(Span::styled(pill_text, style));
        row.push(Span::styled(badge_text, style.add_modifier(Modifier::UNDERLINED)));
        row_width += pill_width;
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }
    lines.push(Line::default());

    match event.narrative(active) {
        Some(narrative) => push_narrative(&mut lines, event, narrative, width),
        None => lines.push(Line::from(Span::styled(NO_NARRATIVES, theme::muted()))),
    }

    Paragraph::new(lines).render(content, buf);
    DetailLayout { back, pills }
}

/// Pill title and its source badge, e.g. `" Oficial "` and `"[TP 2] "`.
fn pill_labels(narrative: &Narrative, width: usize) -> (String, String) {
    let initials: String = narrative
        .leading_sources(3)
        .iter()
        .filter_map(|source| source.outlet_name.chars().next())
        .collect();
    let badge = if initials.is_empty() {
        format!("[{}] ", narrative.sources.len())
    } else {
        format!("[{initials} {}] ", narrative.sources.len())
    };
    let title_room = width.saturating_sub(badge.width() + 2).max(1);
    let title = format!(" {} ", truncate_with_ellipsis(&narrative.title, title_room));
    (title, badge)
}

fn push_narrative(
    lines: &mut Vec<Line<'static>>,
    event: &Event,
    narrative: &Narrative,
    width: usize,
) {
    lines.push(Line::from(Span::styled(
        truncate_with_ellipsis(&narrative.title, width),
        theme::accent_bold(),
    )));
    for line in wrap(&narrative.summary, width) {
        lines.push(Line::from(line));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "FUENTES DE ESTA NARRATIVA",
        theme::muted().patch(theme::bold()),
    )));
    let names: Vec<&str> = narrative
        .sources
        .iter()
        .map(|source| source.outlet_name.as_str())
        .collect();
    if names.is_empty() {
        lines.push(Line::from(Span::styled("Sin fuentes", theme::muted())));
    } else {
        for line in wrap(&names.join(" · "), width) {
            lines.push(Line::from(line));
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "CONTEXTO DEL EVENTO",
        theme::accent_bold(),
    )));
    for line in wrap(&event.summary, width) {
        lines.push(Line::from(Span::styled(line, theme::muted())));
    }
}

#[cfg(test)]
mod tests {
    use punto_core::model::Source;

    use super::*;

    #[test]
    fn test_pill_labels_include_count_and_initials() {
        let narrative = Narrative::new("Oficial", "")
            .with_sources(vec![Source::new("Télam", ""), Source::new("Página 12", "")]);
        let (title, badge) = pill_labels(&narrative, 40);
        assert_eq!(title, " Oficial ");
        assert_eq!(badge, "[TP 2] ");
    }

    #[test]
    fn test_pill_labels_without_sources() {
        let narrative = Narrative::new("Mercados", "");
        let (_, badge) = pill_labels(&narrative, 40);
        assert_eq!(badge, "[0] ");
    }
}
