//! Feed card rendering.
//!
//! Cards are stacked one page apart and scrolled by the navigator's pixel
//! offset, so a drag moves the neighbouring card into view.

use punto_core::model::Event;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::common::text::{clamp_lines, truncate_with_ellipsis};
use crate::common::theme;
use crate::state::TuiState;

const OPEN_LABEL: &str = " Ver narrativas › ";
const EMPTY_FEED: &str = "No hay noticias para mostrar.";
const SUMMARY_MAX_LINES: usize = 4;
const TITLE_MAX_LINES: usize = 3;
const LEADING_OUTLETS: usize = 3;

pub fn render_feed(tui: &TuiState, frame: &mut Frame, area: Rect) {
    tui.hits.feed_open.set(Rect::default());
    if area.height < 3 || area.width < 8 {
        return;
    }

    let [header, cards] = split_header(area);
    render_header(frame, header);

    if tui.store.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_FEED, theme::muted())).alignment(Alignment::Center),
            Rect::new(cards.x, cards.y + cards.height / 2, cards.width, 1),
        );
        return;
    }

    // Leave a column for the page indicator.
    let card_area = Rect::new(cards.x, cards.y, cards.width.saturating_sub(2), cards.height);
    let page_rows = i32::from(card_area.height);
    let cell_height = tui.config.terminal.cell_height_px;
    let page_px = tui.feed.page_height();
    // Offset in rows, scaled so a full page of pixels moves a full card.
    let offset_rows = if page_px > 0.0 {
        (tui.feed.scroll_offset() / page_px * page_rows as f32).round() as i32
    } else {
        (tui.feed.scroll_offset() / cell_height).round() as i32
    };

    let current = tui.feed.current_index();
    let first = usize::try_from(offset_rows / page_rows.max(1)).unwrap_or(0);
    for index in first..=first + 1 {
        let Some(event) = tui.store.get(index) else {
            continue;
        };
        let top = index as i32 * page_rows - offset_rows;
        if top >= page_rows || top + page_rows <= 0 {
            continue;
        }
        let mut scratch = Buffer::empty(Rect::new(0, 0, card_area.width, card_area.height));
        let open = draw_card(event, &mut scratch);
        blit_rows(frame.buffer_mut(), &scratch, card_area, top);

        let open_row = top + i32::from(open.y);
        if index == current && (0..page_rows).contains(&open_row) {
            tui.hits.feed_open.set(Rect::new(
                card_area.x + open.x,
                card_area.y + open_row as u16,
                open.width,
                1,
            ));
        }
    }

    render_indicator(
        frame,
        Rect::new(cards.x + cards.width.saturating_sub(1), cards.y, 1, cards.height),
        current,
        tui.store.len(),
    );
}

fn split_header(area: Rect) -> [Rect; 2] {
    let header = Rect::new(area.x, area.y, area.width, 2);
    let rest = Rect::new(area.x, area.y + 2, area.width, area.height - 2);
    [header, rest]
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Punto Medio", theme::accent_bold()),
        Span::styled("  Deslizá para explorar", theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Copies a card drawn at origin into `area`, shifted down by `top` rows
/// and clipped to the area.
fn blit_rows(buf: &mut Buffer, card: &Buffer, area: Rect, top: i32) {
    for y in 0..area.height {
        let source = i32::from(y) - top;
        let Ok(source) = u16::try_from(source) else {
            continue;
        };
        if source >= area.height {
            continue;
        }
        for x in 0..area.width {
            buf[(area.x + x, area.y + y)] = card[(x, source)].clone();
        }
    }
}

/// Draws one card and returns the rect of its open button.
fn draw_card(event: &Event, buf: &mut Buffer) -> Rect {
    let area = buf.area;
    let width = area.width.saturating_sub(2) as usize;
    let content = Rect::new(1, 0, area.width.saturating_sub(2), area.height);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&format!("▣ {}", event.image_or_placeholder()), width),
            theme::muted(),
        )),
        Line::default(),
        outlets_line(event, width),
        Line::default(),
    ];
    for line in clamp_lines(&event.title, width, TITLE_MAX_LINES) {
        lines.push(Line::from(Span::styled(line, theme::bold())));
    }
    lines.push(Line::default());
    for line in clamp_lines(&event.summary, width, SUMMARY_MAX_LINES) {
        lines.push(Line::from(Span::styled(line, theme::muted())));
    }
    lines.push(Line::default());

    let open_row = lines.len().min(usize::from(area.height.saturating_sub(1))) as u16;
    let open_width = (OPEN_LABEL.width() as u16).min(content.width);
    lines.truncate(usize::from(open_row));
    lines.push(Line::from(Span::styled(OPEN_LABEL, theme::pill_active())));

    Paragraph::new(lines).render(content, buf);
    Rect::new(content.x, open_row, open_width, 1)
}

/// Up to three outlet names followed by the total source count.
fn outlets_line(event: &Event, width: usize) -> Line<'static> {
    let names: Vec<&str> = event
        .leading_sources(LEADING_OUTLETS)
        .iter()
        .map(|source| source.outlet_name.as_str())
        .collect();
    let count = match event.source_count() {
        1 => "1 fuente".to_string(),
        n => format!("{n} fuentes"),
    };
    if names.is_empty() {
        return Line::from(Span::styled(count, theme::muted()));
    }
    let names = truncate_with_ellipsis(&names.join(" · "), width.saturating_sub(count.width() + 3));
    Line::from(vec![
        Span::styled(names, theme::accent()),
        Span::styled(format!("  {count}"), theme::muted()),
    ])
}

/// One dot per event, the current one filled. Collapses to a position label
/// when the dots do not fit.
fn render_indicator(frame: &mut Frame, area: Rect, current: usize, len: usize) {
    if len <= 1 || area.height == 0 {
        return;
    }
    let lines: Vec<Line> = if len <= usize::from(area.height) {
        (0..len)
            .map(|index| {
                if index == current {
                    Line::from(Span::styled("●", theme::accent()))
                } else {
                    Line::from(Span::styled("·", theme::muted()))
                }
            })
            .collect()
    } else {
        vec![Line::from(Span::styled("●", theme::accent()))]
    };
    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    frame.render_widget(Paragraph::new(lines), Rect::new(area.x, top, 1, height));
}

#[cfg(test)]
mod tests {
    use punto_core::model::Source;

    use super::*;

    #[test]
    fn test_outlets_line_lists_leading_outlets_and_count() {
        let event = Event::new("1", "Título", "").with_sources(vec![
            Source::new("Clarín", ""),
            Source::new("La Nación", ""),
            Source::new("Página 12", ""),
            Source::new("Infobae", ""),
        ]);
        let text: String = outlets_line(&event, 80)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "Clarín · La Nación · Página 12  4 fuentes");
    }

    #[test]
    fn test_open_button_sits_below_summary() {
        let event = Event::new("1", "Título corto", "Resumen breve");
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 20));
        let open = draw_card(&event, &mut buf);
        // Image, blank, outlets, blank, title, blank, summary, blank.
        assert_eq!(open, Rect::new(1, 8, OPEN_LABEL.width() as u16, 1));
    }

    #[test]
    fn test_open_button_stays_on_short_cards() {
        let event = Event::new("1", "Título", "Resumen");
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 4));
        let open = draw_card(&event, &mut buf);
        assert_eq!(open.y, 3);
    }
}
