use punto_core::search::{SearchOutcome, no_results_message};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::text::truncate_with_ellipsis;
use crate::common::theme;
use crate::overlays::render_utils::{InputLine, render_input_line};
use crate::state::TuiState;

const PLACEHOLDER: &str = "Buscar noticias, eventos...";
const CLEAR_LABEL: &str = " ✕ ";
/// Title row plus coverage row.
const RESULT_HEIGHT: u16 = 2;

pub fn render_search(tui: &TuiState, frame: &mut Frame, area: Rect) {
    tui.hits.search_clear.set(Rect::default());
    tui.hits.search_results.borrow_mut().clear();

    let [input_area, caption_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    render_input(tui, frame, input_area);

    let outcome = tui.search.outcome();
    let mut caption = vec![Span::styled(outcome.caption(), theme::muted())];
    if tui.search.is_pending() {
        caption.push(Span::styled("  buscando…", theme::accent()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(caption)),
        Rect::new(caption_area.x + 1, caption_area.y, caption_area.width.saturating_sub(2), 1),
    );

    if outcome == SearchOutcome::NoResults {
        let message = no_results_message(tui.search.settled_query());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, theme::muted())))
                .wrap(Wrap { trim: true }),
            Rect::new(list_area.x + 1, list_area.y, list_area.width.saturating_sub(2), list_area.height),
        );
        return;
    }
    render_results(tui, frame, list_area);
}

fn render_input(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let has_query = !tui.search.query().is_empty();
    let clear_width = if has_query { CLEAR_LABEL.chars().count() as u16 } else { 0 };
    let input_area = Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(clear_width),
        inner.height.min(1),
    );
    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: tui.search.query(),
            placeholder: Some(PLACEHOLDER),
            prompt: "⌕ ",
            prompt_color: theme::ACCENT,
            text_color: Color::Reset,
            placeholder_color: theme::MUTED,
            cursor_color: theme::ACCENT,
        },
    );

    if has_query {
        let clear = Rect::new(input_area.x + input_area.width, inner.y, clear_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(CLEAR_LABEL, theme::muted())),
            clear,
        );
        tui.hits.search_clear.set(clear);
    }
}

fn render_results(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let results = tui.search.results();
    let visible = (area.height / RESULT_HEIGHT) as usize;
    if visible == 0 {
        return;
    }
    // Keep the selection on screen.
    let first = tui.search.selected().saturating_sub(visible - 1);
    let text_width = area.width.saturating_sub(4) as usize;

    let mut hits = tui.hits.search_results.borrow_mut();
    for (row, (position, &index)) in results
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let Some(event) = tui.store.get(index) else {
            continue;
        };
        let rect = Rect::new(
            area.x,
            area.y + row as u16 * RESULT_HEIGHT,
            area.width,
            RESULT_HEIGHT,
        );
        let selected = position == tui.search.selected();
        let marker = if selected {
            Span::styled(" ▌ ", theme::accent())
        } else {
            Span::raw("   ")
        };
        let title_style = if selected {
            theme::accent_bold()
        } else {
            theme::bold()
        };
        let coverage = if event.source_count() == 1 {
            "1 fuente".to_string()
        } else {
            format!("{} fuentes", event.source_count())
        };
        let lines = vec![
            Line::from(vec![
                marker,
                Span::styled(truncate_with_ellipsis(&event.title, text_width), title_style),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(coverage, theme::muted().add_modifier(Modifier::ITALIC)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), rect);
        hits.push((rect, position));
    }
}
