use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::common::theme;

const BINDINGS: &[(&str, &str)] = &[
    ("1-4", "cambiar de pestaña"),
    ("j/k ↑/↓", "noticia siguiente / anterior"),
    ("Enter →", "ver narrativas"),
    ("Esc ←", "volver"),
    ("Tab", "siguiente narrativa"),
    ("s", "fuentes de la narrativa"),
    ("arrastrar ←", "abrir noticia"),
    ("arrastrar →", "cerrar noticia"),
    ("Esc (Buscar)", "limpiar búsqueda"),
    ("?", "ayuda"),
    ("q", "salir"),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct HelpState;

impl HelpState {
    pub fn handle_key(self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) -> Rect {
        let hints = [InputHint::new("Esc", "cerrar")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Atajos",
                border_color: theme::ACCENT,
                width: 48,
                height: BINDINGS.len() as u16 + 3,
                hints: &hints,
            },
        );
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{key:>13}  "), theme::accent_bold()),
                    Span::raw(*action),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), layout.body);
        layout.popup
    }
}
