//! Palette shared by every view.

use ratatui::style::{Color, Modifier, Style};

/// Terracotta used for the brand, active tabs and calls to action.
pub const ACCENT: Color = Color::Rgb(0xD9, 0x77, 0x57);
pub const MUTED: Color = Color::DarkGray;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Filled pill, used for the active narrative tab.
pub fn pill_active() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn pill_inactive() -> Style {
    Style::default().fg(Color::Gray).bg(Color::Rgb(0x2A, 0x2A, 0x2A))
}
