//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay owns its state, key handler, and render function.
//!
//! - `sources.rs`: outlets backing one narrative of the open event
//! - `help.rs`: key bindings
//! - `render_utils.rs`: shared rendering helpers

pub mod help;
pub mod render_utils;
pub mod sources;

use crossterm::event::KeyEvent;
pub use help::HelpState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use sources::SourcesState;

use crate::state::TuiState;

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
        }
    }
}

#[derive(Debug)]
pub enum Overlay {
    Sources(SourcesState),
    Help(HelpState),
}

impl Overlay {
    /// Draws the overlay and returns its popup rect for click routing.
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) -> Rect {
        match self {
            Overlay::Sources(s) => s.render(frame, area, tui),
            Overlay::Help(h) => h.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Sources(s) => s.handle_key(tui, key),
            Overlay::Help(h) => h.handle_key(key),
        }
    }
}

/// Routes a key to the active overlay. `None` when no overlay is open.
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|overlay| overlay.handle_key(tui, key))
}

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) -> Option<Rect>;
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) -> Option<Rect> {
        self.as_ref()
            .map(|overlay| overlay.render(frame, area, tui))
    }
}
