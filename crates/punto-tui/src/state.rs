//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── store: EventStore        (immutable dataset)
//! │   ├── tabs: TabRouter          (active top-level view)
//! │   ├── feed: FeedNavigator      (paged feed, swipe-to-open)
//! │   ├── detail: DetailNavigator  (detail overlay state machine)
//! │   ├── search: SearchState      (query, settled query, results)
//! │   ├── task_seq / tasks         (timer ids and lifecycle)
//! │   └── hits: HitAreas           (rects recorded by render for mouse routing)
//! └── overlay: Option<Overlay>     (modal overlays)
//! ```
//!
//! Overlays live beside `TuiState` so overlay handlers can borrow both.

use std::cell::{Cell, RefCell};
use std::time::Instant;

use punto_core::config::Config;
use punto_core::gesture::Point;
use punto_core::{DetailNavigator, DetailPhase, Event, EventStore, FeedNavigator, TabRouter};
use ratatui::layout::Rect;

use crate::common::{TaskSeq, Tasks};
use crate::features::search::SearchState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, store: EventStore) -> Self {
        Self {
            tui: TuiState::new(config, store),
            overlay: None,
        }
    }
}

/// Which surface owns the current mouse drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    Feed,
    Detail,
}

/// Clickable regions of a narrative pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillHit {
    pub narrative: usize,
    pub pill: Rect,
    pub badge: Rect,
}

/// Screen regions recorded during render, read back by the reducer to route
/// mouse input. Interior mutability keeps `render` taking `&AppState`.
#[derive(Debug, Default)]
pub struct HitAreas {
    pub content: Cell<Rect>,
    pub navbar: Cell<[Rect; 4]>,
    pub feed_open: Cell<Rect>,
    pub detail: Cell<Rect>,
    pub detail_back: Cell<Rect>,
    pub pills: RefCell<Vec<PillHit>>,
    pub search_clear: Cell<Rect>,
    pub search_results: RefCell<Vec<(Rect, usize)>>,
    pub overlay: Cell<Rect>,
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// TUI application state (non-overlay).
pub struct TuiState {
    pub should_quit: bool,
    pub config: Config,
    pub store: EventStore,
    pub tabs: TabRouter,
    pub feed: FeedNavigator,
    pub detail: DetailNavigator,
    pub search: SearchState,
    /// Task id sequence for timers.
    pub task_seq: TaskSeq,
    /// Timer lifecycle state.
    pub tasks: Tasks,
    pub touch: Option<TouchTarget>,
    /// Last terminal size seen in a `Frame` event (columns, rows).
    pub terminal_size: (u16, u16),
    pub hits: HitAreas,
}

impl TuiState {
    pub fn new(config: Config, store: EventStore) -> Self {
        let feed = FeedNavigator::new(store.len(), &config.gestures);
        let detail = DetailNavigator::new(&config.gestures, &config.animation);
        let search = SearchState::new(store.len());
        Self {
            should_quit: false,
            config,
            store,
            tabs: TabRouter::default(),
            feed,
            detail,
            search,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            touch: None,
            terminal_size: (0, 0),
            hits: HitAreas::default(),
        }
    }

    /// Converts a terminal cell to touch pixels.
    pub fn point_at(&self, column: u16, row: u16) -> Point {
        let terminal = &self.config.terminal;
        Point::new(
            f32::from(column) * terminal.cell_width_px,
            f32::from(row) * terminal.cell_height_px,
        )
    }

    /// The event attached to the detail overlay.
    pub fn detail_event(&self) -> Option<&Event> {
        self.detail.event().and_then(|index| self.store.get(index))
    }

    pub fn awaiting_reveal(&self) -> bool {
        self.detail.phase() == DetailPhase::Opening
    }

    /// Whether anything is moving and the runtime should tick at frame rate.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.detail.is_animating(now) || self.awaiting_reveal()
    }
}
