//! Vertically paged feed.
//!
//! The feed tracks the event centered in the viewport from its scroll offset
//! and turns a decisive leftward horizontal swipe into a request to open that
//! event. Vertical motion belongs to scrolling and never opens anything.

use crate::config::GestureConfig;
use crate::gesture::{Direction, Point, TouchMove, TouchSequence};

/// Requests the feed hands to the rest of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCommand {
    /// Open the event at this store position in the detail view.
    Open(usize),
}

#[derive(Debug, Clone)]
pub struct FeedNavigator {
    len: usize,
    current_index: usize,
    scroll_offset: f32,
    page_height: f32,
    touch: Option<TouchSequence>,
    dead_zone: f32,
    open_threshold: f32,
}

impl FeedNavigator {
    pub fn new(len: usize, gestures: &GestureConfig) -> Self {
        Self {
            len,
            current_index: 0,
            scroll_offset: 0.0,
            page_height: 0.0,
            touch: None,
            dead_zone: gestures.feed_dead_zone_px,
            open_threshold: gestures.feed_open_threshold_px,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the centered event. Meaningless when the feed is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    fn max_offset(&self) -> f32 {
        self.len.saturating_sub(1) as f32 * self.page_height
    }

    /// Updates the page height (viewport resize) and keeps the current page
    /// in view.
    pub fn set_page_height(&mut self, page_height: f32) {
        let page_height = page_height.max(0.0);
        if (page_height - self.page_height).abs() < f32::EPSILON {
            return;
        }
        self.page_height = page_height;
        self.settle();
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.max_offset());
        self.current_index = self.index_for_offset(self.scroll_offset);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_offset + delta);
    }

    fn index_for_offset(&self, offset: f32) -> usize {
        if self.len == 0 || self.page_height <= 0.0 {
            return 0;
        }
        let index = (offset / self.page_height).round().max(0.0) as usize;
        index.min(self.len - 1)
    }

    /// Snaps the scroll offset to the current page.
    pub fn settle(&mut self) {
        self.scroll_offset = self.current_index as f32 * self.page_height;
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current_index = index;
            self.settle();
        }
    }

    pub fn next(&mut self) {
        self.select(self.current_index + 1);
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.current_index.checked_sub(1) {
            self.select(index);
        }
    }

    /// Open request for the centered event, used by the card's explicit
    /// control and the keyboard.
    pub fn open_current(&self) -> Option<FeedCommand> {
        (!self.is_empty()).then_some(FeedCommand::Open(self.current_index))
    }

    /// Direction lock of the touch in progress, if any.
    pub fn touch_direction(&self) -> Option<Direction> {
        self.touch.as_ref().map(TouchSequence::direction)
    }

    pub fn touch_start(&mut self, point: Point) {
        self.touch = Some(TouchSequence::begin(point, self.dead_zone));
    }

    /// Drops the touch in progress without emitting anything.
    pub fn touch_cancel(&mut self) {
        self.touch = None;
    }

    /// Tracks the finger. Returns the classified movement so the caller can
    /// scroll on vertical motion; `None` without a prior touch-start.
    pub fn touch_move(&mut self, point: Point) -> Option<TouchMove> {
        self.touch.as_mut().map(|touch| touch.move_to(point))
    }

    /// Ends the touch. Emits at most one open request.
    pub fn touch_end(&mut self, point: Point) -> Option<FeedCommand> {
        let mut touch = self.touch.take()?;
        let total = touch.end_at(point);
        if touch.direction() == Direction::Horizontal && total.dx < -self.open_threshold {
            tracing::debug!(index = self.current_index, dx = total.dx, "feed swipe opens event");
            return self.open_current();
        }
        None
    }
}
