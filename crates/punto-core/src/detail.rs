//! Detail overlay state machine.
//!
//! ```text
//! Closed --open--> Opening --frame_rendered--> Open --touch_start--> Dragging
//!                                               ^                      |
//!                                               +------ snap back -----+
//! Open | Opening | Dragging --back / commit--> Closing --detach--> Closed
//! ```
//!
//! The navigator never sleeps. Deferred steps are returned as
//! [`DetailCommand`]s; the caller runs the timer and reports back through
//! [`DetailNavigator::detach_elapsed`]. Every transition that schedules a
//! deferred step first asks for the pending one to be cancelled, and a detach
//! that arrives outside `Closing` is ignored, so a stale timer from an earlier
//! close can never remove a newly opened event.

use std::time::{Duration, Instant};

use crate::animation::{Easing, SlideAnimation};
use crate::config::{AnimationConfig, GestureConfig};
use crate::disclosure::SourcesDisclosure;
use crate::gesture::{Direction, Point, TouchSequence};
use crate::model::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPhase {
    #[default]
    Closed,
    /// Payload attached but not yet revealed.
    Opening,
    Open,
    Dragging,
    /// Sliding out; the payload is detached when the exit timer fires.
    Closing,
}

/// Side effects the navigator asks its owner to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailCommand {
    /// Cancel any deferred step still pending.
    CancelPending,
    /// Call [`DetailNavigator::detach_elapsed`] after this delay.
    ScheduleDetach(Duration),
}

#[derive(Debug, Clone)]
pub struct DetailNavigator {
    gestures: GestureConfig,
    timings: AnimationConfig,
    phase: DetailPhase,
    event: Option<usize>,
    narrative_count: usize,
    active_narrative: usize,
    disclosure: Option<SourcesDisclosure>,
    visible: bool,
    viewport_width: f32,
    drag_offset: f32,
    touch: Option<TouchSequence>,
    animation: Option<SlideAnimation>,
}

impl DetailNavigator {
    pub fn new(gestures: &GestureConfig, timings: &AnimationConfig) -> Self {
        Self {
            gestures: gestures.clone(),
            timings: timings.clone(),
            phase: DetailPhase::Closed,
            event: None,
            narrative_count: 0,
            active_narrative: 0,
            disclosure: None,
            visible: false,
            viewport_width: 0.0,
            drag_offset: 0.0,
            touch: None,
            animation: None,
        }
    }

    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// Store position of the attached event.
    pub fn event(&self) -> Option<usize> {
        self.event
    }

    pub fn is_attached(&self) -> bool {
        self.event.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn active_narrative(&self) -> usize {
        self.active_narrative
    }

    pub fn disclosure(&self) -> Option<SourcesDisclosure> {
        self.disclosure
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Direction lock of the touch in progress, if any.
    pub fn touch_direction(&self) -> Option<Direction> {
        self.touch.as_ref().map(TouchSequence::direction)
    }

    /// Current rightward drag distance, never negative.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Attaches `event` (stored at `index`) hidden, ready to be revealed on the
    /// next rendered frame. Replaces whatever was attached, including an
    /// event still sliding out.
    pub fn open(&mut self, index: usize, event: &Event) -> Vec<DetailCommand> {
        tracing::debug!(index, id = %event.id, from = ?self.phase, "detail open");
        self.phase = DetailPhase::Opening;
        self.event = Some(index);
        self.narrative_count = event.narrative_count();
        self.active_narrative = 0;
        self.disclosure = None;
        self.visible = false;
        self.drag_offset = 0.0;
        self.touch = None;
        self.animation = None;
        vec![DetailCommand::CancelPending]
    }

    /// Ready signal: a frame containing the attached overlay has been drawn.
    /// Starts the entrance slide.
    pub fn frame_rendered(&mut self, now: Instant) {
        if self.phase != DetailPhase::Opening {
            return;
        }
        self.phase = DetailPhase::Open;
        self.visible = true;
        self.animation = Some(SlideAnimation::new(
            self.viewport_width,
            0.0,
            now,
            self.timings.enter(),
        ));
    }

    /// Finger down inside the overlay. Returns whether a drag began.
    pub fn touch_start(&mut self, point: Point) -> bool {
        if self.phase != DetailPhase::Open {
            return false;
        }
        self.phase = DetailPhase::Dragging;
        self.touch = Some(TouchSequence::begin(point, self.gestures.detail_dead_zone_px));
        self.drag_offset = 0.0;
        true
    }

    pub fn touch_move(&mut self, point: Point) {
        if self.phase != DetailPhase::Dragging {
            return;
        }
        let Some(touch) = self.touch.as_mut() else {
            return;
        };
        let moved = touch.move_to(point);
        if moved.direction == Direction::Horizontal {
            self.animation = None;
            self.drag_offset = moved.total.dx.max(0.0);
        }
    }

    /// Finger up. Commits the dismiss when the horizontal drag reached the
    /// threshold, otherwise springs back to `Open`.
    pub fn touch_end(&mut self, point: Point, now: Instant) -> Vec<DetailCommand> {
        if self.phase != DetailPhase::Dragging {
            return Vec::new();
        }
        let Some(mut touch) = self.touch.take() else {
            self.phase = DetailPhase::Open;
            return Vec::new();
        };
        let total = touch.end_at(point);
        let horizontal = touch.direction() == Direction::Horizontal;
        if horizontal {
            self.drag_offset = total.dx.max(0.0);
        }

        if horizontal && total.dx >= self.dismiss_threshold() {
            tracing::debug!(dx = total.dx, "detail drag commits dismiss");
            let exit = self.timings.drag_exit();
            self.phase = DetailPhase::Closing;
            self.visible = false;
            self.disclosure = None;
            // Already moving with the finger: carry on at constant speed.
            self.animation = Some(
                SlideAnimation::new(self.drag_offset, self.viewport_width, now, exit)
                    .with_easing(Easing::Linear),
            );
            return vec![
                DetailCommand::CancelPending,
                DetailCommand::ScheduleDetach(exit),
            ];
        }

        self.phase = DetailPhase::Open;
        if self.drag_offset > 0.0 {
            self.animation = Some(SlideAnimation::new(
                self.drag_offset,
                0.0,
                now,
                self.timings.enter(),
            ));
        }
        self.drag_offset = 0.0;
        Vec::new()
    }

    /// Drag distance that commits a dismiss.
    pub fn dismiss_threshold(&self) -> f32 {
        self.viewport_width * self.gestures.dismiss_ratio
    }

    /// Back control: hide immediately, slide out, detach later.
    pub fn back(&mut self, now: Instant) -> Vec<DetailCommand> {
        if !matches!(
            self.phase,
            DetailPhase::Opening | DetailPhase::Open | DetailPhase::Dragging
        ) {
            return Vec::new();
        }
        tracing::debug!(from = ?self.phase, "detail back");
        let from = self.offset_at(now);
        let exit = self.timings.back_exit();
        self.phase = DetailPhase::Closing;
        self.visible = false;
        self.disclosure = None;
        self.touch = None;
        self.drag_offset = 0.0;
        self.animation = Some(SlideAnimation::new(from, self.viewport_width, now, exit));
        vec![
            DetailCommand::CancelPending,
            DetailCommand::ScheduleDetach(exit),
        ]
    }

    /// The exit timer fired. Detaches the payload only while closing;
    /// returns whether it did.
    pub fn detach_elapsed(&mut self) -> bool {
        if self.phase != DetailPhase::Closing {
            tracing::warn!(phase = ?self.phase, "ignoring detach outside closing phase");
            return false;
        }
        self.phase = DetailPhase::Closed;
        self.event = None;
        self.narrative_count = 0;
        self.active_narrative = 0;
        self.disclosure = None;
        self.visible = false;
        self.drag_offset = 0.0;
        self.touch = None;
        self.animation = None;
        true
    }

    /// Selects a narrative tab. Out-of-range indices are ignored.
    pub fn select_narrative(&mut self, index: usize) {
        if self.is_attached() && index < self.narrative_count {
            self.active_narrative = index;
        }
    }

    /// Moves the active tab forward or backward, wrapping around.
    pub fn cycle_narrative(&mut self, forward: bool) {
        if !self.is_attached() || self.narrative_count == 0 {
            return;
        }
        let n = self.narrative_count;
        self.active_narrative = if forward {
            (self.active_narrative + 1) % n
        } else {
            (self.active_narrative + n - 1) % n
        };
    }

    /// Opens the sources disclosure for one narrative of the attached event.
    /// Leaves the active tab alone. Returns whether a disclosure opened.
    pub fn open_sources(&mut self, event: &Event, narrative_index: usize) -> bool {
        if !matches!(self.phase, DetailPhase::Open | DetailPhase::Dragging) {
            return false;
        }
        self.disclosure = SourcesDisclosure::for_narrative(event, narrative_index);
        self.disclosure.is_some()
    }

    pub fn close_sources(&mut self) {
        self.disclosure = None;
    }

    pub fn resize(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width.max(0.0);
    }

    /// Horizontal offset of the overlay in pixels: 0 is fully shown,
    /// `viewport_width` is fully off-screen.
    pub fn offset_at(&self, now: Instant) -> f32 {
        if let Some(animation) = &self.animation
            && !animation.is_finished(now)
        {
            return animation.offset_at(now);
        }
        match self.phase {
            DetailPhase::Open => 0.0,
            DetailPhase::Dragging => self.drag_offset,
            DetailPhase::Closed | DetailPhase::Opening | DetailPhase::Closing => {
                self.viewport_width
            }
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| !animation.is_finished(now))
    }

    /// Drops a finished animation.
    pub fn settle_animation(&mut self, now: Instant) {
        if self
            .animation
            .as_ref()
            .is_some_and(|animation| animation.is_finished(now))
        {
            self.animation = None;
        }
    }
}
