//! Touch tracking and direction locking.
//!
//! A touch sequence stays undetermined until its displacement from the start
//! point exceeds the dead zone on either axis. At that moment the dominant
//! axis wins (horizontal only when strictly larger) and the lock holds until
//! the finger lifts.

/// A touch position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn delta_from(self, origin: Point) -> Delta {
        Delta {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

/// Sticky axis classification for a single touch sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionLock {
    dead_zone: f32,
    direction: Direction,
}

impl DirectionLock {
    pub fn new(dead_zone: f32) -> Self {
        Self {
            dead_zone,
            direction: Direction::Undetermined,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Feeds the total displacement since touch start. Once resolved, later
    /// observations do not change the direction.
    pub fn observe(&mut self, total: Delta) -> Direction {
        if self.direction == Direction::Undetermined {
            let ax = total.dx.abs();
            let ay = total.dy.abs();
            if ax > self.dead_zone || ay > self.dead_zone {
                self.direction = if ax > ay {
                    Direction::Horizontal
                } else {
                    Direction::Vertical
                };
            }
        }
        self.direction
    }
}

/// What a single touch-move did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchMove {
    pub direction: Direction,
    /// Movement since the previous sample.
    pub step: Delta,
    /// Movement since touch start.
    pub total: Delta,
}

/// One finger-down to finger-up interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSequence {
    start: Point,
    last: Point,
    lock: DirectionLock,
}

impl TouchSequence {
    pub fn begin(start: Point, dead_zone: f32) -> Self {
        Self {
            start,
            last: start,
            lock: DirectionLock::new(dead_zone),
        }
    }

    pub fn direction(&self) -> Direction {
        self.lock.direction()
    }

    /// Total displacement at the last sample.
    pub fn total(&self) -> Delta {
        self.last.delta_from(self.start)
    }

    pub fn move_to(&mut self, point: Point) -> TouchMove {
        let step = point.delta_from(self.last);
        self.last = point;
        let total = self.total();
        let direction = self.lock.observe(total);
        TouchMove {
            direction,
            step,
            total,
        }
    }

    /// Records the release point and returns the final displacement. The
    /// release never resolves the lock; only moves do.
    pub fn end_at(&mut self, point: Point) -> Delta {
        self.last = point;
        self.total()
    }
}
