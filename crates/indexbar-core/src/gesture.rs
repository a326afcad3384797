#![forbid(unsafe_code)]

//! Touch-delta tracking: classifies a touch sequence by direction.
//!
//! [`TouchTracker`] records where a finger went down and, on every move,
//! the signed delta from that point plus its absolute offset. The first
//! move whose dominant axis exceeds the configured minimum distance fixes
//! the [`Direction`] for the rest of the sequence.
//!
//! # Invariants
//!
//! 1. Direction is sticky: once classified, later moves never reclassify it
//!    until the next [`start`](TouchTracker::start) or
//!    [`reset`](TouchTracker::reset).
//! 2. Offsets are always the absolute values of the deltas.
//! 3. A move without a prior start is measured from the move point itself,
//!    so it yields zero delta and leaves the direction undetermined.

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for direction classification.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchConfig {
    /// Minimum offset (pixels) on the dominant axis before a direction is
    /// assigned (default: 10.0).
    pub min_distance: f32,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self { min_distance: 10.0 }
    }
}

/// Classified direction of a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Not enough movement yet, or movement with no dominant axis.
    #[default]
    Undetermined,
    /// Dominant vertical movement.
    Vertical,
    /// Dominant horizontal movement.
    Horizontal,
}

impl Direction {
    /// Classify absolute offsets against a minimum distance.
    #[must_use]
    pub fn classify(offset_x: f32, offset_y: f32, min_distance: f32) -> Self {
        if offset_x > offset_y && offset_x > min_distance {
            Self::Horizontal
        } else if offset_y > offset_x && offset_y > min_distance {
            Self::Vertical
        } else {
            Self::Undetermined
        }
    }

    /// Whether this is [`Direction::Vertical`].
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

// ---------------------------------------------------------------------------
// TouchTracker
// ---------------------------------------------------------------------------

/// Stateful touch tracker.
///
/// Call [`start`](TouchTracker::start) on touch-start and
/// [`move_to`](TouchTracker::move_to) on every touch-move.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    config: TouchConfig,
    start: Option<Point>,
    delta: (f32, f32),
    offset: (f32, f32),
    direction: Direction,
}

impl TouchTracker {
    /// Create a new tracker with the given configuration.
    #[must_use]
    pub fn new(config: TouchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Begin a new touch sequence at `point`.
    pub fn start(&mut self, point: Point) {
        self.reset();
        self.start = Some(point);
    }

    /// Record a move to `point`, returning the (possibly locked) direction.
    pub fn move_to(&mut self, point: Point) -> Direction {
        let origin = *self.start.get_or_insert(point);
        let (dx, dy) = point.delta_from(origin);
        self.delta = (dx, dy);
        self.offset = (dx.abs(), dy.abs());

        if self.direction == Direction::Undetermined {
            self.direction =
                Direction::classify(self.offset.0, self.offset.1, self.config.min_distance);
        }
        self.direction
    }

    /// Reset all tracking state to idle.
    pub fn reset(&mut self) {
        self.start = None;
        self.delta = (0.0, 0.0);
        self.offset = (0.0, 0.0);
        self.direction = Direction::Undetermined;
    }

    /// Current classified direction.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Signed movement since the start point, `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> (f32, f32) {
        self.delta
    }

    /// Absolute movement since the start point.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Whether a touch sequence is in progress.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }
}
