#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Embedders translate native pointer, touch, and scroll notifications into
//! these values before handing them to a widget.
//!
//! # Design Notes
//!
//! - Coordinates are viewport-relative logical pixels (`clientX`/`clientY`).
//! - Only the first touch point of a multi-touch event is carried; the index
//!   bar never interprets more than one finger.
//! - `Tick` marks a frame boundary. Work deferred to "the next frame" runs
//!   when a widget sees it.

use crate::geometry::Point;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A touch event on the sidebar.
    Touch(TouchEvent),

    /// A click (or tap synthesized into a click) on the sidebar.
    Click(ClickEvent),

    /// The bound scroll container scrolled.
    Scroll,

    /// Frame boundary. Deferred recomputation is flushed here.
    Tick,
}

/// Phase of a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchEventKind {
    /// Finger went down.
    Start,
    /// Finger moved while down.
    Move,
    /// Finger lifted.
    End,
    /// The platform aborted the touch sequence.
    Cancel,
}

/// A touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// The phase of the touch sequence.
    pub kind: TouchEventKind,

    /// Position of the first touch point.
    pub point: Point,

    /// Whether the platform allows the default action to be suppressed.
    pub cancelable: bool,
}

impl TouchEvent {
    /// Create a new cancelable touch event.
    #[must_use]
    pub const fn new(kind: TouchEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            point: Point::new(x, y),
            cancelable: true,
        }
    }

    /// Override whether the event is cancelable.
    #[must_use]
    pub const fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Whether this event ends the touch sequence.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, TouchEventKind::End | TouchEventKind::Cancel)
    }
}

/// A click event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// Position of the click.
    pub point: Point,
}

impl ClickEvent {
    /// Create a new click event.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            point: Point::new(x, y),
        }
    }
}

impl From<TouchEvent> for Event {
    fn from(event: TouchEvent) -> Self {
        Self::Touch(event)
    }
}

impl From<ClickEvent> for Event {
    fn from(event: ClickEvent) -> Self {
        Self::Click(event)
    }
}
