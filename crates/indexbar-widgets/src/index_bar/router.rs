#![forbid(unsafe_code)]

//! Gesture routing on the sidebar.
//!
//! Turns taps and vertical drags over the label strip into navigation
//! targets. The router only decides *which label* to go to; the bar performs
//! the scroll and emits the notification.
//!
//! # State Machine
//!
//! ```text
//! Idle ──touch start──▶ Tracking ──move (vertical)──▶ Dragging
//!   ▲                      │                             │
//!   └──── end / cancel ────┴──────── end / cancel ───────┘
//! ```
//!
//! While dragging, a label becomes a target only when it differs from the
//! last label targeted in the same drag, so sweeping a finger over N
//! distinct labels yields N targets and lingering on one yields one.
//! Gaps between labels (points with no label) neither target nor reset the
//! last label.

use indexbar_core::geometry::Point;
use indexbar_core::gesture::{TouchConfig, TouchTracker};

use super::sidebar::LabelLookup;

/// Result of routing one touch-move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragStep {
    /// Suppress the platform's default scrolling for this move.
    pub prevent_default: bool,
    /// Label to navigate to, when the finger entered a new label.
    pub target: Option<String>,
}

/// Transient drag-to-select state.
#[derive(Debug, Clone, Default)]
pub struct GestureRouter {
    tracker: TouchTracker,
    last_label: Option<String>,
}

impl GestureRouter {
    #[must_use]
    pub fn new(config: TouchConfig) -> Self {
        Self {
            tracker: TouchTracker::new(config),
            last_label: None,
        }
    }

    /// Label targeted by a tap at `point`.
    #[must_use]
    pub fn tap_target<L: LabelLookup + ?Sized>(&self, point: Point, lookup: &L) -> Option<String> {
        lookup.label_at(point).map(str::to_owned)
    }

    /// Begin tracking a touch.
    pub fn touch_start(&mut self, point: Point) {
        self.tracker.start(point);
    }

    /// Route a touch-move.
    ///
    /// Inert unless the gesture has been classified as vertical; a
    /// horizontal or undecided gesture leaves default scrolling alone.
    pub fn touch_move<L: LabelLookup + ?Sized>(
        &mut self,
        point: Point,
        cancelable: bool,
        lookup: &L,
    ) -> DragStep {
        if !self.tracker.move_to(point).is_vertical() {
            return DragStep::default();
        }

        let mut step = DragStep {
            prevent_default: cancelable,
            target: None,
        };
        if let Some(label) = lookup.label_at(point)
            && self.last_label.as_deref() != Some(label)
        {
            self.last_label = Some(label.to_owned());
            step.target = Some(label.to_owned());
        }
        step
    }

    /// End or cancel the touch sequence.
    pub fn touch_end(&mut self) {
        self.tracker.reset();
        self.last_label = None;
    }

    /// Last label targeted during the current drag.
    #[must_use]
    pub fn last_label(&self) -> Option<&str> {
        self.last_label.as_deref()
    }

    #[must_use]
    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }
}
