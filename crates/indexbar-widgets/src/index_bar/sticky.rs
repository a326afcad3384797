#![forbid(unsafe_code)]

//! Sticky header layout.
//!
//! Given the resolved active anchor, decides for every anchor whether its
//! header is pinned to the top of the viewport, flows in place, or is being
//! pushed out by the next one. The result is a pure record per anchor; the
//! rendering layer applies it.
//!
//! # States
//!
//! - **Active**: always highlighted. Once its natural top has scrolled to or
//!   above the viewport edge (`reach_edge`), it is `Fixed` at the container's
//!   left and `sticky_offset_top` below the container's top. Before that it
//!   flows in place.
//! - **Predecessor** (`active - 1`): stays highlighted until the active one
//!   pins, and is shifted down inside its container by
//!   `parent_height - height` so its header sits at the bottom edge of its
//!   section. The incoming header then appears to push it off screen.
//! - **Everything else**: inactive, normal flow.
//!
//! # Invariants
//!
//! 1. At most one anchor is `Fixed`, and only when `reach_edge` holds.
//! 2. When an anchor is `Fixed`, its predecessor is inactive.
//! 3. With no active anchor, nothing is active or positioned.

use indexbar_core::geometry::Rect;

use super::rects::ChildRect;
use super::registry::AnchorSection;

/// CSS-style positioning of an anchor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorPosition {
    /// Pinned relative to the viewport.
    Fixed,
    /// Offset from its normal-flow position.
    Relative,
}

/// Layout decision for one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorLayout {
    /// Render the header in its active style.
    pub active: bool,
    /// `None` means normal flow.
    pub position: Option<AnchorPosition>,
    pub left: f32,
    pub top: f32,
}

impl AnchorLayout {
    /// Whether the header is pinned.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.position == Some(AnchorPosition::Fixed)
    }
}

/// Per-anchor layout for one scroll position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StickyLayout {
    /// One record per registered anchor, in document order.
    pub items: Vec<AnchorLayout>,
    /// Position of the pinned anchor, if any.
    pub pinned: Option<usize>,
    /// Distance from the active anchor's natural top to the viewport top.
    /// Zero when nothing is active.
    pub active_item_top: f32,
}

/// Inputs shared by every anchor in one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct StickyContext<'a> {
    pub active: Option<usize>,
    pub scroll_top: f32,
    pub rects: &'a [ChildRect],
    pub scroller_rect: Rect,
    pub sticky_offset_top: f32,
}

impl StickyContext<'_> {
    /// Compute sticky layout for `sections`.
    ///
    /// `sections` must be in the same order the rects were measured in.
    /// Sections beyond the measured rects are laid out as "everything else".
    #[must_use]
    pub fn layout<'s>(&self, sections: impl Iterator<Item = &'s AnchorSection>) -> StickyLayout {
        let active_item_top = self
            .active
            .and_then(|i| self.rects.get(i))
            .map_or(0.0, |rect| rect.top - self.scroll_top);
        let reach_edge = self.active.is_some_and(|i| i < self.rects.len()) && active_item_top <= 0.0;

        let mut pinned = None;
        let items = sections
            .enumerate()
            .map(|(index, item)| match self.active {
                Some(active) if index == active => {
                    if reach_edge {
                        pinned = Some(index);
                        AnchorLayout {
                            active: true,
                            position: Some(AnchorPosition::Fixed),
                            left: self.scroller_rect.left(),
                            top: self.sticky_offset_top + self.scroller_rect.top(),
                        }
                    } else {
                        AnchorLayout {
                            active: true,
                            position: Some(AnchorPosition::Relative),
                            left: 0.0,
                            top: 0.0,
                        }
                    }
                }
                Some(active) if index + 1 == active => AnchorLayout {
                    active: !reach_edge,
                    position: Some(AnchorPosition::Relative),
                    left: 0.0,
                    top: item.parent_height - item.height,
                },
                _ => AnchorLayout::default(),
            })
            .collect();

        StickyLayout {
            items,
            pinned,
            active_item_top,
        }
    }
}

/// Highlight-only layout used when sticky headers are disabled.
#[must_use]
pub fn highlight_only(active: Option<usize>, count: usize) -> StickyLayout {
    StickyLayout {
        items: (0..count)
            .map(|index| AnchorLayout {
                active: active == Some(index),
                ..AnchorLayout::default()
            })
            .collect(),
        pinned: None,
        active_item_top: 0.0,
    }
}
