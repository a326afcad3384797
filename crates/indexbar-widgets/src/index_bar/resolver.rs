#![forbid(unsafe_code)]

//! Active-anchor resolution.
//!
//! The active anchor is the *latest* one whose trigger boundary the scroll
//! offset has crossed. Anchor `i` triggers when
//!
//! ```text
//! scroll_top + prev_height + sticky_offset_top >= rects[i].top
//! ```
//!
//! where `prev_height` is the header height of anchor `i - 1` (zero for the
//! first). The previous header is still pinned on screen, so section `i`
//! only takes over once that header has been pushed away; `sticky_offset_top`
//! moves the trigger line below fixed chrome above the viewport.
//!
//! The scan runs from the last anchor backward and the comparison is `>=`.
//! Both matter at section boundaries: when `prev_height` pulls a boundary
//! early, a later anchor wins over an earlier one that also qualifies.

use super::rects::ChildRect;

/// Resolve the active anchor position, or `None` above the first trigger.
#[must_use]
pub fn resolve_active(scroll_top: f32, rects: &[ChildRect], sticky_offset_top: f32) -> Option<usize> {
    (0..rects.len()).rev().find(|&i| {
        let prev_height = if i > 0 { rects[i - 1].height } else { 0.0 };
        scroll_top + prev_height + sticky_offset_top >= rects[i].top
    })
}
