#![forbid(unsafe_code)]

//! Cached anchor geometry.
//!
//! Anchor tops are measured once, in the scroll container's own coordinate
//! space, and reused for every scroll. Re-measuring per scroll would force a
//! layout query for every section on every frame. When anchors are added,
//! removed, or resized the caller must [`invalidate`](RectCache::invalidate)
//! before the next scroll; nothing here detects staleness.

use indexbar_core::geometry::Rect;

use super::registry::AnchorSection;

/// Measured geometry of one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChildRect {
    /// Header height at measurement time.
    pub height: f32,
    /// Offset from the top of the scrolled content.
    pub top: f32,
}

/// Lazily measured, index-aligned anchor rects.
#[derive(Debug, Clone, Default)]
pub struct RectCache {
    rects: Option<Vec<ChildRect>>,
    generation: u64,
}

impl RectCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure `sections` unless already measured.
    ///
    /// `scroll_top` and `scroller_rect` describe the container at the moment
    /// of measurement; `generation` is the registry generation they were read
    /// at. A second call before [`invalidate`](Self::invalidate) returns the
    /// existing rects untouched.
    pub fn get_or_measure<'a>(
        &mut self,
        scroll_top: f32,
        scroller_rect: Rect,
        generation: u64,
        sections: impl Iterator<Item = &'a AnchorSection>,
    ) -> &[ChildRect] {
        if self.rects.is_none() {
            self.generation = generation;
        }
        self.rects.get_or_insert_with(|| {
            sections
                .map(|s| ChildRect {
                    height: s.height,
                    top: scroll_top + (s.rect_top - scroller_rect.top()),
                })
                .collect()
        })
    }

    /// Cached rects, if measured.
    #[must_use]
    pub fn get(&self) -> Option<&[ChildRect]> {
        self.rects.as_deref()
    }

    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.rects.is_some()
    }

    /// Registry generation the cache was measured at.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        self.rects.as_ref().map(|_| self.generation)
    }

    /// Forget the cached rects; the next access re-measures.
    pub fn invalidate(&mut self) {
        self.rects = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexbar_core::scroll::ElementId;

    fn sections() -> Vec<AnchorSection> {
        vec![
            AnchorSection::new("A", ElementId::new(1)).height(20.0).rect_top(60.0),
            AnchorSection::new("B", ElementId::new(2)).height(24.0).rect_top(260.0),
        ]
    }

    #[test]
    fn measures_relative_to_container() {
        let mut cache = RectCache::new();
        let secs = sections();
        let rects = cache.get_or_measure(100.0, Rect::new(0.0, 60.0, 320.0, 400.0), 3, secs.iter());
        assert_eq!(
            rects,
            &[
                ChildRect { height: 20.0, top: 100.0 },
                ChildRect { height: 24.0, top: 300.0 },
            ]
        );
        assert_eq!(cache.generation(), Some(3));
    }

    #[test]
    fn second_measure_is_noop() {
        let mut cache = RectCache::new();
        let secs = sections();
        cache.get_or_measure(0.0, Rect::default(), 1, secs.iter());
        let moved: Vec<AnchorSection> = secs.iter().cloned().map(|s| s.rect_top(999.0)).collect();
        let rects = cache.get_or_measure(50.0, Rect::default(), 2, moved.iter());
        assert_eq!(rects[0].top, 60.0);
        assert_eq!(cache.generation(), Some(1));
    }

    #[test]
    fn invalidate_forces_remeasure() {
        let mut cache = RectCache::new();
        let secs = sections();
        cache.get_or_measure(0.0, Rect::default(), 1, secs.iter());
        cache.invalidate();
        assert!(!cache.is_measured());
        assert_eq!(cache.generation(), None);
        let rects = cache.get_or_measure(10.0, Rect::default(), 2, secs.iter());
        assert_eq!(rects[0].top, 70.0);
        assert_eq!(cache.generation(), Some(2));
    }

    #[test]
    fn empty_sections_measure_to_empty() {
        let mut cache = RectCache::new();
        let rects = cache.get_or_measure(0.0, Rect::default(), 0, std::iter::empty());
        assert!(rects.is_empty());
        assert!(cache.is_measured());
        assert_eq!(cache.get(), Some(&[][..]));
    }
}
