#![forbid(unsafe_code)]

//! Explicit anchor registry owned by the bar.
//!
//! Anchor sections register themselves when mounted and unregister when
//! removed. The registry keeps them in document order and hands out stable
//! [`AnchorHandle`]s so a section can later update its geometry or leave
//! without the bar searching for it.
//!
//! Every mutation bumps a generation counter. The bar compares it against
//! the generation its rect cache was measured at to tell whether cached
//! geometry may be stale.

use indexbar_core::scroll::ElementId;

/// Stable handle to a registered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorHandle(u64);

impl AnchorHandle {
    /// Raw handle value.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A content section associated with one index label.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSection {
    /// Label matching an entry of the index list.
    pub label: String,
    /// Element the scroll host brings into view for this section.
    pub element: ElementId,
    /// Rendered height of the anchor header.
    pub height: f32,
    /// Viewport-relative top of the anchor at measurement time.
    pub rect_top: f32,
    /// Height of the section container holding the header.
    pub parent_height: f32,
}

impl AnchorSection {
    /// Create a section with zero geometry.
    #[must_use]
    pub fn new(label: impl Into<String>, element: ElementId) -> Self {
        Self {
            label: label.into(),
            element,
            height: 0.0,
            rect_top: 0.0,
            parent_height: 0.0,
        }
    }

    /// Set header height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set viewport-relative top.
    #[must_use]
    pub fn rect_top(mut self, top: f32) -> Self {
        self.rect_top = top;
        self
    }

    /// Set container height.
    #[must_use]
    pub fn parent_height(mut self, height: f32) -> Self {
        self.parent_height = height;
        self
    }
}

/// Ordered collection of registered anchor sections.
#[derive(Debug, Clone, Default)]
pub struct AnchorRegistry {
    entries: Vec<(AnchorHandle, AnchorSection)>,
    next_id: u64,
    generation: u64,
}

impl AnchorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section at the end of document order.
    pub fn register(&mut self, section: AnchorSection) -> AnchorHandle {
        self.insert(self.entries.len(), section)
    }

    /// Insert a section at `position` in document order (clamped to the end).
    pub fn insert(&mut self, position: usize, section: AnchorSection) -> AnchorHandle {
        let handle = AnchorHandle(self.next_id);
        self.next_id += 1;
        let position = position.min(self.entries.len());
        self.entries.insert(position, (handle, section));
        self.bump();
        handle
    }

    /// Remove a section, returning it if the handle was registered.
    pub fn unregister(&mut self, handle: AnchorHandle) -> Option<AnchorSection> {
        let pos = self.position_of(handle)?;
        let (_, section) = self.entries.remove(pos);
        self.bump();
        Some(section)
    }

    /// Replace a section's measured geometry.
    ///
    /// Returns `false` when the handle is unknown.
    pub fn update_geometry(
        &mut self,
        handle: AnchorHandle,
        height: f32,
        rect_top: f32,
        parent_height: f32,
    ) -> bool {
        let Some(pos) = self.position_of(handle) else {
            return false;
        };
        let section = &mut self.entries[pos].1;
        section.height = height;
        section.rect_top = rect_top;
        section.parent_height = parent_height;
        self.bump();
        true
    }

    /// Drop every section.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.bump();
        }
    }

    #[must_use]
    pub fn get(&self, handle: AnchorHandle) -> Option<&AnchorSection> {
        self.position_of(handle).map(|pos| &self.entries[pos].1)
    }

    /// Section at document-order position `pos`.
    #[must_use]
    pub fn at(&self, pos: usize) -> Option<&AnchorSection> {
        self.entries.get(pos).map(|(_, s)| s)
    }

    /// Document-order position of `handle`.
    #[must_use]
    pub fn position_of(&self, handle: AnchorHandle) -> Option<usize> {
        self.entries.iter().position(|(h, _)| *h == handle)
    }

    /// First section whose label equals `label`.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&AnchorSection> {
        self.sections().find(|s| s.label == label)
    }

    /// Sections in document order.
    pub fn sections(&self) -> impl ExactSizeIterator<Item = &AnchorSection> + Clone {
        self.entries.iter().map(|(_, s)| s)
    }

    /// Handles in document order.
    pub fn handles(&self) -> impl ExactSizeIterator<Item = AnchorHandle> + '_ {
        self.entries.iter().map(|(h, _)| *h)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutation counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether document order matches ascending `rect_top`.
    ///
    /// Active-anchor resolution scans boundaries assuming this holds.
    #[must_use]
    pub fn is_document_ordered(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].1.rect_top <= pair[1].1.rect_top)
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
