#![forbid(unsafe_code)]

//! Scroll-host abstraction.
//!
//! A [`ScrollHost`] is whatever owns the scroll offset the index bar tracks:
//! the document (window) or an overflow element. The widget reads offsets and
//! bounding rects through it and asks it to bring sections into view.
//!
//! [`scroll_event_target`] finds the host for a given node by walking up to
//! the nearest vertically scrollable ancestor, and [`VirtualScroller`] is an
//! in-memory host for headless drivers and tests.

use ahash::AHashMap;

use crate::geometry::Rect;

/// Opaque identity of an element known to the scroll host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Create a new element id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id value.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// The platform scroll container.
pub trait ScrollHost {
    /// Current vertical scroll offset of the container.
    fn scroll_top(&self) -> f32;

    /// Bounding rectangle of the container in viewport coordinates.
    ///
    /// Hosts that cannot report one (the window, some embedders) return
    /// `None`; callers then treat the container as anchored at `{0, 0}`.
    fn bounding_rect(&self) -> Option<Rect> {
        None
    }

    /// Vertical scroll offset of the document root.
    fn root_scroll_top(&self) -> f32;

    /// Set the vertical scroll offset of the document root.
    fn set_root_scroll_top(&mut self, top: f32);

    /// Scroll so that `element`'s top aligns with the top of its container.
    fn scroll_into_view(&mut self, element: ElementId);
}

/// Bounding rect of `host`, falling back to an empty rect at the origin.
#[must_use]
pub fn scroller_rect<H: ScrollHost + ?Sized>(host: &H) -> Rect {
    host.bounding_rect().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Scroll target discovery
// ---------------------------------------------------------------------------

/// Computed vertical overflow of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    /// Whether content overflowing on this axis scrolls.
    #[must_use]
    pub const fn scrolls(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }
}

/// A node in the host's element tree.
pub trait ScrollNode: Sized {
    /// Parent element, or `None` at the document root.
    fn parent(&self) -> Option<Self>;

    /// Computed `overflow-y` of this node.
    fn overflow_y(&self) -> Overflow;
}

/// Where scroll events for a node are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollEventTarget<N> {
    /// The nearest scrollable ancestor (or the node itself).
    Element(N),
    /// No scrollable ancestor: the window scrolls.
    Root,
}

/// Find the scroll container for `node`.
///
/// Walks from `node` up through its ancestors and returns the first one with
/// a scrolling vertical overflow; falls back to [`ScrollEventTarget::Root`].
pub fn scroll_event_target<N: ScrollNode>(node: N) -> ScrollEventTarget<N> {
    let mut current = Some(node);
    while let Some(n) = current {
        if n.overflow_y().scrolls() {
            return ScrollEventTarget::Element(n);
        }
        current = n.parent();
    }
    ScrollEventTarget::Root
}

// ---------------------------------------------------------------------------
// VirtualScroller
// ---------------------------------------------------------------------------

/// Whether a [`VirtualScroller`] models the window or an overflow element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollerKind {
    /// The document scrolls; container and root offsets are the same value.
    Window,
    /// An overflow element scrolls inside a (separately scrolling) document.
    Element,
}

/// In-memory [`ScrollHost`].
///
/// Elements are registered with their offset from the top of the scrolled
/// content. `scroll_into_view` aligns the element's top with the container
/// top, clamped to the scrollable range.
#[derive(Debug, Clone)]
pub struct VirtualScroller {
    kind: ScrollerKind,
    rect: Option<Rect>,
    viewport_height: f32,
    content_height: f32,
    scroll_top: f32,
    root_scroll_top: f32,
    elements: AHashMap<ElementId, f32>,
}

impl VirtualScroller {
    /// A window scroller with the given viewport and content heights.
    #[must_use]
    pub fn window(viewport_height: f32, content_height: f32) -> Self {
        Self {
            kind: ScrollerKind::Window,
            rect: None,
            viewport_height,
            content_height,
            scroll_top: 0.0,
            root_scroll_top: 0.0,
            elements: AHashMap::new(),
        }
    }

    /// An element scroller occupying `rect` in the viewport.
    #[must_use]
    pub fn element(rect: Rect, content_height: f32) -> Self {
        Self {
            kind: ScrollerKind::Element,
            rect: Some(rect),
            viewport_height: rect.height,
            content_height,
            scroll_top: 0.0,
            root_scroll_top: 0.0,
            elements: AHashMap::new(),
        }
    }

    /// Register an element at `offset_top` within the scrolled content.
    #[must_use]
    pub fn with_element(mut self, id: ElementId, offset_top: f32) -> Self {
        self.elements.insert(id, offset_top);
        self
    }

    /// Register or move an element.
    pub fn set_element(&mut self, id: ElementId, offset_top: f32) {
        self.elements.insert(id, offset_top);
    }

    /// Scroller kind.
    #[must_use]
    pub fn kind(&self) -> ScrollerKind {
        self.kind
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll_top(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Scroll the container to `top`, clamped to the scrollable range.
    pub fn set_scroll_top(&mut self, top: f32) {
        self.scroll_top = top.clamp(0.0, self.max_scroll_top());
        if self.kind == ScrollerKind::Window {
            self.root_scroll_top = self.scroll_top;
        }
    }

    /// Offset of `id` from the top of the scrolled content.
    #[must_use]
    pub fn element_offset(&self, id: ElementId) -> Option<f32> {
        self.elements.get(&id).copied()
    }

    /// Current viewport-relative top of `id`, as a layout engine would
    /// report it from a bounding-rect query.
    #[must_use]
    pub fn element_rect_top(&self, id: ElementId) -> Option<f32> {
        let container_top = self.rect.map_or(0.0, |r| r.y);
        self.element_offset(id)
            .map(|offset| container_top + offset - self.scroll_top)
    }
}

impl ScrollHost for VirtualScroller {
    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.rect
    }

    fn root_scroll_top(&self) -> f32 {
        self.root_scroll_top
    }

    fn set_root_scroll_top(&mut self, top: f32) {
        match self.kind {
            ScrollerKind::Window => self.set_scroll_top(top),
            ScrollerKind::Element => self.root_scroll_top = top.max(0.0),
        }
    }

    fn scroll_into_view(&mut self, element: ElementId) {
        if let Some(offset) = self.element_offset(element) {
            self.set_scroll_top(offset);
        }
    }
}
