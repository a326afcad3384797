#![forbid(unsafe_code)]

//! Index bar widget.
//!
//! A vertical strip of labels (A–Z by default) beside a scrolling list of
//! anchor sections. Scrolling highlights the label of the section in view
//! and, with sticky headers enabled, pins that section's header to the top
//! of the viewport. Tapping a label, or dragging a finger along the strip,
//! scrolls its section into view and emits a [`SelectEvent`].
//!
//! # Pipeline
//!
//! ```text
//! Event::Scroll ─▶ resolve_active ─▶ StickyContext::layout ─▶ StickyLayout
//! Event::Click / Touch ─▶ GestureRouter ─▶ scroll_into_view ─▶ SelectEvent
//!                                              │
//!                     Event::Tick ◀── PROGRAMMATIC_SCROLL
//! ```
//!
//! Replacing the index list does not recompute immediately: sections for the
//! new labels may not have registered yet. The recompute runs at the next
//! frame boundary ([`Event::Tick`] or [`IndexBar::flush`]).
//!
//! # Geometry cache
//!
//! Anchor tops are measured once (on [`mount`](IndexBar::mount) or the first
//! scroll) and reused. After anchors are added, removed, or resized the
//! embedder must call [`invalidate_geometry`](IndexBar::invalidate_geometry);
//! [`geometry_may_be_stale`](IndexBar::geometry_may_be_stale) reports when
//! the registry changed since measurement.

pub mod config;
pub mod index_list;
pub mod registry;
pub mod rects;
pub mod resolver;
pub mod router;
pub mod sidebar;
pub mod sticky;

use bitflags::bitflags;
use indexbar_core::event::{Event, TouchEventKind};
use indexbar_core::geometry::Rect;
use indexbar_core::gesture::TouchConfig;
use indexbar_core::scroll::{ScrollHost, scroller_rect};
#[cfg(feature = "tracing")]
use web_time::Instant;

pub use config::{ConfigError, DEFAULT_HIGHLIGHT_COLOR, IndexBarConfig};
pub use index_list::IndexList;
pub use registry::{AnchorHandle, AnchorRegistry, AnchorSection};
pub use rects::{ChildRect, RectCache};
pub use resolver::resolve_active;
pub use router::{DragStep, GestureRouter};
pub use sidebar::{DEFAULT_ROW_HEIGHT, LabelCell, LabelLookup, SidebarItem, SidebarLayout};
pub use sticky::{AnchorLayout, AnchorPosition, StickyContext, StickyLayout, highlight_only};

bitflags! {
    /// Work deferred to the next frame boundary.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Invalidation: u8 {
        /// The index list was replaced.
        const INDEX_LIST = 1 << 0;
        /// The bar scrolled the host itself; the host may not echo a
        /// scroll event back.
        const PROGRAMMATIC_SCROLL = 1 << 1;
    }
}

/// What triggered a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectSource {
    /// Click or tap on a label.
    Tap,
    /// Finger dragged onto a label.
    Drag,
    /// Direct call to [`IndexBar::scroll_to_label`].
    Api,
}

impl SelectSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::Drag => "drag",
            Self::Api => "api",
        }
    }
}

/// Emitted once per successful navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEvent {
    /// Label of the section navigated to.
    pub index: String,
    pub source: SelectSource,
}

/// Result of dispatching one event to the bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventOutcome {
    /// Navigation performed while handling the event.
    pub select: Option<SelectEvent>,
    /// The platform's default action (touch scrolling) should be suppressed.
    pub prevent_default: bool,
    /// The bar moved the host's scroll position.
    pub scrolled: bool,
    /// Active label and anchor layout were recomputed.
    pub relayout: bool,
}

/// The index bar widget state.
#[derive(Debug, Clone)]
pub struct IndexBar {
    config: IndexBarConfig,
    registry: AnchorRegistry,
    rects: RectCache,
    router: GestureRouter,
    active: Option<usize>,
    active_anchor_index: Option<String>,
    layout: StickyLayout,
    pending: Invalidation,
}

impl Default for IndexBar {
    fn default() -> Self {
        Self::new(IndexBarConfig::default())
    }
}

impl IndexBar {
    #[must_use]
    pub fn new(config: IndexBarConfig) -> Self {
        Self {
            config,
            registry: AnchorRegistry::new(),
            rects: RectCache::new(),
            router: GestureRouter::new(TouchConfig::default()),
            active: None,
            active_anchor_index: None,
            layout: StickyLayout::default(),
            pending: Invalidation::empty(),
        }
    }

    /// Use a custom touch classification threshold.
    #[must_use]
    pub fn with_touch_config(mut self, touch: TouchConfig) -> Self {
        self.router = GestureRouter::new(touch);
        self
    }

    #[must_use]
    pub fn config(&self) -> &IndexBarConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A different index list schedules a recompute like
    /// [`set_index_list`](Self::set_index_list).
    pub fn set_config(&mut self, config: IndexBarConfig) {
        if config.index_list != self.config.index_list {
            self.pending |= Invalidation::INDEX_LIST;
        }
        self.config = config;
    }

    /// Replace the index list. Recomputation waits for the next frame.
    ///
    /// Returns `false` when `list` equals the current one.
    pub fn set_index_list(&mut self, list: IndexList) -> bool {
        if list == self.config.index_list {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "index_bar.index_list", len = list.len());
        self.config.index_list = list;
        self.pending |= Invalidation::INDEX_LIST;
        true
    }

    // --- Anchor registration ---

    #[must_use]
    pub fn registry(&self) -> &AnchorRegistry {
        &self.registry
    }

    /// Register a section at the end of document order.
    pub fn register(&mut self, section: AnchorSection) -> AnchorHandle {
        self.registry.register(section)
    }

    /// Register a section at `position` in document order.
    pub fn insert(&mut self, position: usize, section: AnchorSection) -> AnchorHandle {
        self.registry.insert(position, section)
    }

    /// Remove a section.
    pub fn unregister(&mut self, handle: AnchorHandle) -> Option<AnchorSection> {
        self.registry.unregister(handle)
    }

    /// Report new geometry for a section.
    pub fn update_geometry(
        &mut self,
        handle: AnchorHandle,
        height: f32,
        rect_top: f32,
        parent_height: f32,
    ) -> bool {
        self.registry
            .update_geometry(handle, height, rect_top, parent_height)
    }

    // --- Geometry ---

    /// Measure anchor geometry if not yet measured.
    pub fn mount<H: ScrollHost + ?Sized>(&mut self, host: &H) -> &[ChildRect] {
        self.measure(host.scroll_top(), scroller_rect(host))
    }

    /// Drop cached geometry; the next scroll re-measures.
    pub fn invalidate_geometry(&mut self) {
        self.rects.invalidate();
    }

    /// Whether anchors changed after geometry was measured.
    #[must_use]
    pub fn geometry_may_be_stale(&self) -> bool {
        self.rects
            .generation()
            .is_some_and(|g| g != self.registry.generation())
    }

    /// Cached geometry, if measured.
    #[must_use]
    pub fn children_rect(&self) -> Option<&[ChildRect]> {
        self.rects.get()
    }

    fn measure(&mut self, scroll_top: f32, scroller_rect: Rect) -> &[ChildRect] {
        #[cfg(feature = "tracing")]
        if !self.rects.is_measured() && !self.registry.is_document_ordered() {
            tracing::warn!(
                message = "index_bar.anchors_out_of_order",
                anchors = self.registry.len()
            );
        }
        self.rects.get_or_measure(
            scroll_top,
            scroller_rect,
            self.registry.generation(),
            self.registry.sections(),
        )
    }

    // --- Scroll pipeline ---

    /// Recompute the active anchor and sticky layout for the host's
    /// current scroll position.
    pub fn on_scroll<H: ScrollHost + ?Sized>(&mut self, host: &H) -> &StickyLayout {
        #[cfg(feature = "tracing")]
        let start = Instant::now();

        let scroll_top = host.scroll_top();
        let scroller_rect = scroller_rect(host);
        self.measure(scroll_top, scroller_rect);
        let rects = self.rects.get().unwrap_or_default();

        let active = resolve_active(scroll_top, rects, self.config.sticky_offset_top);
        self.active = active;
        self.active_anchor_index = active
            .and_then(|i| self.registry.at(i))
            .map(|section| section.label.clone());

        self.layout = if self.config.sticky {
            StickyContext {
                active,
                scroll_top,
                rects,
                scroller_rect,
                sticky_offset_top: self.config.sticky_offset_top,
            }
            .layout(self.registry.sections())
        } else {
            highlight_only(active, self.registry.len())
        };
        self.pending.remove(Invalidation::PROGRAMMATIC_SCROLL);

        #[cfg(feature = "tracing")]
        {
            let _span = tracing::debug_span!(
                "index_bar.scroll",
                scroll_top = f64::from(scroll_top),
                active = self.active_anchor_index.as_deref().unwrap_or(""),
                pinned = self.layout.pinned.is_some(),
                duration_us = start.elapsed().as_micros() as u64
            )
            .entered();
        }

        &self.layout
    }

    /// Run deferred work. Returns `true` when a recompute happened.
    pub fn flush<H: ScrollHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        self.pending = Invalidation::empty();
        self.on_scroll(host);
        true
    }

    /// Work waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> Invalidation {
        self.pending
    }

    // --- Navigation ---

    /// Scroll the section labelled `label` into view.
    ///
    /// Returns `None` (and leaves the host untouched) when `label` is empty or
    /// no registered section carries it.
    pub fn scroll_to_label<H: ScrollHost + ?Sized>(
        &mut self,
        label: &str,
        host: &mut H,
    ) -> Option<SelectEvent> {
        self.navigate(label, host, SelectSource::Api)
    }

    fn navigate<H: ScrollHost + ?Sized>(
        &mut self,
        label: &str,
        host: &mut H,
        source: SelectSource,
    ) -> Option<SelectEvent> {
        if label.is_empty() {
            return None;
        }
        let section = self.registry.find_by_label(label)?;
        host.scroll_into_view(section.element);

        let offset = self.config.sticky_offset_top;
        if offset > 0.0 {
            let root = host.root_scroll_top();
            host.set_root_scroll_top(root - offset);
        }
        self.pending |= Invalidation::PROGRAMMATIC_SCROLL;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "index_bar.select",
            label = %section.label,
            source = source.as_str()
        );

        Some(SelectEvent {
            index: section.label.clone(),
            source,
        })
    }

    /// Dispatch one input event.
    pub fn handle_event<L, H>(&mut self, event: &Event, lookup: &L, host: &mut H) -> EventOutcome
    where
        L: LabelLookup + ?Sized,
        H: ScrollHost + ?Sized,
    {
        let mut outcome = EventOutcome::default();
        match *event {
            Event::Scroll => {
                self.on_scroll(&*host);
                outcome.relayout = true;
            }
            Event::Tick => {
                outcome.relayout = self.flush(&*host);
            }
            Event::Click(click) => {
                if let Some(label) = self.router.tap_target(click.point, lookup) {
                    outcome.select = self.navigate(&label, host, SelectSource::Tap);
                }
            }
            Event::Touch(touch) => match touch.kind {
                TouchEventKind::Start => self.router.touch_start(touch.point),
                TouchEventKind::Move => {
                    let step = self.router.touch_move(touch.point, touch.cancelable, lookup);
                    outcome.prevent_default = step.prevent_default;
                    if let Some(label) = step.target {
                        outcome.select = self.navigate(&label, host, SelectSource::Drag);
                    }
                }
                TouchEventKind::End | TouchEventKind::Cancel => self.router.touch_end(),
            },
        }
        outcome.scrolled = outcome.select.is_some();
        outcome
    }

    // --- Render state ---

    /// Label of the active section.
    #[must_use]
    pub fn active_anchor_index(&self) -> Option<&str> {
        self.active_anchor_index.as_deref()
    }

    /// Document-order position of the active section.
    #[must_use]
    pub fn active_position(&self) -> Option<usize> {
        self.active
    }

    /// Layout from the last scroll pass.
    #[must_use]
    pub fn layout(&self) -> &StickyLayout {
        &self.layout
    }

    /// Layout record for one section, by handle.
    #[must_use]
    pub fn anchor_layout(&self, handle: AnchorHandle) -> Option<&AnchorLayout> {
        self.registry
            .position_of(handle)
            .and_then(|pos| self.layout.items.get(pos))
    }

    /// Per-label sidebar render state, in index-list order.
    #[must_use]
    pub fn sidebar_items(&self) -> Vec<SidebarItem<'_>> {
        let highlight = self.config.highlight();
        self.config
            .index_list
            .iter()
            .map(|label| {
                let active = self.active_anchor_index.as_deref() == Some(label);
                SidebarItem {
                    label,
                    active,
                    color: if active { highlight } else { None },
                }
            })
            .collect()
    }

    /// Sidebar geometry for `area` at the default row height.
    #[must_use]
    pub fn sidebar_layout(&self, area: Rect) -> SidebarLayout {
        SidebarLayout::new(area, &self.config.index_list, DEFAULT_ROW_HEIGHT)
    }

    /// Stacking order of the sidebar: one above pinned headers.
    #[must_use]
    pub fn sidebar_z_index(&self) -> i32 {
        self.config.z_index.saturating_add(1)
    }

    /// Last label targeted by the current drag, if any.
    #[must_use]
    pub fn touch_active_label(&self) -> Option<&str> {
        self.router.last_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexbar_core::event::{ClickEvent, TouchEvent};
    use indexbar_core::scroll::{ElementId, VirtualScroller};
    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing::Subscriber;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::Layer;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    const SIDEBAR: Rect = Rect::new(340.0, 0.0, 20.0, 640.0);

    /// Sections A, C, F: 300px tall, 30px headers, window scroller.
    fn setup(config: IndexBarConfig) -> (IndexBar, VirtualScroller) {
        let mut host = VirtualScroller::window(640.0, 2000.0);
        let mut bar = IndexBar::new(config);
        for (i, label) in ["A", "C", "F"].iter().enumerate() {
            let id = ElementId::new(i as u64);
            let top = 300.0 * i as f32;
            host.set_element(id, top);
            bar.register(
                AnchorSection::new(*label, id)
                    .height(30.0)
                    .rect_top(top)
                    .parent_height(300.0),
            );
        }
        bar.mount(&host);
        (bar, host)
    }

    #[test]
    fn default_bar_is_idle() {
        let bar = IndexBar::default();
        assert_eq!(bar.active_anchor_index(), None);
        assert!(bar.layout().items.is_empty());
        assert!(bar.pending().is_empty());
        assert_eq!(bar.sidebar_z_index(), 2);
        assert_eq!(bar.sidebar_items().len(), 26);
    }

    #[test]
    fn mount_measures_once() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        let first: Vec<ChildRect> = bar.children_rect().expect("measured").to_vec();
        host.set_scroll_top(500.0);
        bar.mount(&host);
        assert_eq!(bar.children_rect().expect("measured"), first.as_slice());
        assert_eq!(first[1], ChildRect { height: 30.0, top: 300.0 });
    }

    #[test]
    fn scroll_highlights_section_label_not_list_position() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        host.set_scroll_top(310.0);
        bar.on_scroll(&host);
        assert_eq!(bar.active_position(), Some(1));
        assert_eq!(bar.active_anchor_index(), Some("C"));
        let items = bar.sidebar_items();
        let active: Vec<&str> = items.iter().filter(|i| i.active).map(|i| i.label).collect();
        assert_eq!(active, vec!["C"]);
        let c = items.iter().find(|i| i.label == "C").expect("C in list");
        assert_eq!(c.color, Some(DEFAULT_HIGHLIGHT_COLOR));
        assert!(items.iter().filter(|i| !i.active).all(|i| i.color.is_none()));
    }

    #[test]
    fn sticky_disabled_only_highlights() {
        let (mut bar, mut host) = setup(IndexBarConfig::default().sticky(false));
        host.set_scroll_top(610.0);
        let layout = bar.on_scroll(&host).clone();
        assert_eq!(layout.pinned, None);
        assert!(layout.items[2].active);
        assert!(layout.items.iter().all(|i| i.position.is_none()));
    }

    #[test]
    fn anchor_layout_by_handle() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        host.set_scroll_top(320.0);
        bar.on_scroll(&host);
        let handles: Vec<AnchorHandle> = bar.registry().handles().collect();
        assert!(bar.anchor_layout(handles[1]).expect("laid out").is_fixed());
        assert!(!bar.anchor_layout(handles[0]).expect("laid out").active);
    }

    #[test]
    fn index_list_change_is_deferred() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        host.set_scroll_top(320.0);
        let list = IndexList::new(["A", "C", "F"]).expect("unique");
        assert!(bar.set_index_list(list.clone()));
        assert_eq!(bar.active_anchor_index(), None);
        assert!(bar.pending().contains(Invalidation::INDEX_LIST));
        assert!(!bar.set_index_list(list));

        let sidebar = bar.sidebar_layout(SIDEBAR);
        let outcome = bar.handle_event(&Event::Tick, &sidebar, &mut host);
        assert!(outcome.relayout);
        assert_eq!(bar.active_anchor_index(), Some("C"));
        assert!(bar.pending().is_empty());
        assert!(!bar.flush(&host));
    }

    #[test]
    fn set_config_with_new_list_schedules_recompute() {
        let (mut bar, _host) = setup(IndexBarConfig::default());
        bar.set_config(IndexBarConfig::default().z_index(5));
        assert!(bar.pending().is_empty());
        let list = IndexList::new(["A"]).expect("unique");
        bar.set_config(IndexBarConfig::default().index_list(list));
        assert!(bar.pending().contains(Invalidation::INDEX_LIST));
    }

    #[test]
    fn click_navigates_and_schedules_relayout() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        let sidebar = bar.sidebar_layout(SIDEBAR);
        let p = sidebar.cell_center("F").expect("F laid out");
        let outcome = bar.handle_event(&ClickEvent::new(p.x, p.y).into(), &sidebar, &mut host);
        assert_eq!(
            outcome.select,
            Some(SelectEvent {
                index: "F".into(),
                source: SelectSource::Tap
            })
        );
        assert!(outcome.scrolled);
        assert_eq!(host.scroll_top(), 600.0);
        assert!(bar.pending().contains(Invalidation::PROGRAMMATIC_SCROLL));
        bar.flush(&host);
        assert_eq!(bar.active_anchor_index(), Some("F"));
    }

    #[test]
    fn click_on_label_without_section_is_noop() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        host.set_scroll_top(42.0);
        let sidebar = bar.sidebar_layout(SIDEBAR);
        let p = sidebar.cell_center("B").expect("B laid out");
        let outcome = bar.handle_event(&ClickEvent::new(p.x, p.y).into(), &sidebar, &mut host);
        assert_eq!(outcome, EventOutcome::default());
        assert_eq!(host.scroll_top(), 42.0);
        assert!(bar.pending().is_empty());
    }

    #[test]
    fn sticky_offset_compensates_root_scroll() {
        let (mut bar, mut host) = setup(IndexBarConfig::default().sticky_offset_top(46.0));
        let select = bar.scroll_to_label("C", &mut host).expect("C registered");
        assert_eq!(select.source, SelectSource::Api);
        assert_eq!(host.scroll_top(), 254.0);
    }

    #[test]
    fn negative_sticky_offset_is_not_compensated() {
        let (mut bar, mut host) = setup(IndexBarConfig::default().sticky_offset_top(-10.0));
        bar.scroll_to_label("C", &mut host).expect("C registered");
        assert_eq!(host.scroll_top(), 300.0);
    }

    #[test]
    fn empty_label_is_noop() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        assert!(bar.scroll_to_label("", &mut host).is_none());
    }

    #[test]
    fn drag_emits_once_per_label() {
        let (mut bar, mut host) = setup(IndexBarConfig::default());
        let sidebar = bar.sidebar_layout(SIDEBAR);
        let a = sidebar.cell_center("A").expect("A");
        let f = sidebar.cell_center("F").expect("F");
        bar.handle_event(&TouchEvent::new(TouchEventKind::Start, a.x, a.y - 20.0).into(), &sidebar, &mut host);

        let mut selected = Vec::new();
        let mut y = a.y;
        while y <= f.y {
            let outcome = bar.handle_event(
                &TouchEvent::new(TouchEventKind::Move, a.x, y).into(),
                &sidebar,
                &mut host,
            );
            assert!(outcome.prevent_default);
            selected.extend(outcome.select.map(|s| s.index));
            y += 3.0;
        }
        assert_eq!(selected, vec!["A", "C", "F"]);
        assert_eq!(bar.touch_active_label(), Some("F"));

        bar.handle_event(&TouchEvent::new(TouchEventKind::End, a.x, y).into(), &sidebar, &mut host);
        assert_eq!(bar.touch_active_label(), None);
    }

    #[test]
    fn geometry_staleness_tracks_registry() {
        let (mut bar, host) = setup(IndexBarConfig::default());
        assert!(!bar.geometry_may_be_stale());
        let h = bar.register(AnchorSection::new("Z", ElementId::new(99)).rect_top(900.0));
        assert!(bar.geometry_may_be_stale());
        bar.invalidate_geometry();
        assert!(!bar.geometry_may_be_stale());
        bar.mount(&host);
        assert_eq!(bar.children_rect().map(<[ChildRect]>::len), Some(4));
        assert!(bar.update_geometry(h, 30.0, 910.0, 300.0));
        assert!(bar.geometry_may_be_stale());
        assert!(bar.unregister(h).is_some());
    }

    #[test]
    fn scroll_before_mount_measures_lazily() {
        let mut host = VirtualScroller::window(640.0, 2000.0);
        let mut bar = IndexBar::default();
        bar.register(AnchorSection::new("A", ElementId::new(0)).height(30.0));
        host.set_scroll_top(10.0);
        bar.on_scroll(&host);
        assert!(bar.children_rect().is_some());
        assert_eq!(bar.active_anchor_index(), Some("A"));
    }

    #[test]
    fn empty_registry_highlights_nothing() {
        let host = VirtualScroller::window(640.0, 2000.0);
        let mut bar = IndexBar::default();
        let layout = bar.on_scroll(&host);
        assert!(layout.items.is_empty());
        assert_eq!(layout.pinned, None);
        assert_eq!(bar.active_anchor_index(), None);
        assert!(bar.sidebar_items().iter().all(|i| !i.active));
    }

    #[cfg(feature = "tracing")]
    #[derive(Debug, Default)]
    struct ScrollTraceState {
        span_count: usize,
        actives: Vec<String>,
        has_duration_field: bool,
    }

    #[cfg(feature = "tracing")]
    struct ScrollTraceCapture {
        state: Arc<Mutex<ScrollTraceState>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> Layer<S> for ScrollTraceCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::Id,
            _ctx: Context<'_, S>,
        ) {
            if attrs.metadata().name() != "index_bar.scroll" {
                return;
            }

            #[derive(Default)]
            struct ScrollVisitor {
                active: Option<String>,
            }

            impl tracing::field::Visit for ScrollVisitor {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "active" {
                        self.active = Some(value.to_owned());
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "active" {
                        self.active = Some(format!("{value:?}").trim_matches('"').to_owned());
                    }
                }
            }

            let fields = attrs.metadata().fields();
            let mut visitor = ScrollVisitor::default();
            attrs.record(&mut visitor);

            let mut state = self.state.lock().expect("trace state lock");
            state.span_count += 1;
            state.has_duration_field |= fields.field("duration_us").is_some();
            if let Some(active) = visitor.active {
                state.actives.push(active);
            }
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn scroll_emits_trace_span_with_active_label() {
        let state = Arc::new(Mutex::new(ScrollTraceState::default()));
        let subscriber = tracing_subscriber::registry().with(ScrollTraceCapture {
            state: Arc::clone(&state),
        });

        tracing::subscriber::with_default(subscriber, || {
            let (mut bar, mut host) = setup(IndexBarConfig::default());
            bar.on_scroll(&host);
            host.set_scroll_top(620.0);
            bar.on_scroll(&host);
        });

        let state = state.lock().expect("trace state lock");
        assert_eq!(state.span_count, 2);
        assert!(state.has_duration_field);
        assert_eq!(state.actives, vec!["A", "F"]);
    }
}
