#![forbid(unsafe_code)]

//! Core: geometry, input events, touch tracking, and the scroll-host seam.
//!
//! # Role in indexbar
//! `indexbar-core` is the input and platform layer. It owns the canonical
//! event types the widget consumes, the touch-delta tracker that classifies a
//! drag as vertical or horizontal, and the [`scroll::ScrollHost`] trait that
//! abstracts "the thing that scrolls" (the window or an overflow element).
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (touch, click, scroll, frame tick).
//! - **TouchTracker**: start/delta tracking with a locked gesture direction.
//! - **ScrollHost**: scroll offset, bounding rect, and scroll-into-view.
//! - **VirtualScroller**: an in-memory host for headless drivers and tests.
//!
//! # How it fits in the system
//! `indexbar-widgets` consumes these types and never talks to a concrete UI
//! toolkit. Embedders implement [`scroll::ScrollHost`] for their platform and
//! translate native input into [`event::Event`] values.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod scroll;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
