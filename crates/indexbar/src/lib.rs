#![forbid(unsafe_code)]

//! Index bar public facade crate.
//!
//! Re-exports the widget and its collaborators from the internal crates and
//! offers a prelude for day-to-day usage.
//!
//! ```
//! use indexbar::prelude::*;
//!
//! let mut host = VirtualScroller::window(600.0, 2000.0).with_element(ElementId::new(0), 0.0);
//! let mut bar = IndexBar::new(IndexBarConfig::default());
//! bar.register(AnchorSection::new("A", ElementId::new(0)).height(30.0));
//!
//! let sidebar = bar.sidebar_layout(Rect::new(340.0, 0.0, 20.0, 600.0));
//! bar.handle_event(&Event::Scroll, &sidebar, &mut host);
//! assert_eq!(bar.active_anchor_index(), Some("A"));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use indexbar_core::event::{ClickEvent, Event, TouchEvent, TouchEventKind};
pub use indexbar_core::geometry::{Point, Rect};
pub use indexbar_core::gesture::{Direction, TouchConfig, TouchTracker};
pub use indexbar_core::logging::LoggingError;
pub use indexbar_core::scroll::{
    ElementId, Overflow, ScrollEventTarget, ScrollHost, ScrollNode, VirtualScroller,
    scroll_event_target,
};

// --- Widget re-exports -----------------------------------------------------

pub use indexbar_widgets::index_bar::{
    AnchorHandle, AnchorLayout, AnchorPosition, AnchorRegistry, AnchorSection, ConfigError,
    DEFAULT_HIGHLIGHT_COLOR, EventOutcome, IndexBar, IndexBarConfig, IndexList, Invalidation,
    LabelLookup, SelectEvent, SelectSource, SidebarItem, SidebarLayout, StickyLayout,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for index bar embedders.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded or failed validation.
    Config(ConfigError),
    /// Logging could not be initialized.
    Logging(LoggingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Logging(err) => write!(f, "logging: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LoggingError> for Error {
    fn from(err: LoggingError) -> Self {
        Self::Logging(err)
    }
}

/// Standard result type for index bar APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Install the JSON log subscriber (see [`indexbar_core::logging::init_json`]).
#[cfg(feature = "tracing-json")]
pub fn init_logging() -> Result<()> {
    indexbar_core::logging::init_json()?;
    Ok(())
}

/// Load and validate a TOML configuration file.
#[cfg(feature = "config")]
pub fn load_config(path: impl AsRef<std::path::Path>) -> Result<IndexBarConfig> {
    Ok(IndexBarConfig::from_toml_file(path)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnchorSection, ClickEvent, ElementId, Error, Event, EventOutcome, IndexBar,
        IndexBarConfig, IndexList, Point, Rect, Result, ScrollHost, SelectEvent, TouchEvent,
        TouchEventKind, VirtualScroller,
    };

    pub use crate::{core, widgets};
}

pub use indexbar_core as core;
pub use indexbar_widgets as widgets;
