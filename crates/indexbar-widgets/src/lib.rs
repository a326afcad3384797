#![forbid(unsafe_code)]

//! Widgets for indexbar.
//!
//! The only widget is [`index_bar::IndexBar`], a vertical label strip that
//! tracks which anchor section of a scrolling list is active, pins that
//! section's header, and turns taps and drags on the strip into navigation.

pub mod index_bar;

pub use index_bar::{
    AnchorHandle, AnchorLayout, AnchorPosition, AnchorRegistry, AnchorSection, ConfigError,
    EventOutcome, IndexBar, IndexBarConfig, IndexList, SelectEvent, SidebarItem, SidebarLayout,
};
