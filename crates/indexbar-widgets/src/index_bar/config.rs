#![forbid(unsafe_code)]

//! Index bar configuration.
//!
//! [`IndexBarConfig`] is plain data with builder-style setters. With the
//! `config` feature it can also be loaded from TOML or JSON:
//!
//! ```toml
//! sticky = true
//! z_index = 2
//! highlight_color = "#ee0a24"
//! sticky_offset_top = 46.0
//! index_list = ["A", "B", "C"]
//! ```
//!
//! Missing keys take their defaults.

use std::fmt;
#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use super::index_list::IndexList;

/// Default highlight colour for the active label.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#07c160";

/// Configuration for an [`IndexBar`](super::IndexBar).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct IndexBarConfig {
    /// Pin the active anchor's header to the top of the viewport.
    pub sticky: bool,
    /// Stacking order of pinned anchors. The sidebar sits one above.
    pub z_index: i32,
    /// Colour of the active label. Empty disables highlighting.
    pub highlight_color: String,
    /// Height of fixed chrome above the scroll viewport, in pixels.
    pub sticky_offset_top: f32,
    /// Labels shown in the sidebar.
    #[cfg_attr(
        feature = "config",
        serde(
            serialize_with = "serialize_index_list",
            deserialize_with = "deserialize_index_list"
        )
    )]
    pub index_list: IndexList,
}

impl Default for IndexBarConfig {
    fn default() -> Self {
        Self {
            sticky: true,
            z_index: 1,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_owned(),
            sticky_offset_top: 0.0,
            index_list: IndexList::alphabet(),
        }
    }
}

impl IndexBarConfig {
    /// Enable or disable sticky headers.
    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Set the z-index of pinned anchors.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set the active label colour.
    #[must_use]
    pub fn highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = color.into();
        self
    }

    /// Set the fixed offset above the scroll viewport.
    #[must_use]
    pub fn sticky_offset_top(mut self, offset: f32) -> Self {
        self.sticky_offset_top = offset;
        self
    }

    /// Set the sidebar labels.
    #[must_use]
    pub fn index_list(mut self, list: IndexList) -> Self {
        self.index_list = list;
        self
    }

    /// Highlight colour, or `None` when highlighting is disabled.
    #[must_use]
    pub fn highlight(&self) -> Option<&str> {
        (!self.highlight_color.is_empty()).then_some(self.highlight_color.as_str())
    }

    /// Validate parameters.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.sticky_offset_top.is_finite() {
            errors.push(format!(
                "sticky_offset_top must be finite, got {}",
                self.sticky_offset_top
            ));
        }
        if self.z_index == i32::MAX {
            errors.push("z_index must leave room for the sidebar above it".into());
        }
        errors
    }

    /// Load from a TOML string and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(feature = "config")]
fn serialize_index_list<S>(list: &IndexList, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    list.as_slice().serialize(serializer)
}

#[cfg(feature = "config")]
fn deserialize_index_list<'de, D>(deserializer: D) -> Result<IndexList, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let labels = Vec::<String>::deserialize(deserializer)?;
    IndexList::new(labels).map_err(serde::de::Error::custom)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from building or loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// The index list contains the same label twice.
    DuplicateLabel(String),
    /// Validation errors.
    Validation(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config I/O: {err}"),
            #[cfg(feature = "config")]
            Self::Toml(err) => write!(f, "config TOML: {err}"),
            #[cfg(feature = "config")]
            Self::Json(err) => write!(f, "config JSON: {err}"),
            Self::DuplicateLabel(label) => write!(f, "duplicate index label: {label:?}"),
            Self::Validation(errors) => {
                write!(f, "invalid config: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            #[cfg(feature = "config")]
            Self::Toml(err) => Some(err),
            #[cfg(feature = "config")]
            Self::Json(err) => Some(err),
            Self::DuplicateLabel(_) | Self::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
