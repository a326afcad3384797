#![forbid(unsafe_code)]

//! The ordered, duplicate-free label set shown in the sidebar.

use ahash::AHashMap;

use super::config::ConfigError;

/// Ordered sequence of unique index labels.
///
/// Defines every label the sidebar shows, whether or not a matching anchor
/// section is currently registered.
#[derive(Debug, Clone)]
pub struct IndexList {
    labels: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl IndexList {
    /// Build a list from labels, rejecting duplicates.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut positions = AHashMap::with_capacity(labels.len());
        for (pos, label) in labels.iter().enumerate() {
            if positions.insert(label.clone(), pos).is_some() {
                return Err(ConfigError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels, positions })
    }

    /// The uppercase Latin alphabet, `A` through `Z`.
    #[must_use]
    pub fn alphabet() -> Self {
        let labels: Vec<String> = ('A'..='Z').map(String::from).collect();
        let positions = labels
            .iter()
            .enumerate()
            .map(|(pos, label)| (label.clone(), pos))
            .collect();
        Self { labels, positions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `pos`.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&str> {
        self.labels.get(pos).map(String::as_str)
    }

    /// Position of `label`, if present.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl Default for IndexList {
    fn default() -> Self {
        Self::alphabet()
    }
}

impl PartialEq for IndexList {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for IndexList {}

impl TryFrom<Vec<String>> for IndexList {
    type Error = ConfigError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<IndexList> for Vec<String> {
    fn from(list: IndexList) -> Self {
        list.labels
    }
}
