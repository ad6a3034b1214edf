//! Item descriptions.

use std::collections::BTreeMap;

/// Free-text descriptions of items, looked up by item name.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    descriptions: BTreeMap<String, String>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the description of an item.
    pub fn insert(&mut self, item: impl Into<String>, description: impl Into<String>) {
        self.descriptions.insert(item.into(), description.into());
    }

    /// The description of an item, if one was provided.
    pub fn describe(&self, item: &str) -> Option<&str> {
        self.descriptions.get(item).map(String::as_str)
    }

    /// Number of described items.
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// True if no item has a description.
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
