//! Rooms in the station graph.

use std::collections::BTreeMap;

use crate::direction::Direction;

/// A room: its outgoing passages, the items lying in it, and its texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room identifier (the folder name in a content pack).
    pub id: String,
    /// Outgoing passages, keyed by direction.
    pub exits: BTreeMap<Direction, String>,
    /// Items lying in the room, in placement order.
    pub items: Vec<String>,
    /// Text shown by the `description` command.
    pub description: String,
    /// Text shown the first time the player walks in, then discarded.
    pub first_visit: Option<String>,
}

impl Room {
    /// Create an empty room with no exits, items, or texts.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            description: String::new(),
            first_visit: None,
        }
    }

    /// Add a passage (builder style).
    pub fn with_exit(mut self, direction: Direction, destination: impl Into<String>) -> Self {
        self.exits.insert(direction, destination.into());
        self
    }

    /// Place an item in the room (builder style).
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Set the room description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the first-visit text (builder style).
    pub fn with_first_visit(mut self, text: impl Into<String>) -> Self {
        self.first_visit = Some(text.into());
        self
    }
}
