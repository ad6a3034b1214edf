//! Player state management.

/// The player's position and what they are carrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Identifier of the room the player stands in.
    pub location: String,
    /// Carried item names, in pickup order. Duplicates are separate copies.
    pub inventory: Vec<String>,
}

impl PlayerState {
    /// Create a player standing in `location` with empty hands.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            inventory: Vec::new(),
        }
    }

    /// Check if the player carries at least one copy of an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Add one copy of an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first copy of an item. Returns false if none is carried.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|held| held == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}
