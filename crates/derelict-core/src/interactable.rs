//! Toggles that open and close a single passage.
//!
//! Each interactable owns an explicit `active` flag. Flipping it adds or
//! removes its passage in the [`World`]; the flag is never re-derived from
//! the graph, so two toggles sharing a passage cannot confuse each other's
//! state.

use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::world::World;

/// A named switch, lever, or console that controls one passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interactable {
    /// Display name, as declared.
    pub name: String,
    /// The room it can be used from.
    pub room: String,
    /// The room the controlled passage leaves from.
    pub start_room: String,
    /// The direction of the controlled passage.
    pub direction: Direction,
    /// The room the controlled passage leads to.
    pub leads_to: String,
    /// Shown when the passage opens.
    pub enabled_text: String,
    /// Shown when the passage closes.
    pub disabled_text: String,
    /// Whether the passage is currently opened by this interactable.
    pub active: bool,
}

/// The result of flipping an interactable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    /// True if the passage is now open.
    pub enabled: bool,
    /// The enabled or disabled text to show.
    pub text: String,
}

/// All interactables, keyed by the room they are used from and their name.
#[derive(Debug, Clone, Default)]
pub struct InteractableRegistry {
    by_room: BTreeMap<String, BTreeMap<String, Interactable>>,
}

fn key(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl InteractableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interactable. Names are unique per room, ignoring case.
    pub fn insert(&mut self, interactable: Interactable) -> CoreResult<()> {
        let room = self.by_room.entry(interactable.room.clone()).or_default();
        let k = key(&interactable.name);
        if room.contains_key(&k) {
            return Err(CoreError::DuplicateInteractable {
                room: interactable.room,
                name: interactable.name,
            });
        }
        room.insert(k, interactable);
        Ok(())
    }

    /// Set each interactable's `active` flag from the passages present in the world.
    ///
    /// Called once after loading, before play starts.
    pub fn sync_with(&mut self, world: &World) {
        for interactable in self.by_room.values_mut().flat_map(|m| m.values_mut()) {
            interactable.active = world
                .destination_of(&interactable.start_room, interactable.direction)
                == Some(interactable.leads_to.as_str());
        }
    }

    /// Look up an interactable usable from `room`, ignoring case of `name`.
    pub fn get(&self, room: &str, name: &str) -> Option<&Interactable> {
        self.by_room.get(room).and_then(|m| m.get(&key(name)))
    }

    /// Interactables usable from a room, in name order.
    pub fn in_room(&self, room: &str) -> impl Iterator<Item = &Interactable> {
        self.by_room.get(room).into_iter().flat_map(|m| m.values())
    }

    /// Iterate over every interactable.
    pub fn iter(&self) -> impl Iterator<Item = &Interactable> {
        self.by_room.values().flat_map(|m| m.values())
    }

    /// Total number of interactables.
    pub fn len(&self) -> usize {
        self.by_room.values().map(BTreeMap::len).sum()
    }

    /// True if no interactables are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flip the named interactable in `room` and apply the passage change.
    ///
    /// Activating writes the passage `start_room --direction--> leads_to`.
    /// Deactivating removes it, but only if it still leads to `leads_to`.
    pub fn toggle(&mut self, world: &mut World, room: &str, name: &str) -> CoreResult<Toggled> {
        let interactable = self
            .by_room
            .get_mut(room)
            .and_then(|m| m.get_mut(&key(name)))
            .ok_or_else(|| CoreError::InteractableNotFound {
                room: room.to_string(),
                name: name.to_string(),
            })?;

        if interactable.active {
            let current = world.destination_of(&interactable.start_room, interactable.direction);
            if current == Some(interactable.leads_to.as_str()) {
                world.remove_edge(&interactable.start_room, interactable.direction);
            }
            interactable.active = false;
            Ok(Toggled {
                enabled: false,
                text: interactable.disabled_text.clone(),
            })
        } else {
            world.add_edge(
                &interactable.start_room,
                interactable.direction,
                interactable.leads_to.clone(),
            )?;
            interactable.active = true;
            Ok(Toggled {
                enabled: true,
                text: interactable.enabled_text.clone(),
            })
        }
    }
}
