use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::player::PlayerState;
use crate::room::Room;

/// The central world model. Owns the room graph, item placement, and the player.
///
/// Rooms are fixed once the world is built; only passages, item lists, and
/// the player change during play.
#[derive(Debug, Clone)]
pub struct World {
    rooms: BTreeMap<String, Room>,
    start_room: String,
    player: PlayerState,
}

impl World {
    /// Build a world from its rooms, placing the player in `start_room`.
    ///
    /// Fails if two rooms share an identifier, if the starting room is not
    /// one of them, or if any passage leads to a room that does not exist.
    pub fn new(rooms: Vec<Room>, start_room: impl Into<String>) -> CoreResult<Self> {
        let mut by_id = BTreeMap::new();
        for room in rooms {
            if by_id.contains_key(&room.id) {
                return Err(CoreError::DuplicateRoom(room.id));
            }
            by_id.insert(room.id.clone(), room);
        }

        let start_room = start_room.into();
        if !by_id.contains_key(&start_room) {
            return Err(CoreError::UnknownRoom(start_room));
        }

        for room in by_id.values() {
            for (direction, destination) in &room.exits {
                if !by_id.contains_key(destination) {
                    return Err(CoreError::DanglingEdge {
                        room: room.id.clone(),
                        direction: *direction,
                        destination: destination.clone(),
                    });
                }
            }
        }

        Ok(Self {
            rooms: by_id,
            player: PlayerState::new(start_room.clone()),
            start_room,
        })
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Get a room by identifier.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Check whether a room identifier exists.
    pub fn has_room(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// Iterate over all rooms in identifier order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room the player starts in and is teleported back to.
    pub fn start_room(&self) -> &str {
        &self.start_room
    }

    fn room_mut(&mut self, id: &str) -> CoreResult<&mut Room> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownRoom(id.to_string()))
    }

    /// Consume the first-visit text of a room. Returns it only once.
    pub fn take_first_visit(&mut self, id: &str) -> Option<String> {
        self.rooms.get_mut(id).and_then(|room| room.first_visit.take())
    }

    // -----------------------------------------------------------------------
    // Passages
    // -----------------------------------------------------------------------

    /// Insert or overwrite the passage leaving `room` in `direction`.
    pub fn add_edge(
        &mut self,
        room: &str,
        direction: Direction,
        destination: impl Into<String>,
    ) -> CoreResult<()> {
        let destination = destination.into();
        if !self.rooms.contains_key(&destination) {
            return Err(CoreError::DanglingEdge {
                room: room.to_string(),
                direction,
                destination,
            });
        }
        self.room_mut(room)?.exits.insert(direction, destination);
        Ok(())
    }

    /// Remove the passage leaving `room` in `direction`, returning its destination.
    ///
    /// A missing room or passage is a silent no-op.
    pub fn remove_edge(&mut self, room: &str, direction: Direction) -> Option<String> {
        self.rooms
            .get_mut(room)
            .and_then(|r| r.exits.remove(&direction))
    }

    /// Where the passage leaving `room` in `direction` leads, if it exists.
    pub fn destination_of(&self, room: &str, direction: Direction) -> Option<&str> {
        self.rooms
            .get(room)
            .and_then(|r| r.exits.get(&direction))
            .map(String::as_str)
    }

    /// Iterate over the passages leaving a room in direction order.
    pub fn exits(&self, room: &str) -> impl Iterator<Item = (Direction, &str)> {
        self.rooms
            .get(room)
            .into_iter()
            .flat_map(|r| r.exits.iter().map(|(d, dest)| (*d, dest.as_str())))
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Items lying in a room, in placement order. Unknown rooms are empty.
    pub fn items_in(&self, room: &str) -> &[String] {
        self.rooms
            .get(room)
            .map(|r| r.items.as_slice())
            .unwrap_or(&[])
    }

    /// Place one copy of an item in a room.
    pub fn add_item_to(&mut self, room: &str, item: impl Into<String>) -> CoreResult<()> {
        self.room_mut(room)?.items.push(item.into());
        Ok(())
    }

    /// Remove the first copy of an item from a room. Returns false if absent.
    pub fn remove_item_from(&mut self, room: &str, item: &str) -> bool {
        let Some(r) = self.rooms.get_mut(room) else {
            return false;
        };
        if let Some(pos) = r.items.iter().position(|i| i == item) {
            r.items.remove(pos);
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Player
    // -----------------------------------------------------------------------

    /// The player's state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Identifier of the room the player stands in.
    pub fn current_room(&self) -> &str {
        &self.player.location
    }

    /// Follow the passage in `direction` from the player's room.
    ///
    /// Returns false and leaves the player in place when there is no passage.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let Some(destination) = self
            .destination_of(&self.player.location, direction)
            .map(str::to_string)
        else {
            return false;
        };
        self.player.location = destination;
        true
    }

    /// Put the player back in the starting room.
    pub fn return_to_start(&mut self) {
        self.player.location = self.start_room.clone();
    }

    /// Move an item from the player's room into the inventory.
    pub fn pick_up(&mut self, item: &str) -> bool {
        let room = self.player.location.clone();
        if self.remove_item_from(&room, item) {
            self.player.add_item(item);
            true
        } else {
            false
        }
    }

    /// Move an item from the inventory into the player's room.
    pub fn drop_item(&mut self, item: &str) -> bool {
        if !self.player.remove_item(item) {
            return false;
        }
        let room = self.player.location.clone();
        if let Some(r) = self.rooms.get_mut(&room) {
            r.items.push(item.to_string());
        }
        true
    }

    /// Remove one copy of an item from the inventory without placing it anywhere.
    pub fn consume_item(&mut self, item: &str) -> bool {
        self.player.remove_item(item)
    }
}
