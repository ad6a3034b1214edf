//! Content pack loader for derelict.
//!
//! A content pack is a folder of plain-text files:
//!
//! | Path | Contents |
//! |---|---|
//! | `Rooms/<room>/directions.txt` | `<direction> <destination>` per line |
//! | `Rooms/<room>/description.txt` | room description |
//! | `Rooms/<room>/items.txt` | one item per line |
//! | `Interactables/<name>.txt` | seven-line toggle definition |
//! | `ItemDescriptions/<item>.txt` | item description |
//! | `UseItems/<item>.txt` | effect kind, target room, payload |
//! | `NewRoomSequence/<room>.txt` | first-visit text |
//! | `config/<key>.txt` | setting value |
//!
//! Rooms and interactables are mandatory and abort loading with a
//! [`PackError`] when broken. Everything else degrades to a [`Diagnostic`].

mod diagnostics;
/// Error types for pack loading.
pub mod error;
mod files;
mod interactables;
mod rooms;
mod texts;

use std::path::Path;

use derelict_core::settings::STARTING_ROOM;
use derelict_core::{Adventure, World};
use tracing::info;

pub use diagnostics::Diagnostic;
pub use error::{PackError, PackResult};

/// A successfully loaded pack and the warnings raised while loading it.
#[derive(Debug)]
pub struct LoadedPack {
    /// The playable adventure.
    pub adventure: Adventure,
    /// Content that was skipped or left empty.
    pub diagnostics: Vec<Diagnostic>,
}

/// Load the content pack rooted at `root`.
pub fn load_pack(root: &Path) -> PackResult<LoadedPack> {
    let mut diags = diagnostics::Diagnostics::default();

    let settings = texts::load_settings(&root.join("config"), &mut diags);
    let mut rooms = rooms::load_rooms(&root.join("Rooms"), &mut diags)?;

    for (room_id, path, text) in texts::load_room_sequences(&root.join("NewRoomSequence"), &mut diags)
    {
        match rooms.iter_mut().find(|r| r.id == room_id) {
            Some(room) => room.first_visit = Some(text),
            None => diags.warn(&path, format!("room \"{room_id}\" does not exist, text ignored")),
        }
    }

    let start_room = settings
        .get(STARTING_ROOM)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(PackError::NoStartingRoom)?
        .to_string();
    let world = World::new(rooms, start_room)?;

    let interactables = interactables::load_interactables(&root.join("Interactables"), &world)?;
    let items = texts::load_item_descriptions(&root.join("ItemDescriptions"), &mut diags);
    let effects = texts::load_use_items(
        &root.join("UseItems"),
        |room| world.has_room(room),
        &mut diags,
    );

    info!(
        root = %root.display(),
        rooms = world.room_count(),
        interactables = interactables.len(),
        use_items = effects.len(),
        "content pack loaded"
    );

    Ok(LoadedPack {
        adventure: Adventure {
            world,
            interactables,
            effects,
            items,
            settings,
        },
        diagnostics: diags.into_vec(),
    })
}
