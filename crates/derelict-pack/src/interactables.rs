//! Loading `Interactables/<name>.txt` files.
//!
//! Each file has seven lines: a comment, the enabled text, the disabled
//! text, the room it is used from, the room the passage starts in, the room
//! the passage leads to, and the passage direction.

use std::path::Path;

use derelict_core::{Direction, Interactable, InteractableRegistry, World};

use crate::error::{PackError, PackResult};
use crate::files::{read_lines, txt_entries};

/// Load every interactable under `dir` and check it against the world's rooms.
pub(crate) fn load_interactables(dir: &Path, world: &World) -> PackResult<InteractableRegistry> {
    if !dir.is_dir() {
        return Err(PackError::MissingFolder {
            path: dir.to_path_buf(),
        });
    }
    let listing = txt_entries(dir).map_err(|source| PackError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    if let Some(path) = listing.unnamed.into_iter().next() {
        return Err(PackError::InvalidName { path });
    }

    let mut registry = InteractableRegistry::new();
    for (name, path) in listing.entries {
        let lines = read_lines(&path).map_err(|source| PackError::Read {
            path: path.clone(),
            source,
        })?;
        let interactable = parse_interactable(&name, &lines).map_err(|reason| {
            PackError::Interactable {
                path: path.clone(),
                reason,
            }
        })?;
        check_rooms(&interactable, world).map_err(|reason| PackError::Interactable {
            path: path.clone(),
            reason,
        })?;
        registry
            .insert(interactable)
            .map_err(|e| PackError::Interactable {
                path: path.clone(),
                reason: e.to_string(),
            })?;
    }
    registry.sync_with(world);
    Ok(registry)
}

fn parse_interactable(name: &str, lines: &[String]) -> Result<Interactable, String> {
    let field = |index: usize, what: &str| {
        lines
            .get(index)
            .cloned()
            .ok_or_else(|| format!("missing line {} ({what})", index + 1))
    };

    let enabled_text = field(1, "enabled text")?;
    let disabled_text = field(2, "disabled text")?;
    let room = field(3, "room")?;
    let start_room = field(4, "start room")?;
    let leads_to = field(5, "leads to")?;
    let direction_word = field(6, "direction")?;
    let direction = Direction::parse(direction_word.trim())
        .ok_or_else(|| format!("unknown direction \"{direction_word}\""))?;

    Ok(Interactable {
        name: name.to_string(),
        room: room.trim().to_string(),
        start_room: start_room.trim().to_string(),
        direction,
        leads_to: leads_to.trim().to_string(),
        enabled_text,
        disabled_text,
        active: false,
    })
}

fn check_rooms(interactable: &Interactable, world: &World) -> Result<(), String> {
    for (what, room) in [
        ("room", &interactable.room),
        ("start room", &interactable.start_room),
        ("leads to", &interactable.leads_to),
    ] {
        if !world.has_room(room) {
            return Err(format!("{what} \"{room}\" does not exist"));
        }
    }
    Ok(())
}
