//! Loading `Rooms/<room>/` folders.

use std::path::Path;

use derelict_core::{Direction, Room};

use crate::diagnostics::Diagnostics;
use crate::error::{PackError, PackResult};
use crate::files::{read_lines, subdirs};

/// Load every room folder under `rooms_dir`.
///
/// The folder itself and each room's `directions.txt` and `items.txt` are
/// mandatory; a missing `description.txt` leaves the description empty.
pub(crate) fn load_rooms(rooms_dir: &Path, diags: &mut Diagnostics) -> PackResult<Vec<Room>> {
    if !rooms_dir.is_dir() {
        return Err(PackError::MissingFolder {
            path: rooms_dir.to_path_buf(),
        });
    }
    let listing = subdirs(rooms_dir).map_err(|source| PackError::Read {
        path: rooms_dir.to_path_buf(),
        source,
    })?;
    if let Some(path) = listing.unnamed.into_iter().next() {
        return Err(PackError::InvalidName { path });
    }

    listing
        .entries
        .into_iter()
        .map(|(name, path)| load_room(&name, &path, diags))
        .collect()
}

fn load_room(name: &str, dir: &Path, diags: &mut Diagnostics) -> PackResult<Room> {
    let mut room = Room::new(name);

    let directions_path = dir.join("directions.txt");
    let lines = read_lines(&directions_path).map_err(|source| PackError::Read {
        path: directions_path.clone(),
        source,
    })?;
    for line in &lines {
        let Some((direction, destination)) = parse_direction_line(line) else {
            continue;
        };
        match Direction::parse(direction) {
            Some(dir) => {
                room.exits.insert(dir, destination.to_string());
            }
            None => diags.warn(
                &directions_path,
                format!("unknown direction \"{direction}\", line skipped"),
            ),
        }
    }

    let items_path = dir.join("items.txt");
    room.items = read_lines(&items_path)
        .map_err(|source| PackError::Read {
            path: items_path.clone(),
            source,
        })?
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect();

    let description_path = dir.join("description.txt");
    match read_lines(&description_path) {
        Ok(lines) => room.description = lines.concat(),
        Err(e) => diags.warn(&description_path, format!("no description loaded: {e}")),
    }

    Ok(room)
}

/// Split a `<direction> <destination>` line. Lines without exactly two
/// space-separated words are ignored.
fn parse_direction_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(direction), Some(destination), None)
            if !direction.is_empty() && !destination.is_empty() =>
        {
            Some((direction, destination))
        }
        _ => None,
    }
}
