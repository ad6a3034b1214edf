//! Optional text folders: `config/`, `ItemDescriptions/`, `NewRoomSequence/`,
//! and `UseItems/`. A missing folder or unreadable file only produces a
//! warning; the game runs without that content.

use std::path::{Path, PathBuf};

use derelict_core::{
    EffectKind, ItemCatalog, ParsedEffectKind, Settings, UseEffect, UseEffectRegistry,
};

use crate::diagnostics::Diagnostics;
use crate::files::{read_lines, txt_entries};

/// Read each `.txt` file in an optional folder, warning about anything unreadable.
fn read_folder(dir: &Path, diags: &mut Diagnostics) -> Vec<(String, PathBuf, Vec<String>)> {
    if !dir.is_dir() {
        diags.warn(dir, "folder not found, some features may be unavailable");
        return Vec::new();
    }
    let listing = match txt_entries(dir) {
        Ok(listing) => listing,
        Err(e) => {
            diags.warn(dir, format!("cannot list folder: {e}"));
            return Vec::new();
        }
    };
    for path in &listing.unnamed {
        diags.warn(path, "skipped: name is not valid UTF-8");
    }

    let mut files = Vec::new();
    for (stem, path) in listing.entries {
        match read_lines(&path) {
            Ok(lines) => files.push((stem, path, lines)),
            Err(e) => diags.warn(&path, format!("skipped: {e}")),
        }
    }
    files
}

/// Load `config/<key>.txt` files into settings.
pub(crate) fn load_settings(dir: &Path, diags: &mut Diagnostics) -> Settings {
    let mut settings = Settings::new();
    for (key, _, lines) in read_folder(dir, diags) {
        settings.insert(key, lines.join("\n"));
    }
    settings
}

/// Load `ItemDescriptions/<item>.txt` files.
pub(crate) fn load_item_descriptions(dir: &Path, diags: &mut Diagnostics) -> ItemCatalog {
    let mut catalog = ItemCatalog::new();
    for (item, _, lines) in read_folder(dir, diags) {
        catalog.insert(item, lines.join("\n"));
    }
    catalog
}

/// Load `NewRoomSequence/<room>.txt` files as `(room, text)` pairs.
pub(crate) fn load_room_sequences(
    dir: &Path,
    diags: &mut Diagnostics,
) -> Vec<(String, PathBuf, String)> {
    read_folder(dir, diags)
        .into_iter()
        .map(|(room, path, lines)| (room, path, lines.join("\n")))
        .collect()
}

/// Load `UseItems/<item>.txt` files. Unknown effect kinds are warned and skipped.
///
/// Line one is the effect kind, line two the target room, and the remaining
/// lines the payload text.
pub(crate) fn load_use_items(
    dir: &Path,
    room_exists: impl Fn(&str) -> bool,
    diags: &mut Diagnostics,
) -> UseEffectRegistry {
    let mut registry = UseEffectRegistry::new();
    for (item, path, lines) in read_folder(dir, diags) {
        let kind_line = lines.first().map(String::as_str).unwrap_or("");
        let kind = match EffectKind::parse(kind_line) {
            ParsedEffectKind::Known(kind) => kind,
            ParsedEffectKind::Unknown(raw) => {
                diags.warn(
                    &path,
                    format!(
                        "unknown effect \"{raw}\", item skipped; it may be impossible to complete the game"
                    ),
                );
                continue;
            }
        };
        let target_room = lines.get(1).map(|l| l.trim().to_string()).unwrap_or_default();
        if !room_exists(&target_room) {
            diags.warn(
                &path,
                format!("target room \"{target_room}\" does not exist, effect can never fire"),
            );
        }
        let payload = lines.get(2..).map(|rest| rest.join("\n")).unwrap_or_default();
        registry.insert(
            item,
            UseEffect {
                kind,
                target_room,
                payload,
            },
        );
    }
    registry
}
