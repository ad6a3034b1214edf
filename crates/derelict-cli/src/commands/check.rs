use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use derelict_engine::GameEngine;

pub fn run(dir: &Path) -> Result<(), String> {
    let loaded = super::load(dir)?;
    let diagnostics = loaded.diagnostics;
    // Built like a real game so malformed command aliases are reported too.
    let engine = GameEngine::new(loaded.adventure);
    let adventure = engine.adventure();

    println!("{}", room_table(&engine));
    if !adventure.interactables.is_empty() {
        println!("{}", interactable_table(&engine));
    }
    if !adventure.effects.is_empty() {
        println!("{}", effect_table(&engine));
    }
    println!("{}", settings_table(&engine));
    println!();

    let keywords: Vec<&str> = engine.commands().keywords().map(|(k, _)| k).collect();
    println!("  commands: {}", keywords.join(", "));
    println!(
        "  {}, {}, {}",
        super::plural(adventure.world.room_count(), "room"),
        super::plural(adventure.interactables.len(), "interactable"),
        super::plural(adventure.effects.len(), "usable item"),
    );
    println!("  starting room: {}", adventure.world.start_room());

    if diagnostics.is_empty() {
        println!("  All checks passed for '{}'.", dir.display());
    } else {
        for diagnostic in &diagnostics {
            println!("  {}", diagnostic.to_string().yellow());
        }
        println!("  {}", super::plural(diagnostics.len(), "warning"));
    }
    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn room_table(engine: &GameEngine) -> Table {
    let adventure = engine.adventure();
    let world = &adventure.world;
    let mut table = new_table(vec!["Room", "Exits", "Items", "Interactables"]);

    for room in world.rooms() {
        let exits: Vec<String> = world
            .exits(&room.id)
            .map(|(direction, destination)| format!("{direction} → {destination}"))
            .collect();
        let interactables: Vec<&str> = adventure
            .interactables
            .in_room(&room.id)
            .map(|i| i.name.as_str())
            .collect();

        table.add_row(vec![
            room.id.clone(),
            or_dash(exits.join("\n")),
            or_dash(world.items_in(&room.id).join(", ")),
            or_dash(interactables.join(", ")),
        ]);
    }
    table
}

fn interactable_table(engine: &GameEngine) -> Table {
    let mut table = new_table(vec!["Interactable", "Used in", "Passage", "State"]);
    for interactable in engine.adventure().interactables.iter() {
        table.add_row(vec![
            interactable.name.clone(),
            interactable.room.clone(),
            format!(
                "{} {} → {}",
                interactable.start_room, interactable.direction, interactable.leads_to
            ),
            if interactable.active { "open" } else { "closed" }.to_string(),
        ]);
    }
    table
}

fn effect_table(engine: &GameEngine) -> Table {
    let mut table = new_table(vec!["Item", "Effect", "Room", "Text"]);
    for (item, effect) in engine.adventure().effects.iter() {
        table.add_row(vec![
            item.to_string(),
            effect.kind.to_string(),
            effect.target_room.clone(),
            or_dash(summary(&effect.payload)),
        ]);
    }
    table
}

fn settings_table(engine: &GameEngine) -> Table {
    let mut table = new_table(vec!["Setting", "Value"]);
    for (key, value) in engine.settings().iter() {
        table.add_row(vec![key.to_string(), or_dash(summary(value))]);
    }
    table
}

/// First line of a text, cut to 60 characters.
fn summary(text: &str) -> String {
    let first = text.lines().next().unwrap_or_default();
    if first.chars().count() > 60 {
        let cut: String = first.chars().take(57).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}

fn or_dash(text: String) -> String {
    if text.is_empty() { "—".to_string() } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keeps_first_line() {
        assert_eq!(summary("one\ntwo"), "one");
        assert_eq!(summary(""), "");
    }

    #[test]
    fn summary_cuts_long_lines() {
        let long = "é".repeat(80);
        let cut = summary(&long);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));
    }
}
