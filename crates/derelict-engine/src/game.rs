//! The turn engine.
//!
//! One turn is: render [`GameEngine::status`], read a line, [`parse`] it,
//! [`execute`] the command. The engine owns all game state and never reads
//! input itself, so a frontend drives it one command at a time.
//!
//! [`parse`]: GameEngine::parse
//! [`execute`]: GameEngine::execute

use derelict_core::settings::{COMMAND_ALIASES, GAME_COMPLETE_TEXT, INTRODUCTION};
use derelict_core::{Adventure, CoreError, Direction, Settings, UseOutcome, World};
use tracing::{debug, warn};

use crate::command::{Command, CommandKind, CommandTable};
use crate::error::{PlayError, PlayResult};
use crate::help;
use crate::output::{Output, Tone};

/// Marker line in the introduction text that becomes a pause.
const WAIT_MARKER: &str = "waitForInput();";

/// Shown on victory when the pack has no `gameCompleteText`.
const DEFAULT_VICTORY: &str = "Congratulations, you completed the game!";

/// Whether the game is still accepting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next command.
    Running,
    /// Won; no further commands are accepted.
    Complete,
}

/// Owns an [`Adventure`] and applies commands to it.
pub struct GameEngine {
    adventure: Adventure,
    commands: CommandTable,
    state: GameState,
}

impl GameEngine {
    /// Start a game with the standard command table plus any aliases the
    /// pack declares in its `commandAliases` setting.
    pub fn new(adventure: Adventure) -> Self {
        let mut commands = CommandTable::standard();
        if let Some(aliases) = adventure.settings.get(COMMAND_ALIASES) {
            for line in commands.add_aliases(aliases) {
                warn!(line, "ignoring malformed command alias");
            }
        }
        Self::with_commands(adventure, commands)
    }

    /// Start a game with an explicit command table.
    pub fn with_commands(adventure: Adventure, commands: CommandTable) -> Self {
        Self {
            adventure,
            commands,
            state: GameState::Running,
        }
    }

    /// Current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// True once the game has been won.
    pub fn is_complete(&self) -> bool {
        self.state == GameState::Complete
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.adventure.world
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.adventure.settings
    }

    /// The whole adventure.
    pub fn adventure(&self) -> &Adventure {
        &self.adventure
    }

    /// The command table in use.
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Parse a line of input with this game's command table.
    pub fn parse(&self, input: &str) -> PlayResult<Command> {
        self.commands
            .parse(input)
            .map_err(|e| PlayError::NotACommand(e.0))
    }

    /// Parse and execute a line of input.
    pub fn process(&mut self, input: &str) -> PlayResult<Output> {
        let command = self.parse(input)?;
        self.execute(command)
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// The per-turn status: room, interactables, exits, items, inventory.
    pub fn status(&self) -> Output {
        let world = &self.adventure.world;
        let room = world.current_room();
        let mut out = Output::new();

        out.line(Tone::Heading, "=".repeat(25));
        out.line(Tone::Heading, format!("You are currently in {room}"));
        out.blank();

        let interactables: Vec<&str> = self
            .adventure
            .interactables
            .in_room(room)
            .map(|i| i.name.as_str())
            .collect();
        if !interactables.is_empty() {
            out.say("You can interact with:");
            for name in interactables {
                out.line(Tone::Listing, name);
            }
            out.blank();
        }

        out.say("You can move:");
        for (direction, destination) in world.exits(room) {
            out.line(Tone::Listing, format!("{direction} to {destination}"));
        }
        out.blank();

        out.say("Items in this room:");
        out.line(
            Tone::Listing,
            format!("[{}]", world.items_in(room).join(", ")),
        );

        out.say("Items in inventory:");
        for item in &world.player().inventory {
            out.line(Tone::Listing, item.as_str());
        }
        out
    }

    /// The pack's introduction text, with marker lines turned into pauses.
    pub fn introduction(&self) -> Output {
        let mut out = Output::new();
        if let Some(intro) = self.adventure.settings.get(INTRODUCTION) {
            for line in intro.split('\n') {
                if line.trim() == WAIT_MARKER {
                    out.pause();
                } else {
                    out.say(line);
                }
            }
        }
        out
    }

    /// How-to-play instructions.
    pub fn help(&self) -> Output {
        help::instructions()
    }

    /// The victory message.
    pub fn victory(&self) -> Output {
        let mut out = Output::new();
        let text = self
            .adventure
            .settings
            .get(GAME_COMPLETE_TEXT)
            .unwrap_or(DEFAULT_VICTORY);
        for line in text.split('\n') {
            out.line(Tone::Heading, line);
        }
        out
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Apply one command. Player mistakes come back as [`PlayError`] and
    /// leave the game unchanged.
    pub fn execute(&mut self, command: Command) -> PlayResult<Output> {
        if self.is_complete() {
            return Err(PlayError::GameOver);
        }
        debug!(
            kind = ?command.kind,
            argument = %command.argument,
            room = %self.adventure.world.current_room(),
            "dispatch"
        );

        let arg = command.argument;
        match command.kind {
            CommandKind::Direction(direction) => self.do_move(direction),
            CommandKind::Description => self.do_describe(&arg),
            CommandKind::Pickup => self.do_pickup(&arg),
            CommandKind::Drop => self.do_drop(&arg),
            CommandKind::Use => self.do_use(&arg),
            CommandKind::Interact => self.do_interact(&arg),
            CommandKind::Help => Ok(self.help()),
            CommandKind::Setting => self.do_setting(&arg),
        }
    }

    fn do_move(&mut self, direction: Direction) -> PlayResult<Output> {
        let world = &mut self.adventure.world;
        if !world.move_player(direction) {
            return Err(PlayError::NoPassage);
        }

        let mut out = Output::new();
        out.line(Tone::Narrative, format!("Moving {direction}"));

        let room = world.current_room().to_string();
        if let Some(text) = world.take_first_visit(&room) {
            out.blank();
            out.narrate(&text);
            out.pause();
        }
        Ok(out)
    }

    fn do_describe(&self, item: &str) -> PlayResult<Output> {
        let world = &self.adventure.world;
        let mut out = Output::new();

        if item.is_empty() {
            let description = world
                .room(world.current_room())
                .map(|r| r.description.as_str())
                .unwrap_or_default();
            // A missing description was reported when the pack loaded.
            out.blank();
            out.narrate(description);
            out.blank();
            return Ok(out);
        }

        if !world.player().has_item(item) {
            return Err(PlayError::DescribeNotHeld(item.to_string()));
        }
        out.blank();
        match self.adventure.items.describe(item) {
            Some(description) => out.narrate(description),
            None => out.line(Tone::Failure, "item description not found"),
        }
        out.blank();
        Ok(out)
    }

    fn do_pickup(&mut self, item: &str) -> PlayResult<Output> {
        if !self.adventure.world.pick_up(item) {
            return Err(PlayError::ItemNotHere(item.to_string()));
        }
        let mut out = Output::new();
        out.line(Tone::Narrative, "The item was added to inventory!");
        Ok(out)
    }

    fn do_drop(&mut self, item: &str) -> PlayResult<Output> {
        if !self.adventure.world.drop_item(item) {
            return Err(PlayError::ItemNotHeld(item.to_string()));
        }
        let mut out = Output::new();
        out.line(Tone::Narrative, "The item was dropped!");
        Ok(out)
    }

    fn do_use(&mut self, item: &str) -> PlayResult<Output> {
        let world = &self.adventure.world;
        let outcome = self.adventure.effects.apply(
            item,
            world.current_room(),
            world.player().has_item(item),
        );

        let mut out = Output::new();
        match outcome {
            UseOutcome::NotHeld => return Err(PlayError::UseNotHeld(item.to_string())),
            UseOutcome::NoEffect(reason) => {
                debug!(item, %reason, "use had no effect");
                out.line(Tone::Narrative, "It did nothing");
            }
            UseOutcome::Hint(text) => out.narrate(&text),
            UseOutcome::Teleport(text) => {
                out.narrate(&text);
                let world = &mut self.adventure.world;
                world.consume_item(item);
                world.return_to_start();
            }
            UseOutcome::Complete => {
                self.state = GameState::Complete;
                out.extend(self.victory());
            }
        }
        Ok(out)
    }

    fn do_interact(&mut self, name: &str) -> PlayResult<Output> {
        let room = self.adventure.world.current_room().to_string();
        let toggled = self
            .adventure
            .interactables
            .toggle(&mut self.adventure.world, &room, name)
            .map_err(|e| {
                if !matches!(e, CoreError::InteractableNotFound { .. }) {
                    warn!(error = %e, "interactable could not change its passage");
                }
                PlayError::NoSuchObject(name.to_string())
            })?;

        let mut out = Output::new();
        out.blank();
        out.narrate(&toggled.text);
        out.blank();
        Ok(out)
    }

    fn do_setting(&mut self, arg: &str) -> PlayResult<Output> {
        // Trailing separators are ignored; interior empty fields are not.
        let parts: Vec<&str> = arg.trim_end_matches(' ').split(' ').collect();
        let [key, value] = parts.as_slice() else {
            return Err(PlayError::SettingUsage);
        };
        self.adventure
            .settings
            .set(key, *value)
            .map_err(|_| PlayError::NoSuchSetting(key.to_string()))?;

        let mut out = Output::new();
        out.line(Tone::Narrative, "setting changed");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Block;
    use derelict_core::settings::{CLEAR_SCREEN, COLOURS};
    use derelict_core::{EffectKind, Interactable, Room, UseEffect};

    fn test_adventure() -> Adventure {
        let rooms = vec![
            Room::new("Entrance")
                .with_exit(Direction::North, "Hallway")
                .with_item("keycard")
                .with_description("A frosted airlock."),
            Room::new("Hallway")
                .with_exit(Direction::South, "Entrance")
                .with_exit(Direction::East, "ControlRoom")
                .with_first_visit("Red lights pulse.\nSomething hums."),
            Room::new("VentShaft").with_item("potato"),
            Room::new("ControlRoom")
                .with_exit(Direction::West, "Hallway")
                .with_exit(Direction::North, "Airlock"),
            Room::new("Airlock"),
        ];
        let world = World::new(rooms, "Entrance").unwrap();
        let mut adventure = Adventure::new(world);

        adventure
            .interactables
            .insert(Interactable {
                name: "lever".to_string(),
                room: "Hallway".to_string(),
                start_room: "Hallway".to_string(),
                direction: Direction::Up,
                leads_to: "VentShaft".to_string(),
                enabled_text: "Gravity fails.".to_string(),
                disabled_text: "Gravity returns.".to_string(),
                active: false,
            })
            .unwrap();
        adventure.effects.insert(
            "potato",
            UseEffect {
                kind: EffectKind::CompleteGame,
                target_room: "ControlRoom".to_string(),
                payload: String::new(),
            },
        );
        adventure.effects.insert(
            "keycard",
            UseEffect {
                kind: EffectKind::Teleport,
                target_room: "Airlock".to_string(),
                payload: "you drift home".to_string(),
            },
        );
        adventure.items.insert("keycard", "A blue keycard.");
        adventure.settings.insert(CLEAR_SCREEN, "false");
        adventure.settings.insert(COLOURS, "true");
        adventure
            .settings
            .insert(GAME_COMPLETE_TEXT, "The station is saved.");
        adventure
    }

    fn engine() -> GameEngine {
        GameEngine::new(test_adventure())
    }

    fn run(engine: &mut GameEngine, input: &str) -> PlayResult<String> {
        engine.process(input).map(|out| out.plain_text())
    }

    #[test]
    fn north_moves_to_hallway() {
        let mut engine = engine();
        let text = run(&mut engine, "north").unwrap();
        assert!(text.starts_with("Moving north"));
        assert_eq!(engine.world().current_room(), "Hallway");
    }

    #[test]
    fn blocked_move_reports_failure() {
        let mut engine = engine();
        assert_eq!(run(&mut engine, "w"), Err(PlayError::NoPassage));
        assert_eq!(engine.world().current_room(), "Entrance");
    }

    #[test]
    fn first_visit_text_shows_once_with_pause() {
        let mut engine = engine();
        let out = engine.process("n").unwrap();
        assert!(out.plain_text().contains("Red lights pulse.\nSomething hums."));
        assert_eq!(out.blocks.last(), Some(&Block::Pause));

        run(&mut engine, "s").unwrap();
        let again = run(&mut engine, "n").unwrap();
        assert_eq!(again, "Moving north");
    }

    #[test]
    fn pickup_and_drop_keycard() {
        let mut engine = engine();
        let text = run(&mut engine, "pickup keycard").unwrap();
        assert_eq!(text, "The item was added to inventory!");
        assert!(engine.world().items_in("Entrance").is_empty());
        assert_eq!(engine.world().player().inventory, vec!["keycard"]);

        let text = run(&mut engine, "drop keycard").unwrap();
        assert_eq!(text, "The item was dropped!");
        assert_eq!(engine.world().items_in("Entrance"), ["keycard".to_string()]);
        assert!(engine.world().player().inventory.is_empty());
    }

    #[test]
    fn get_is_an_alias_for_pickup() {
        let mut engine = engine();
        assert!(run(&mut engine, "get keycard").is_ok());
        assert!(engine.world().player().has_item("keycard"));
    }

    #[test]
    fn pickup_missing_item_fails() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, "pickup wrench"),
            Err(PlayError::ItemNotHere("wrench".to_string()))
        );
        assert_eq!(
            run(&mut engine, "drop wrench"),
            Err(PlayError::ItemNotHeld("wrench".to_string()))
        );
    }

    #[test]
    fn describe_room_and_items() {
        let mut engine = engine();
        assert!(run(&mut engine, "description").unwrap().contains("A frosted airlock."));

        assert_eq!(
            run(&mut engine, "description keycard"),
            Err(PlayError::DescribeNotHeld("keycard".to_string()))
        );
        run(&mut engine, "pickup keycard").unwrap();
        assert!(
            run(&mut engine, "description keycard")
                .unwrap()
                .contains("A blue keycard.")
        );
    }

    #[test]
    fn describe_room_without_description() {
        let mut engine = engine();
        run(&mut engine, "n").unwrap();
        let out = engine.process("description").unwrap();
        assert_eq!(out.plain_text().trim(), "");
        assert!(
            !out.blocks
                .iter()
                .any(|b| matches!(b, Block::Line(Tone::Failure, _)))
        );
    }

    #[test]
    fn lever_toggles_vent_passage() {
        let mut engine = engine();
        run(&mut engine, "n").unwrap();

        assert_eq!(
            run(&mut engine, "interact lever").unwrap().trim(),
            "Gravity fails."
        );
        assert_eq!(
            engine.world().destination_of("Hallway", Direction::Up),
            Some("VentShaft")
        );

        assert_eq!(
            run(&mut engine, "interact LEVER").unwrap().trim(),
            "Gravity returns."
        );
        assert_eq!(engine.world().destination_of("Hallway", Direction::Up), None);
    }

    #[test]
    fn interact_outside_its_room_fails() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, "interact lever"),
            Err(PlayError::NoSuchObject("lever".to_string()))
        );
    }

    #[test]
    fn potato_wins_only_in_control_room() {
        let mut engine = engine();
        engine
            .adventure
            .world
            .add_item_to("Entrance", "potato")
            .unwrap();
        run(&mut engine, "pickup potato").unwrap();

        assert_eq!(run(&mut engine, "use potato").unwrap(), "It did nothing");
        assert!(!engine.is_complete());

        run(&mut engine, "n").unwrap();
        run(&mut engine, "e").unwrap();
        let text = run(&mut engine, "use potato").unwrap();
        assert_eq!(text, "The station is saved.");
        assert_eq!(engine.state(), GameState::Complete);

        assert_eq!(run(&mut engine, "n"), Err(PlayError::GameOver));
    }

    #[test]
    fn keycard_teleports_home() {
        let mut engine = engine();
        run(&mut engine, "pickup keycard").unwrap();
        for step in ["n", "e", "n"] {
            run(&mut engine, step).unwrap();
        }
        assert_eq!(engine.world().current_room(), "Airlock");

        let text = run(&mut engine, "use keycard").unwrap();
        assert_eq!(text, "you drift home");
        assert_eq!(engine.world().current_room(), "Entrance");
        assert!(!engine.world().player().has_item("keycard"));
    }

    #[test]
    fn use_unheld_item() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, "use potato"),
            Err(PlayError::UseNotHeld("potato".to_string()))
        );
    }

    #[test]
    fn settings_command() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, "setting clearScreen true").unwrap(),
            "setting changed"
        );
        assert!(engine.settings().flag(CLEAR_SCREEN));

        assert_eq!(
            run(&mut engine, "setting volume 11"),
            Err(PlayError::NoSuchSetting("volume".to_string()))
        );
        assert_eq!(
            run(&mut engine, "setting colours"),
            Err(PlayError::SettingUsage)
        );
        assert_eq!(
            run(&mut engine, "setting colours false now"),
            Err(PlayError::SettingUsage)
        );
        assert!(engine.settings().flag(COLOURS));
    }

    #[test]
    fn setting_ignores_trailing_spaces() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, "setting clearScreen true ").unwrap(),
            "setting changed"
        );
        assert!(engine.settings().flag(CLEAR_SCREEN));

        assert_eq!(
            run(&mut engine, "setting colours  false"),
            Err(PlayError::SettingUsage)
        );
        assert_eq!(run(&mut engine, "setting   "), Err(PlayError::SettingUsage));
        assert!(engine.settings().flag(COLOURS));
    }

    #[test]
    fn unknown_input_is_not_a_command() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, "dance"),
            Err(PlayError::NotACommand("dance".to_string()))
        );
    }

    #[test]
    fn status_lists_room_state() {
        let mut engine = engine();
        let text = engine.status().plain_text();
        assert!(text.contains("You are currently in Entrance"));
        assert!(text.contains("north to Hallway"));
        assert!(text.contains("[keycard]"));
        assert!(!text.contains("You can interact with:"));

        run(&mut engine, "n").unwrap();
        let text = engine.status().plain_text();
        assert!(text.contains("You can interact with:\nlever"));
        assert!(text.contains("[]"));
    }

    #[test]
    fn introduction_turns_markers_into_pauses() {
        let mut adventure = test_adventure();
        adventure
            .settings
            .insert(INTRODUCTION, "Wake up.\nwaitForInput();\nThe meteor is close.");
        let engine = GameEngine::new(adventure);
        assert_eq!(
            engine.introduction().blocks,
            vec![
                Block::Line(Tone::Plain, "Wake up.".to_string()),
                Block::Pause,
                Block::Line(Tone::Plain, "The meteor is close.".to_string()),
            ]
        );
    }

    #[test]
    fn introduction_is_empty_without_setting() {
        assert!(engine().introduction().is_empty());
    }

    #[test]
    fn accessors_reflect_play() {
        let mut engine = engine();
        run(&mut engine, "pickup keycard").unwrap();
        assert!(engine.adventure().world.player().has_item("keycard"));
        assert_eq!(engine.adventure().effects.len(), 2);

        let keywords: Vec<&str> = engine.commands().keywords().map(|(k, _)| k).collect();
        assert_eq!(&keywords[..3], &["DESCRIPTION", "PICKUP", "GET"]);
    }

    #[test]
    fn aliases_from_settings() {
        let mut adventure = test_adventure();
        adventure.settings.insert(COMMAND_ALIASES, "GRAB PICKUP");
        let mut engine = GameEngine::new(adventure);
        assert!(run(&mut engine, "grab keycard").is_ok());
    }

    #[test]
    fn default_victory_text() {
        let mut adventure = test_adventure();
        adventure.settings = Settings::new();
        let engine = GameEngine::new(adventure);
        assert_eq!(engine.victory().plain_text(), DEFAULT_VICTORY);
    }
}
