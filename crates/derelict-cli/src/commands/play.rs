use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use derelict_core::settings::{CLEAR_SCREEN, COLOURS};
use derelict_engine::{Command, GameEngine, Tone};
use tracing::{debug, info};

use crate::terminal::Console;

const PROMPT: &str = "Input a command";

pub fn run(dir: &Path, skip_intro: bool) -> Result<(), String> {
    let loaded = super::load(dir)?;
    let mut engine = GameEngine::new(loaded.adventure);

    let is_terminal = io::stdout().is_terminal();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), is_terminal);

    play(&mut engine, &mut console, skip_intro).map_err(|e| format!("terminal error: {e}"))
}

/// Run turns until the game is won or input runs out.
fn play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    console: &mut Console<R, W>,
    skip_intro: bool,
) -> io::Result<()> {
    console.set_colours(engine.settings().flag(COLOURS));
    if !skip_intro {
        console.render(&engine.help())?;
        let introduction = engine.introduction();
        if introduction.is_empty() {
            debug!("content pack has no introduction");
        } else {
            console.render(&introduction)?;
        }
    }

    while !engine.is_complete() {
        console.set_colours(engine.settings().flag(COLOURS));
        console.render(&engine.status())?;

        let Some(command) = read_command(engine, console)? else {
            info!("input closed, leaving the game");
            return Ok(());
        };
        if engine.settings().flag(CLEAR_SCREEN) {
            console.clear_screen()?;
        }

        match engine.execute(command) {
            Ok(output) => console.render(&output)?,
            Err(e) => console.failure(&e.to_string())?,
        }
    }
    Ok(())
}

/// Prompt until the input parses. `None` once input is closed.
fn read_command<R: BufRead, W: Write>(
    engine: &GameEngine,
    console: &mut Console<R, W>,
) -> io::Result<Option<Command>> {
    loop {
        console.line(Tone::Heading, PROMPT)?;
        let Some(line) = console.read_line()? else {
            return Ok(None);
        };
        match engine.parse(&line) {
            Ok(command) => return Ok(Some(command)),
            Err(e) => console.failure(&e.to_string())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use derelict_core::settings::GAME_COMPLETE_TEXT;
    use derelict_core::{Adventure, Direction, EffectKind, Room, UseEffect, World};
    use std::io::Cursor;

    fn engine() -> GameEngine {
        let rooms = vec![
            Room::new("Entrance")
                .with_exit(Direction::North, "ControlRoom")
                .with_item("potato"),
            Room::new("ControlRoom").with_exit(Direction::South, "Entrance"),
        ];
        let mut adventure = Adventure::new(World::new(rooms, "Entrance").unwrap());
        adventure.effects.insert(
            "potato",
            UseEffect {
                kind: EffectKind::CompleteGame,
                target_room: "ControlRoom".to_string(),
                payload: String::new(),
            },
        );
        adventure.settings.insert(GAME_COMPLETE_TEXT, "You win.");
        adventure.settings.insert(CLEAR_SCREEN, "false");
        GameEngine::new(adventure)
    }

    fn play_script(engine: &mut GameEngine, script: &str) -> String {
        let mut output = Vec::new();
        {
            let mut console = Console::new(Cursor::new(script.as_bytes()), &mut output, false);
            play(engine, &mut console, true).unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn scripted_win_stops_reading() {
        let mut engine = engine();
        let text = play_script(&mut engine, "pickup potato\nnorth\nuse potato\nsouth\n");
        assert!(engine.is_complete());
        assert!(text.contains("Moving north"));
        assert!(text.ends_with("You win.\n"));
        assert_eq!(engine.world().current_room(), "ControlRoom");
    }

    #[test]
    fn bad_input_reprompts_without_status() {
        let mut engine = engine();
        let text = play_script(&mut engine, "dance\nnorth\n");
        let prompt_then_error = format!("{PROMPT}\nNot a command\n{PROMPT}\nMoving north");
        assert!(text.contains(&prompt_then_error), "{text}");
    }

    #[test]
    fn failures_keep_playing() {
        let mut engine = engine();
        let text = play_script(&mut engine, "west\ndrop sock\nn\n");
        assert!(text.contains("No room in this direction!"));
        assert!(text.contains("The item does not exist!"));
        assert_eq!(engine.world().current_room(), "ControlRoom");
        assert!(!engine.is_complete());
    }
}
