//! Static instructions shown at start-up and by the `help` command.

use derelict_core::Direction;

use crate::output::{Output, Tone};

/// The how-to-play instructions, split into pages by pauses.
pub fn instructions() -> Output {
    let mut out = Output::new();
    out.say("There are 6 possible directions:");
    for direction in Direction::ALL {
        out.line(Tone::Listing, direction.name());
    }
    out.say("(or the shortcuts n, s, e, w, u, d)");
    out.pause();

    out.say("to get the description of the current room, type 'description'");
    out.say("for the description of an item, type 'description ' and the item's name");
    out.pause();

    out.say("pick up an item with 'pickup ' and the item name");
    out.say("drop an item with 'drop ' and the item name");
    out.say("use an item with 'use ' and the item name");
    out.pause();

    out.say("to interact, type 'interact ' and the object's name");
    out.pause();

    out.say("to toggle clear screen, type 'setting clearScreen (true/false)'");
    out.say("if the text on screen is odd (random square brackets), try disabling coloured text");
    out.say("to toggle coloured text, type 'setting colours (true/false)'");
    out.pause();

    out.line(
        Tone::Heading,
        "if you need to see the command list again, type 'help'",
    );
    out.pause();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Block;

    #[test]
    fn instructions_mention_every_command() {
        let text = instructions().plain_text();
        for word in ["description", "pickup", "drop", "use", "interact", "setting", "help"] {
            assert!(text.contains(word), "missing {word}");
        }
    }

    #[test]
    fn instructions_end_with_pause() {
        assert_eq!(instructions().blocks.last(), Some(&Block::Pause));
    }
}
