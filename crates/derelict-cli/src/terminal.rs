//! Line-based terminal I/O for the play loop.

use std::io::{self, BufRead, Write};

use colored::{ColoredString, Colorize};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use derelict_engine::{Block, Output, Tone};

const PAUSE_PROMPT: &str = "press enter to continue";

/// Reads commands and renders engine output.
///
/// Colour is only ever applied when the output is a terminal, whatever the
/// game's `colours` setting says.
pub struct Console<R, W> {
    input: R,
    output: W,
    is_terminal: bool,
    colours: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, is_terminal: bool) -> Self {
        Self {
            input,
            output,
            is_terminal,
            colours: false,
        }
    }

    /// Follow the game's `colours` setting.
    pub fn set_colours(&mut self, enabled: bool) {
        self.colours = enabled && self.is_terminal;
    }

    pub fn render(&mut self, out: &Output) -> io::Result<()> {
        for block in &out.blocks {
            match block {
                Block::Line(tone, text) => self.line(*tone, text)?,
                Block::Blank => writeln!(self.output)?,
                Block::Pause => self.pause()?,
            }
        }
        self.output.flush()
    }

    pub fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if self.colours {
            writeln!(self.output, "{}", paint(tone, text))
        } else {
            writeln!(self.output, "{text}")
        }
    }

    pub fn failure(&mut self, text: &str) -> io::Result<()> {
        self.line(Tone::Failure, text)?;
        self.output.flush()
    }

    /// Wait for enter. A closed input counts as enter.
    pub fn pause(&mut self) -> io::Result<()> {
        self.line(Tone::Plain, PAUSE_PROMPT)?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }

    /// Read one line without its line ending. `None` once input is closed.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }
}

fn paint(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Heading => text.bold().cyan(),
        Tone::Listing => text.green(),
        Tone::Narrative => text.yellow(),
        Tone::Failure => text.red(),
    }
}
