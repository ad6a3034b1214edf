//! Structured output produced by the engine and rendered by the frontend.

/// How a line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary text.
    Plain,
    /// Status headings and the input prompt.
    Heading,
    /// Names in a listing: exits, items, interactables.
    Listing,
    /// Story text and action results.
    Narrative,
    /// Failed actions.
    Failure,
}

/// One unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A line of text.
    Line(Tone, String),
    /// An empty line.
    Blank,
    /// Wait for the player to press enter.
    Pause,
}

/// An ordered list of output blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// The blocks, in display order.
    pub blocks: Vec<Block>,
}

impl Output {
    /// Create empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line with the given tone.
    pub fn line(&mut self, tone: Tone, text: impl Into<String>) {
        self.blocks.push(Block::Line(tone, text.into()));
    }

    /// Append a plain line.
    pub fn say(&mut self, text: impl Into<String>) {
        self.line(Tone::Plain, text);
    }

    /// Append narrative text, one line per `\n`.
    pub fn narrate(&mut self, text: &str) {
        for line in text.split('\n') {
            self.line(Tone::Narrative, line);
        }
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.blocks.push(Block::Blank);
    }

    /// Append a pause.
    pub fn pause(&mut self) {
        self.blocks.push(Block::Pause);
    }

    /// Append all blocks of another output.
    pub fn extend(&mut self, other: Output) {
        self.blocks.extend(other.blocks);
    }

    /// True if nothing was produced.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All text joined by newlines, with blanks as empty lines and pauses dropped.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Line(_, text) => Some(text.as_str()),
                Block::Blank => Some(""),
                Block::Pause => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
