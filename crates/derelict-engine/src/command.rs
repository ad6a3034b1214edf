//! Command parsing for player input.
//!
//! Resolution order, first match wins:
//!
//! 1. a full direction word (`north`, `UP`, ...);
//! 2. a one-letter direction shortcut (`n`, `S`, ...);
//! 3. a keyword from the [`CommandTable`], matched as a case-insensitive
//!    prefix of the input, in table order.
//!
//! Prefix matching is deliberately lax: `pickupkeycard` and `pickup keycard`
//! both pick up `keycard`, because the single character after the keyword is
//! dropped whatever it is.

use std::fmt;

use derelict_core::Direction;

/// The kind of a parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Move through a passage.
    Direction(Direction),
    /// Describe the room, or a held item.
    Description,
    /// Pick an item up from the room.
    Pickup,
    /// Put a held item down.
    Drop,
    /// Use a held item.
    Use,
    /// Flip an interactable.
    Interact,
    /// Show instructions.
    Help,
    /// Change a setting.
    Setting,
}

impl CommandKind {
    /// Parse a keyword-command name such as `PICKUP`, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword.to_ascii_uppercase().as_str() {
            "DESCRIPTION" => Self::Description,
            "PICKUP" => Self::Pickup,
            "DROP" => Self::Drop,
            "USE" => Self::Use,
            "INTERACT" => Self::Interact,
            "HELP" => Self::Help,
            "SETTING" => Self::Setting,
            _ => return None,
        };
        Some(kind)
    }
}

/// A parsed player command: what to do and the raw argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// What to do.
    pub kind: CommandKind,
    /// Everything after the keyword and its separator; empty if none.
    pub argument: String,
}

impl Command {
    /// Create a command with an argument.
    pub fn new(kind: CommandKind, argument: impl Into<String>) -> Self {
        Self {
            kind,
            argument: argument.into(),
        }
    }

    /// Create a movement command.
    pub fn go(direction: Direction) -> Self {
        Self::new(CommandKind::Direction(direction), direction.name())
    }
}

/// The input matched no direction and no keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotACommand(pub String);

impl fmt::Display for NotACommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not a command")
    }
}

/// Ordered `(keyword, kind)` pairs used for prefix matching.
///
/// Order matters: when two keywords both prefix the input, the earlier
/// entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<(String, CommandKind)>,
}

impl CommandTable {
    /// A table with no keywords; only directions parse.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in keywords, without aliases.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (keyword, kind) in [
            ("DESCRIPTION", CommandKind::Description),
            ("PICKUP", CommandKind::Pickup),
            ("DROP", CommandKind::Drop),
            ("USE", CommandKind::Use),
            ("INTERACT", CommandKind::Interact),
            ("HELP", CommandKind::Help),
            ("SETTING", CommandKind::Setting),
        ] {
            table.push(keyword, kind);
        }
        table
    }

    /// The built-in keywords plus `GET` as an alias for `PICKUP`, placed
    /// directly after it.
    pub fn standard() -> Self {
        let mut table = Self::builtin();
        table.insert_after(CommandKind::Pickup, "GET", CommandKind::Pickup);
        table
    }

    /// Append a keyword at the end of the table.
    pub fn push(&mut self, keyword: impl Into<String>, kind: CommandKind) {
        self.entries.push((keyword.into().to_ascii_uppercase(), kind));
    }

    /// Insert a keyword right after the last entry of `anchor` kind,
    /// or at the end if there is none.
    pub fn insert_after(&mut self, anchor: CommandKind, keyword: &str, kind: CommandKind) {
        let pos = self
            .entries
            .iter()
            .rposition(|(_, k)| *k == anchor)
            .map_or(self.entries.len(), |p| p + 1);
        self.entries
            .insert(pos, (keyword.to_ascii_uppercase(), kind));
    }

    /// Add aliases from `<ALIAS> <KEYWORD>` lines. Returns the lines that
    /// could not be understood.
    pub fn add_aliases<'a>(&mut self, text: &'a str) -> Vec<&'a str> {
        let mut rejected = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let words: Vec<&str> = line.split_whitespace().collect();
            match words.as_slice() {
                [alias, target] => match CommandKind::from_keyword(target) {
                    Some(kind) => self.insert_after(kind, alias, kind),
                    None => rejected.push(line),
                },
                _ => rejected.push(line),
            }
        }
        rejected
    }

    /// Iterate over keywords in match order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, CommandKind)> {
        self.entries.iter().map(|(k, kind)| (k.as_str(), *kind))
    }

    /// Parse one line of input.
    pub fn parse(&self, input: &str) -> Result<Command, NotACommand> {
        if let Some(direction) = Direction::parse(input) {
            return Ok(Command::go(direction));
        }
        if let Some(direction) = Direction::from_shortcut(input) {
            return Ok(Command::go(direction));
        }

        for (keyword, kind) in &self.entries {
            let Some(head) = input.get(..keyword.len()) else {
                continue;
            };
            if head.eq_ignore_ascii_case(keyword) {
                let mut rest = input[keyword.len()..].chars();
                rest.next();
                return Ok(Command::new(*kind, rest.as_str()));
            }
        }

        Err(NotACommand(input.to_string()))
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse one line of input with the standard table.
pub fn parse_command(input: &str) -> Result<Command, NotACommand> {
    CommandTable::standard().parse(input)
}
