//! Item-use effects.

use std::collections::BTreeMap;
use std::fmt;

/// What happens when an item is used in its target room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Show a hint text.
    Hint,
    /// Show a text, consume the item, and send the player back to the start.
    Teleport,
    /// Win the game.
    CompleteGame,
}

/// Outcome of parsing an effect kind tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEffectKind {
    /// A recognised tag.
    Known(EffectKind),
    /// Anything else, kept verbatim for reporting.
    Unknown(String),
}

impl EffectKind {
    /// Parse an effect tag such as `HINT`, `TELEPORT`, or `COMPLETEGAME`.
    ///
    /// Surrounding whitespace and ASCII case are ignored; `COMPLETE_GAME`
    /// is accepted as a spelling of `COMPLETEGAME`.
    pub fn parse(raw: &str) -> ParsedEffectKind {
        let tag = raw.trim();
        let kind = if tag.eq_ignore_ascii_case("HINT") {
            Self::Hint
        } else if tag.eq_ignore_ascii_case("TELEPORT") {
            Self::Teleport
        } else if tag.eq_ignore_ascii_case("COMPLETEGAME") || tag.eq_ignore_ascii_case("COMPLETE_GAME")
        {
            Self::CompleteGame
        } else {
            return ParsedEffectKind::Unknown(raw.to_string());
        };
        ParsedEffectKind::Known(kind)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint => write!(f, "HINT"),
            Self::Teleport => write!(f, "TELEPORT"),
            Self::CompleteGame => write!(f, "COMPLETEGAME"),
        }
    }
}

/// The effect registered for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseEffect {
    /// What the effect does.
    pub kind: EffectKind,
    /// The only room the effect fires in.
    pub target_room: String,
    /// Text shown for hints and teleports.
    pub payload: String,
}

/// Why using a held item did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoEffectReason {
    /// The item has no registered effect.
    NotRegistered,
    /// The player is not in the effect's target room.
    WrongRoom,
}

impl fmt::Display for NoEffectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered => write!(f, "no registered effect"),
            Self::WrongRoom => write!(f, "wrong room"),
        }
    }
}

/// The result of using an item. The caller applies any state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// The player is not holding the item.
    NotHeld,
    /// The item is held but nothing happens.
    NoEffect(NoEffectReason),
    /// Show a hint; no state change.
    Hint(String),
    /// Show the text, remove the item from the inventory, and move the
    /// player to the starting room.
    Teleport(String),
    /// The game is won.
    Complete,
}

/// Item name to effect.
#[derive(Debug, Clone, Default)]
pub struct UseEffectRegistry {
    effects: BTreeMap<String, UseEffect>,
}

impl UseEffectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect, replacing any earlier one for the same item.
    pub fn insert(&mut self, item: impl Into<String>, effect: UseEffect) {
        self.effects.insert(item.into(), effect);
    }

    /// Look up the effect for an item.
    pub fn get(&self, item: &str) -> Option<&UseEffect> {
        self.effects.get(item)
    }

    /// Iterate over registered items and their effects.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UseEffect)> {
        self.effects.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Decide what using `item` in `player_room` does.
    pub fn apply(&self, item: &str, player_room: &str, has_item: bool) -> UseOutcome {
        if !has_item {
            return UseOutcome::NotHeld;
        }
        let Some(effect) = self.effects.get(item) else {
            return UseOutcome::NoEffect(NoEffectReason::NotRegistered);
        };
        if effect.target_room != player_room {
            return UseOutcome::NoEffect(NoEffectReason::WrongRoom);
        }
        match effect.kind {
            EffectKind::Hint => UseOutcome::Hint(effect.payload.clone()),
            EffectKind::Teleport => UseOutcome::Teleport(effect.payload.clone()),
            EffectKind::CompleteGame => UseOutcome::Complete,
        }
    }
}
