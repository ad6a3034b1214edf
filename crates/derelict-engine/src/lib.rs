//! Turn engine for derelict adventures.
//!
//! Parses player input into [`Command`]s and applies them to an
//! [`Adventure`](derelict_core::Adventure), producing structured [`Output`]
//! for a frontend to render.

/// Input parsing.
pub mod command;
/// Player-facing errors.
pub mod error;
/// The game engine.
pub mod game;
/// How-to-play text.
pub mod help;
/// Structured output.
pub mod output;

pub use command::{Command, CommandKind, CommandTable, NotACommand, parse_command};
pub use error::{PlayError, PlayResult};
pub use game::{GameEngine, GameState};
pub use output::{Block, Output, Tone};
