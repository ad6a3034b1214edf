//! Error types for the turn engine.
//!
//! These are player mistakes, not program faults: the frontend reports them
//! and asks for the next command.

use thiserror::Error;

/// Result type for engine operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Why a command could not be carried out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    /// The input matched no direction and no keyword.
    #[error("Not a command")]
    NotACommand(String),

    /// There is no passage in that direction.
    #[error("No room in this direction!")]
    NoPassage,

    /// The item is not lying in the current room.
    #[error("The item does not exist!")]
    ItemNotHere(String),

    /// The item is not in the inventory.
    #[error("The item does not exist!")]
    ItemNotHeld(String),

    /// Describing an item the player does not carry.
    #[error("You do not have this item...")]
    DescribeNotHeld(String),

    /// Using an item the player does not carry.
    #[error("You are not holding this...")]
    UseNotHeld(String),

    /// No interactable by that name in the current room.
    #[error("The object does not exist")]
    NoSuchObject(String),

    /// The setting key has never been configured.
    #[error("no setting found")]
    NoSuchSetting(String),

    /// The setting command was not `setting <key> <value>`.
    #[error("incorrect parameters, please use setting 'setting name' 'setting value'")]
    SettingUsage,

    /// The game is already won; no more commands are accepted.
    #[error("the game is over")]
    GameOver,
}
