//! Error types for content pack loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for pack loading.
pub type PackResult<T> = Result<T, PackError>;

/// Problems that stop a content pack from loading at all.
#[derive(Debug, Error)]
pub enum PackError {
    /// A mandatory folder does not exist.
    #[error("folder not found: {}", path.display())]
    MissingFolder {
        /// The expected folder.
        path: PathBuf,
    },

    /// A mandatory file or folder could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file or folder that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A mandatory file or folder has a name that is not valid UTF-8.
    #[error("name is not valid UTF-8: {}", path.display())]
    InvalidName {
        /// The offending entry.
        path: PathBuf,
    },

    /// An interactable file is incomplete or refers to something that does not exist.
    #[error("invalid interactable {}: {reason}", path.display())]
    Interactable {
        /// The interactable file.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// No starting room is configured.
    #[error("no starting room configured (expected config/startingRoom.txt)")]
    NoStartingRoom,

    /// The pack's rooms do not form a valid world.
    #[error(transparent)]
    World(#[from] derelict_core::CoreError),
}
