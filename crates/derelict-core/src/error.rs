use crate::direction::Direction;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or mutating a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The named room is not part of the world.
    #[error("room not found: \"{0}\"")]
    UnknownRoom(String),

    /// Two rooms were declared with the same identifier.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// A passage leads to a room that does not exist.
    #[error("passage {direction} from \"{room}\" leads to unknown room \"{destination}\"")]
    DanglingEdge {
        /// The room the passage starts in.
        room: String,
        /// The direction of the passage.
        direction: Direction,
        /// The missing destination.
        destination: String,
    },

    /// No interactable with this name can be reached from the room.
    #[error("no interactable \"{name}\" in \"{room}\"")]
    InteractableNotFound {
        /// The room the player is in.
        room: String,
        /// The requested interactable name.
        name: String,
    },

    /// An interactable was declared twice in the same room.
    #[error("interactable \"{name}\" declared twice in \"{room}\"")]
    DuplicateInteractable {
        /// The room it is declared in.
        room: String,
        /// The interactable name.
        name: String,
    },

    /// The setting key has never been configured.
    #[error("no setting found: \"{0}\"")]
    SettingNotFound(String),
}
