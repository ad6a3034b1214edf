//! Core types for derelict: the world model a text adventure runs on.
//!
//! This crate holds the room graph, the player's position and inventory,
//! the toggles that open and close passages, and the item effects that fire
//! when the player uses something in the right place. It does no I/O; the
//! `derelict-pack` crate builds an [`Adventure`] from files on disk.

/// The bundle of everything a running game owns.
pub mod adventure;
/// The six movement directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Item-use effects and their registry.
pub mod effect;
/// Toggles that add and remove a single passage.
pub mod interactable;
/// Item descriptions.
pub mod item;
/// The player's position and inventory.
pub mod player;
/// A single room in the graph.
pub mod room;
/// String-keyed runtime settings.
pub mod settings;
/// The room graph and item placement.
pub mod world;

/// Re-export the adventure bundle.
pub use adventure::Adventure;
/// Re-export direction type.
pub use direction::Direction;
/// Re-export item effect types.
pub use effect::{
    EffectKind, NoEffectReason, ParsedEffectKind, UseEffect, UseEffectRegistry, UseOutcome,
};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export interactable types.
pub use interactable::{Interactable, InteractableRegistry, Toggled};
/// Re-export item catalog.
pub use item::ItemCatalog;
/// Re-export player state.
pub use player::PlayerState;
/// Re-export room type.
pub use room::Room;
/// Re-export settings.
pub use settings::Settings;
/// Re-export the world model.
pub use world::World;
