use crate::effect::UseEffectRegistry;
use crate::interactable::InteractableRegistry;
use crate::item::ItemCatalog;
use crate::settings::Settings;
use crate::world::World;

/// Everything a game needs: the world plus its registries and settings.
///
/// Built once from a content pack and handed to the engine, which owns it
/// for the rest of the session.
#[derive(Debug, Clone)]
pub struct Adventure {
    /// Rooms, passages, item placement, and the player.
    pub world: World,
    /// Passage toggles.
    pub interactables: InteractableRegistry,
    /// Item-use effects.
    pub effects: UseEffectRegistry,
    /// Item descriptions.
    pub items: ItemCatalog,
    /// Runtime settings.
    pub settings: Settings,
}

impl Adventure {
    /// Bundle a world with empty registries and settings.
    pub fn new(world: World) -> Self {
        Self {
            world,
            interactables: InteractableRegistry::new(),
            effects: UseEffectRegistry::new(),
            items: ItemCatalog::new(),
            settings: Settings::new(),
        }
    }
}
