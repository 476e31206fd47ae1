use std::collections::BTreeSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// Global registry of TerritoryDecay entities that have entered the world
/// (left the "no owner" state), for an external decay ticker to poll.
///
/// BTreeSet for deterministic iteration.
#[derive(Resource, Debug, Clone, Default)]
pub struct TerritoryDecayManager {
    entities: BTreeSet<Entity>,
}

impl TerritoryDecayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the entity was already registered.
    pub fn add(&mut self, entity: Entity) -> bool {
        self.entities.insert(entity)
    }

    /// Returns false if the entity was not registered.
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.entities.remove(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    /// Registered entities for which `is_decaying` holds.
    pub fn decaying_entities<'a>(
        &'a self,
        mut is_decaying: impl FnMut(Entity) -> bool + 'a,
    ) -> impl Iterator<Item = Entity> + 'a {
        self.iter().filter(move |&e| is_decaying(e))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
