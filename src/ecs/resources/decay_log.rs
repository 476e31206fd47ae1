use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

/// One decaying/not-decaying transition, as recorded for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayRecord {
    pub tick: u64,
    /// `Entity::to_bits()` of the transitioning entity.
    pub entity: u64,
    pub decaying: bool,
    pub rate: f64,
}

/// Accumulates decay transitions between flushes.
#[derive(Resource, Debug, Clone, Default)]
pub struct DecayLog {
    pub records: Vec<DecayRecord>,
}

impl DecayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions recorded for one entity, oldest first.
    pub fn for_entity(&self, entity: Entity) -> impl Iterator<Item = &DecayRecord> {
        let bits = entity.to_bits();
        self.records.iter().filter(move |r| r.entity == bits)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
