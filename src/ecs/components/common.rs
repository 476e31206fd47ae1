use bevy_ecs::component::Component;

use crate::model::PlayerId;

/// Spatial record of an entity. Only in-world positions resolve.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub in_world: bool,
}

impl Position {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, in_world: true }
    }

    /// Garrisoned, carried, or otherwise not placed on the map.
    pub fn out_of_world() -> Self {
        Self { x: 0.0, y: 0.0, in_world: false }
    }

    pub fn resolved(&self) -> Option<(f64, f64)> {
        self.in_world.then_some((self.x, self.y))
    }
}

/// Owning player of an entity. `PlayerId::INVALID` means unowned.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub owner: PlayerId,
}

impl Ownership {
    pub fn new(owner: PlayerId) -> Self {
        Self { owner }
    }
}

/// Marks an entity whose ownership shapes the territory map. An ownership
/// change on such an entity is followed by a `TerritoriesChanged` notification.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TerritoryInfluence;
