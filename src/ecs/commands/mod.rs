pub mod applicator;
mod apply_entity;
mod apply_territory;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::PlayerId;

pub use applicator::apply_territory_commands;

/// An intended mutation of the territory map, diplomacy, positions, or ownership.
///
/// Host systems (and the TerritoryDecay reactions, for ownership hand-offs)
/// emit these via `MessageWriter<TerritoryCommand>`. The applicator in
/// `DecayPhase::PostUpdate` applies them in order and emits the matching
/// `TerritoryNotification` messages.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum TerritoryCommand {
    // -- Territory map --
    SetTileOwner {
        tile_x: usize,
        tile_y: usize,
        owner: PlayerId,
    },
    SetTerritoryRoot {
        tile_x: usize,
        tile_y: usize,
        root: bool,
    },

    // -- Diplomacy --
    /// One-directional: `player` (un)declares `other` as an ally.
    SetAlly {
        player: PlayerId,
        other: PlayerId,
        allied: bool,
    },

    // -- Entities --
    /// `None` takes the entity out of the world.
    MoveEntity {
        entity: Entity,
        position: Option<(f64, f64)>,
    },
    SetOwner {
        entity: Entity,
        owner: PlayerId,
    },
    DestroyEntity {
        entity: Entity,
    },
}
