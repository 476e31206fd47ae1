use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::PlayerId;

/// Change notifications emitted by the command applicator after it mutates
/// the territory map, positions, diplomacy, or ownership.
///
/// One enum so that notifications of different kinds keep their relative order.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum TerritoryNotification {
    /// The territory map was repainted and connectivity recomputed.
    TerritoriesChanged,
    PositionChanged {
        entity: Entity,
    },
    /// `player` changed its stance towards some other player.
    DiplomacyChanged {
        player: PlayerId,
    },
    /// `from == PlayerId::INVALID` on creation, `to == PlayerId::INVALID` on destruction.
    OwnershipChanged {
        entity: Entity,
        from: PlayerId,
        to: PlayerId,
    },
}

/// Emitted exactly once per decaying/not-decaying transition.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct TerritoryDecayChanged {
    pub entity: Entity,
    pub to: bool,
    pub rate: f64,
}
