use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::components::{Ownership, Position, TerritoryDecay};
use crate::ecs::events::TerritoryNotification;
use crate::ecs::resources::PlayerRegistry;
use crate::model::{PlayerId, TerritoryDecayTemplate};

/// Spawn an entity with TerritoryDecay, a position, and an owner.
///
/// `position: None` spawns it out of world. An owned entity announces itself
/// with `OwnershipChanged { from: INVALID, .. }`, which registers it with
/// `TerritoryDecayManager` and evaluates its decay state on the next tick.
pub fn spawn_territory_entity(
    world: &mut World,
    template: TerritoryDecayTemplate,
    position: Option<(f64, f64)>,
    owner: PlayerId,
) -> Entity {
    let num_players = world
        .get_resource::<PlayerRegistry>()
        .map_or(0, PlayerRegistry::num_players);
    let position = match position {
        Some((x, y)) => Position::at(x, y),
        None => Position::out_of_world(),
    };

    let entity = world
        .spawn((
            TerritoryDecay::new(template, num_players),
            position,
            Ownership::new(owner),
        ))
        .id();

    if owner.is_valid() {
        // Graceful when message types are not registered (bare World in tests)
        if let Some(mut messages) = world.get_resource_mut::<Messages<TerritoryNotification>>() {
            messages.write(TerritoryNotification::OwnershipChanged {
                entity,
                from: PlayerId::INVALID,
                to: owner,
            });
        }
    }
    entity
}
