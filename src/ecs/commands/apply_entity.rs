use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{Ownership, Position, TerritoryInfluence};
use crate::ecs::events::TerritoryNotification;
use crate::model::PlayerId;

use super::applicator::ApplyCtx;

/// Move an entity (or take it out of the world), emit PositionChanged.
pub(crate) fn apply_move_entity(
    ctx: &mut ApplyCtx,
    world: &mut World,
    entity: Entity,
    position: Option<(f64, f64)>,
) {
    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        tracing::warn!("MoveEntity for missing entity {entity:?}");
        return;
    };
    let position = match position {
        Some((x, y)) => Position::at(x, y),
        None => Position::out_of_world(),
    };
    entity_mut.insert(position);
    ctx.emit(TerritoryNotification::PositionChanged { entity });
}

/// Write a new owner, emit OwnershipChanged. Entities that influence the
/// territory also trigger a repaint.
pub(crate) fn apply_set_owner(ctx: &mut ApplyCtx, world: &mut World, entity: Entity, owner: PlayerId) {
    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        tracing::warn!("SetOwner for missing entity {entity:?}");
        return;
    };
    let influences = entity_mut.contains::<TerritoryInfluence>();
    let Some(mut ownership) = entity_mut.get_mut::<Ownership>() else {
        tracing::warn!("SetOwner for {entity:?} without an Ownership record");
        return;
    };

    let from = ownership.owner;
    if from == owner {
        return;
    }
    ownership.owner = owner;
    ctx.emit(TerritoryNotification::OwnershipChanged {
        entity,
        from,
        to: owner,
    });
    if influences {
        ctx.mark_territories_dirty();
    }
}

/// Despawn an entity. An owned entity first reports its owner going to
/// `PlayerId::INVALID`, so registries can forget it.
pub(crate) fn apply_destroy_entity(ctx: &mut ApplyCtx, world: &mut World, entity: Entity) {
    let Ok(entity_mut) = world.get_entity_mut(entity) else {
        tracing::warn!("DestroyEntity for missing entity {entity:?}");
        return;
    };
    let from = entity_mut
        .get::<Ownership>()
        .map_or(PlayerId::INVALID, |o| o.owner);
    let influences = entity_mut.contains::<TerritoryInfluence>();
    entity_mut.despawn();

    if from == PlayerId::INVALID {
        return;
    }
    ctx.emit(TerritoryNotification::OwnershipChanged {
        entity,
        from,
        to: PlayerId::INVALID,
    });
    if influences {
        ctx.mark_territories_dirty();
    }
}
