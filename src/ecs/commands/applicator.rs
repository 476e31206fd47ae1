use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::events::TerritoryNotification;
use crate::ecs::resources::{PlayerRegistry, TerritoryMap};

use super::TerritoryCommand;
use super::apply_entity;
use super::apply_territory;

/// Context passed to all `apply_*` sub-functions, holding the stores they
/// mutate without requiring direct World access.
pub(crate) struct ApplyCtx {
    pub map: TerritoryMap,
    pub players: PlayerRegistry,
    pub territories_dirty: bool,
    pub notifications: Vec<TerritoryNotification>,
}

impl ApplyCtx {
    /// Queue a notification for emission after all commands are processed.
    pub(crate) fn emit(&mut self, notification: TerritoryNotification) {
        self.notifications.push(notification);
    }

    /// Request a single connectivity recompute + `TerritoriesChanged` at the
    /// end of the batch.
    pub(crate) fn mark_territories_dirty(&mut self) {
        self.territories_dirty = true;
    }
}

/// Exclusive system that drains all pending `TerritoryCommand` messages,
/// applies them in order, and emits `TerritoryNotification` messages.
///
/// Runs in `DecayPhase::PostUpdate`.
pub fn apply_territory_commands(world: &mut World) {
    let commands: Vec<TerritoryCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<TerritoryCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let Some(map) = world.remove_resource::<TerritoryMap>() else {
        tracing::warn!("TerritoryMap missing; dropping {} commands", commands.len());
        return;
    };
    let Some(players) = world.remove_resource::<PlayerRegistry>() else {
        world.insert_resource(map);
        tracing::warn!("PlayerRegistry missing; dropping {} commands", commands.len());
        return;
    };

    let mut ctx = ApplyCtx {
        map,
        players,
        territories_dirty: false,
        notifications: Vec::new(),
    };

    for cmd in commands {
        match cmd {
            TerritoryCommand::SetTileOwner {
                tile_x,
                tile_y,
                owner,
            } => {
                apply_territory::apply_set_tile_owner(&mut ctx, tile_x, tile_y, owner);
            }
            TerritoryCommand::SetTerritoryRoot {
                tile_x,
                tile_y,
                root,
            } => {
                apply_territory::apply_set_territory_root(&mut ctx, tile_x, tile_y, root);
            }
            TerritoryCommand::SetAlly {
                player,
                other,
                allied,
            } => {
                apply_territory::apply_set_ally(&mut ctx, player, other, allied);
            }
            TerritoryCommand::MoveEntity { entity, position } => {
                apply_entity::apply_move_entity(&mut ctx, world, entity, position);
            }
            TerritoryCommand::SetOwner { entity, owner } => {
                apply_entity::apply_set_owner(&mut ctx, world, entity, owner);
            }
            TerritoryCommand::DestroyEntity { entity } => {
                apply_entity::apply_destroy_entity(&mut ctx, world, entity);
            }
        }
    }

    if ctx.territories_dirty {
        ctx.map.recompute_connectivity();
        ctx.emit(TerritoryNotification::TerritoriesChanged);
    }

    let notifications = std::mem::take(&mut ctx.notifications);
    if let Some(mut messages) = world.get_resource_mut::<Messages<TerritoryNotification>>() {
        messages.write_batch(notifications);
    }

    world.insert_resource(ctx.map);
    world.insert_resource(ctx.players);
}
