use crate::ecs::events::TerritoryNotification;
use crate::model::PlayerId;

use super::applicator::ApplyCtx;

/// Repaint one tile. A no-op repaint does not dirty the map.
pub(crate) fn apply_set_tile_owner(ctx: &mut ApplyCtx, tile_x: usize, tile_y: usize, owner: PlayerId) {
    match ctx.map.tile_owner(tile_x, tile_y) {
        None => {
            tracing::warn!("SetTileOwner outside map: ({tile_x}, {tile_y})");
        }
        Some(current) if current == owner => {}
        Some(_) => {
            ctx.map.set_tile_owner(tile_x, tile_y, owner);
            ctx.mark_territories_dirty();
        }
    }
}

pub(crate) fn apply_set_territory_root(ctx: &mut ApplyCtx, tile_x: usize, tile_y: usize, root: bool) {
    if ctx.map.tile_owner(tile_x, tile_y).is_none() {
        tracing::warn!("SetTerritoryRoot outside map: ({tile_x}, {tile_y})");
        return;
    }
    if ctx.map.is_root(tile_x, tile_y) != root {
        ctx.map.set_root(tile_x, tile_y, root);
        ctx.mark_territories_dirty();
    }
}

/// Update `player`'s stance towards `other`; emits DiplomacyChanged when it changed.
pub(crate) fn apply_set_ally(ctx: &mut ApplyCtx, player: PlayerId, other: PlayerId, allied: bool) {
    let was_allied = ctx.players.diplomacy(player).is_some_and(|d| d.is_ally(other));
    if was_allied == allied {
        return;
    }
    if !ctx.players.set_ally(player, other, allied) {
        tracing::warn!("SetAlly rejected: {player} -> {other}");
        return;
    }
    ctx.emit(TerritoryNotification::DiplomacyChanged { player });
}
