//! TerritoryDecay: connectivity, decay rate, decay state, territory ownership.
//!
//! Entities carrying `TerritoryDecay` react to `TerritoryNotification`s:
//! 1. `TerritoriesChanged` / `PositionChanged`: re-evaluate decay, or hand
//!    ownership to the tile owner for territory-owned entities
//! 2. `DiplomacyChanged`: re-evaluate decay (alliances never move ownership)
//! 3. `OwnershipChanged`: keep `TerritoryDecayManager` current, re-evaluate
//!    decay unless a repaint is already on its way
//!
//! Transitions are published as `TerritoryDecayChanged` and recorded in `DecayLog`.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::Has;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::clock::{DecayClock, advance_clock};
use crate::ecs::commands::TerritoryCommand;
use crate::ecs::components::{Ownership, Position, TerritoryDecay, TerritoryInfluence};
use crate::ecs::events::{TerritoryDecayChanged, TerritoryNotification};
use crate::ecs::resources::{
    DECAY_RATE_KEY, DecayConfig, DecayLog, DecayRecord, NeutralFilter, PlayerRegistry,
    TERRITORY_FILTER_KEY, TerritoryDecayManager, TerritoryMap, ValueModifiers,
};
use crate::ecs::schedule::{DecayPhase, DecayTick};
use crate::model::{PlayerId, TerritoryKind};

// ---------------------------------------------------------------------------
// Evaluation context
// ---------------------------------------------------------------------------

/// Point-in-time view of the collaborators a decay evaluation reads.
/// The map is mutable only for its blinking flag.
pub struct DecayCtx<'a> {
    pub map: &'a mut TerritoryMap,
    pub players: &'a PlayerRegistry,
    pub modifiers: &'a ValueModifiers,
    pub config: &'a DecayConfig,
}

/// The entity under evaluation and its spatial/ownership records, if any.
#[derive(Debug, Clone, Copy)]
pub struct DecaySubject<'a> {
    pub entity: Entity,
    pub position: Option<&'a Position>,
    pub ownership: Option<&'a Ownership>,
}

impl<'a> DecaySubject<'a> {
    pub fn new(
        entity: Entity,
        position: Option<&'a Position>,
        ownership: Option<&'a Ownership>,
    ) -> Self {
        Self {
            entity,
            position,
            ownership,
        }
    }
}

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

/// Whether the entity's territory counts as connected, i.e. it should not decay.
///
/// Repopulates `connected_neighbours` and may toggle the tile's blinking flag.
/// Anything that cannot be evaluated (not placed, unowned, no diplomacy)
/// counts as connected.
pub fn is_connected(ctx: &mut DecayCtx, subject: DecaySubject, decay: &mut TerritoryDecay) -> bool {
    decay.reset_neighbours(ctx.players.num_players());

    let Some((x, y)) = subject.position.and_then(Position::resolved) else {
        return true;
    };
    let Some(owner) = subject
        .ownership
        .map(|o| o.owner)
        .filter(|&p| ctx.players.contains(p))
    else {
        return true;
    };
    if !ctx.players.has_diplomacy(owner) {
        return true;
    }

    let filter = territory_filter(ctx.modifiers, subject.entity, decay);
    let tile_owner = ctx.map.get_owner(x, y);

    if tile_owner.is_gaia() {
        ctx.map.set_blinking(x, y, false);
        decay.mark_neighbour(PlayerId::GAIA);
        return owner.is_gaia() || neutral_exempt(ctx.config.neutral_filter, &filter);
    }

    let tile_connected = ctx.map.is_connected(x, y);
    if tile_connected && !ctx.players.is_mutual_ally(owner, tile_owner) {
        decay.mark_neighbour(tile_owner);
        tracing::trace!(entity = ?subject.entity, %owner, %tile_owner, "on connected foreign territory");
        return filter.contains(&TerritoryKind::Enemy);
    }

    if tile_connected {
        return true;
    }

    if tile_owner != owner {
        return foreign_island(decay);
    }

    connected_through_ally(ctx, decay, owner, x, y)
}

/// Standing on a disconnected patch of another player's territory.
///
/// Known rough edge rather than a general rule: the entity always decays
/// here, towards gaia, whatever its territory filter says.
fn foreign_island(decay: &mut TerritoryDecay) -> bool {
    decay.mark_neighbour(PlayerId::GAIA);
    false
}

/// Own territory cut off from the owner's network: safe only if it borders a
/// connected region of a mutual ally. Blinks while at risk.
fn connected_through_ally(
    ctx: &mut DecayCtx,
    decay: &mut TerritoryDecay,
    owner: PlayerId,
    x: f64,
    y: f64,
) -> bool {
    let num_players = ctx.players.num_players();
    let bordering = ctx.map.get_neighbours(x, y, true, num_players);
    decay.set_neighbours(&bordering);

    let allied = (1..num_players).any(|i| {
        bordering[i] > 0 && ctx.players.is_mutual_ally(owner, PlayerId::from_index(i))
    });
    ctx.map.set_blinking(x, y, !allied);
    allied
}

fn territory_filter(
    modifiers: &ValueModifiers,
    entity: Entity,
    decay: &TerritoryDecay,
) -> Vec<TerritoryKind> {
    match &decay.template().territory {
        Some(kinds) => modifiers.apply_territory(TERRITORY_FILTER_KEY, kinds.clone(), entity),
        None => Vec::new(),
    }
}

fn neutral_exempt(rule: NeutralFilter, filter: &[TerritoryKind]) -> bool {
    match rule {
        NeutralFilter::Membership => filter.contains(&TerritoryKind::Neutral),
        NeutralFilter::Positional => {
            filter.iter().position(|&k| k == TerritoryKind::Neutral) == Some(1)
        }
    }
}

// ---------------------------------------------------------------------------
// Rate, state, ownership
// ---------------------------------------------------------------------------

/// Effective decay rate; 0 when the template configures none.
pub fn decay_rate(modifiers: &ValueModifiers, entity: Entity, decay: &TerritoryDecay) -> f64 {
    match decay.template().decay_rate {
        Some(rate) => modifiers.apply_numeric(DECAY_RATE_KEY, rate.as_f64(), entity),
        None => 0.0,
    }
}

/// Recompute the decaying flag. Returns the change to publish, if any.
pub fn update_decay_state(
    ctx: &mut DecayCtx,
    subject: DecaySubject,
    decay: &mut TerritoryDecay,
) -> Option<TerritoryDecayChanged> {
    let decaying = !is_connected(ctx, subject, decay)
        && decay_rate(ctx.modifiers, subject.entity, decay) > 0.0;
    if decaying == decay.decaying {
        return None;
    }

    decay.decaying = decaying;
    let rate = decay_rate(ctx.modifiers, subject.entity, decay);
    tracing::debug!(entity = ?subject.entity, decaying, rate, "territory decay state changed");
    Some(TerritoryDecayChanged {
        entity: subject.entity,
        to: decaying,
        rate,
    })
}

/// Ownership hand-off for territory-owned entities: the tile owner becomes the
/// entity's owner. Needs an ownership record and an in-world position.
pub fn update_owner(map: &TerritoryMap, subject: DecaySubject) -> Option<TerritoryCommand> {
    let ownership = subject.ownership?;
    let (x, y) = subject.position.and_then(Position::resolved)?;
    let tile_owner = map.get_owner(x, y);
    if tile_owner == ownership.owner {
        return None;
    }

    tracing::debug!(entity = ?subject.entity, from = %ownership.owner, to = %tile_owner, "territory takes ownership");
    Some(TerritoryCommand::SetOwner {
        entity: subject.entity,
        owner: tile_owner,
    })
}

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct TerritoryDecayPlugin;

impl Plugin for TerritoryDecayPlugin {
    fn build(&self, app: &mut App) {
        add_territory_decay_systems(app);
    }
}

pub fn add_territory_decay_systems(app: &mut App) {
    app.add_systems(
        DecayTick,
        handle_territory_notifications.in_set(DecayPhase::Reactions),
    );
    app.add_systems(
        DecayTick,
        record_decay_changes
            .in_set(DecayPhase::Last)
            .before(advance_clock),
    );
}

// ---------------------------------------------------------------------------
// Reaction system: dispatch notifications
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
fn handle_territory_notifications(
    mut notifications: MessageReader<TerritoryNotification>,
    mut decays: Query<(
        Entity,
        &mut TerritoryDecay,
        Option<&Position>,
        Option<&Ownership>,
        Has<TerritoryInfluence>,
    )>,
    mut map: ResMut<TerritoryMap>,
    players: Res<PlayerRegistry>,
    modifiers: Res<ValueModifiers>,
    config: Res<DecayConfig>,
    mut manager: ResMut<TerritoryDecayManager>,
    mut changes: MessageWriter<TerritoryDecayChanged>,
    mut commands: MessageWriter<TerritoryCommand>,
) {
    let mut ctx = DecayCtx {
        map: &mut map,
        players: &players,
        modifiers: &modifiers,
        config: &config,
    };

    for notification in notifications.read() {
        match *notification {
            TerritoryNotification::TerritoriesChanged => {
                for (entity, mut decay, position, ownership, _) in &mut decays {
                    let subject = DecaySubject::new(entity, position, ownership);
                    react_to_world_change(&mut ctx, subject, &mut decay, &mut changes, &mut commands);
                }
            }
            TerritoryNotification::PositionChanged { entity } => {
                if let Ok((entity, mut decay, position, ownership, _)) = decays.get_mut(entity) {
                    let subject = DecaySubject::new(entity, position, ownership);
                    react_to_world_change(&mut ctx, subject, &mut decay, &mut changes, &mut commands);
                }
            }
            TerritoryNotification::DiplomacyChanged { .. } => {
                for (entity, mut decay, position, ownership, _) in &mut decays {
                    if decay.has_territory_ownership() {
                        continue;
                    }
                    let subject = DecaySubject::new(entity, position, ownership);
                    if let Some(change) = update_decay_state(&mut ctx, subject, &mut decay) {
                        changes.write(change);
                    }
                }
            }
            TerritoryNotification::OwnershipChanged { entity, from, to } => {
                let Ok((entity, mut decay, position, ownership, influences)) = decays.get_mut(entity)
                else {
                    // Destroyed before we got here
                    if to == PlayerId::INVALID {
                        manager.remove(entity);
                    }
                    continue;
                };

                if from == PlayerId::INVALID {
                    manager.add(entity);
                } else if to == PlayerId::INVALID {
                    manager.remove(entity);
                }

                // Influence entities get a TerritoriesChanged right after this
                if decay.has_territory_ownership() || influences {
                    continue;
                }
                let subject = DecaySubject::new(entity, position, ownership);
                if let Some(change) = update_decay_state(&mut ctx, subject, &mut decay) {
                    changes.write(change);
                }
            }
        }
    }
}

fn react_to_world_change(
    ctx: &mut DecayCtx,
    subject: DecaySubject,
    decay: &mut TerritoryDecay,
    changes: &mut MessageWriter<TerritoryDecayChanged>,
    commands: &mut MessageWriter<TerritoryCommand>,
) {
    if decay.has_territory_ownership() {
        if let Some(command) = update_owner(ctx.map, subject) {
            commands.write(command);
        }
    } else if let Some(change) = update_decay_state(ctx, subject, decay) {
        changes.write(change);
    }
}

fn record_decay_changes(
    mut changes: MessageReader<TerritoryDecayChanged>,
    clock: Res<DecayClock>,
    mut log: ResMut<DecayLog>,
) {
    for change in changes.read() {
        log.records.push(DecayRecord {
            tick: clock.tick_count,
            entity: change.entity.to_bits(),
            decaying: change.to,
            rate: change.rate,
        });
    }
}
