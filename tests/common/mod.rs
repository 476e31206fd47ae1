#![allow(dead_code)]

use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use territory_decay::ecs::*;
use territory_decay::model::*;

pub const P1: PlayerId = PlayerId(1);
pub const P2: PlayerId = PlayerId(2);
pub const P3: PlayerId = PlayerId(3);

/// 8x1 strip, 4 world units per tile, gaia plus three players:
///
/// ```text
/// tile:   0    1    2     3    4    5    6    7
/// owner:  P1*  P1   gaia  P2*  P1   P3*  P2   gaia      (* = root)
/// ```
///
/// Tile 4 is an unconnected P1 island between P2 and P3; tile 6 an
/// unconnected P2 island.
pub fn strip_map() -> TerritoryMap {
    let mut map = TerritoryMap::new(8, 1, 4.0);
    map.fill_owner((0, 0), (1, 0), P1);
    map.set_tile_owner(3, 0, P2);
    map.set_tile_owner(4, 0, P1);
    map.set_tile_owner(5, 0, P3);
    map.set_tile_owner(6, 0, P2);
    for root in [0, 3, 5] {
        map.set_root(root, 0, true);
    }
    map.recompute_connectivity();
    map
}

/// World-space centre of strip tile `tile_x`.
pub fn tile(tile_x: usize) -> (f64, f64) {
    (tile_x as f64 * 4.0 + 2.0, 2.0)
}

/// App with the strip map, four players, and TerritoryDecay installed.
pub fn strip_app() -> App {
    decay_app(strip_map(), PlayerRegistry::new(4))
}

pub fn decay_app(map: TerritoryMap, players: PlayerRegistry) -> App {
    let mut app = build_decay_app(map, players);
    app.add_plugins(TerritoryDecayPlugin);
    app
}

pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(DecayTick);
    }
}

pub fn send(app: &mut App, command: TerritoryCommand) {
    app.world_mut()
        .resource_mut::<Messages<TerritoryCommand>>()
        .write(command);
}

/// Both sides declare each other allies.
pub fn ally(app: &mut App, a: PlayerId, b: PlayerId) {
    send(app, TerritoryCommand::SetAlly { player: a, other: b, allied: true });
    send(app, TerritoryCommand::SetAlly { player: b, other: a, allied: true });
}

pub fn spawn(
    app: &mut App,
    template: TerritoryDecayTemplate,
    at: Option<(f64, f64)>,
    owner: PlayerId,
) -> Entity {
    spawn_territory_entity(app.world_mut(), template, at, owner)
}

/// Run one tick and return the decay transitions published during it.
pub fn tick_decay_changes(app: &mut App) -> Vec<TerritoryDecayChanged> {
    app.world_mut().run_schedule(DecayTick);
    app.world()
        .resource::<Messages<TerritoryDecayChanged>>()
        .iter_current_update_messages()
        .cloned()
        .collect()
}

/// Run one tick and return the notifications emitted during it.
pub fn tick_notifications(app: &mut App) -> Vec<TerritoryNotification> {
    app.world_mut().run_schedule(DecayTick);
    app.world()
        .resource::<Messages<TerritoryNotification>>()
        .iter_current_update_messages()
        .cloned()
        .collect()
}

pub fn is_decaying(app: &App, entity: Entity) -> bool {
    app.world()
        .get::<TerritoryDecay>(entity)
        .is_some_and(TerritoryDecay::is_decaying)
}

pub fn owner_of(app: &App, entity: Entity) -> PlayerId {
    app.world()
        .get::<Ownership>(entity)
        .map_or(PlayerId::INVALID, |o| o.owner)
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
