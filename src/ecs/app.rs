use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::DecayClock;
use super::commands::{TerritoryCommand, apply_territory_commands};
use super::events::{TerritoryDecayChanged, TerritoryNotification};
use super::resources::{
    DecayConfig, DecayLog, PlayerRegistry, TerritoryDecayManager, TerritoryMap, ValueModifiers,
};
use super::schedule::{DecayPhase, configure_decay_schedule};

/// Build a headless Bevy app with the territory map, player registry, core
/// resources, message types, and the command applicator.
///
/// TerritoryDecay itself is installed separately via `TerritoryDecayPlugin`.
///
/// Manual tick control:
/// ```no_run
/// # use territory_decay::ecs::{build_decay_app, DecayTick, TerritoryDecayPlugin, TerritoryMap, PlayerRegistry};
/// let mut app = build_decay_app(TerritoryMap::new(64, 64, 4.0), PlayerRegistry::new(3));
/// app.add_plugins(TerritoryDecayPlugin);
/// for _ in 0..10 {
///     app.world_mut().run_schedule(DecayTick);
/// }
/// ```
pub fn build_decay_app(map: TerritoryMap, players: PlayerRegistry) -> App {
    build_decay_app_with_config(map, players, DecayConfig::default())
}

/// Build a headless Bevy app with explicit `DecayConfig`.
pub fn build_decay_app_with_config(
    map: TerritoryMap,
    players: PlayerRegistry,
    config: DecayConfig,
) -> App {
    build_decay_app_with_executor(map, players, config, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_decay_app_with_executor(
    map: TerritoryMap,
    players: PlayerRegistry,
    config: DecayConfig,
    executor: ExecutorKind,
) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(map);
    app.insert_resource(players);
    app.insert_resource(config);
    app.insert_resource(DecayClock::new());
    app.insert_resource(DecayLog::new());
    app.insert_resource(TerritoryDecayManager::new());
    app.insert_resource(ValueModifiers::new());

    // Register message types
    MessageRegistry::register_message::<TerritoryCommand>(app.world_mut());
    MessageRegistry::register_message::<TerritoryNotification>(app.world_mut());
    MessageRegistry::register_message::<TerritoryDecayChanged>(app.world_mut());

    // Build schedule with message rotation + applicator
    let mut schedule = configure_decay_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(DecayPhase::PreUpdate));
    schedule.add_systems(apply_territory_commands.in_set(DecayPhase::PostUpdate));
    app.add_schedule(schedule);
    app
}
