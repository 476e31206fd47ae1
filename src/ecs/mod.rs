pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod events;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::{build_decay_app, build_decay_app_with_config, build_decay_app_with_executor};
pub use clock::DecayClock;
pub use commands::TerritoryCommand;
pub use components::{Ownership, Position, TerritoryDecay, TerritoryInfluence};
pub use events::{TerritoryDecayChanged, TerritoryNotification};
pub use resources::{
    DECAY_RATE_KEY, DecayConfig, DecayLog, DecayRecord, Diplomacy, NeutralFilter, PlayerRegistry,
    TERRITORY_FILTER_KEY, TerritoryDecayManager, TerritoryMap, ValueModifiers,
};
pub use schedule::{DecayPhase, DecayTick, configure_decay_schedule};
pub use spawn::spawn_territory_entity;
pub use systems::TerritoryDecayPlugin;
