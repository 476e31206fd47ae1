pub mod config;
pub mod decay_log;
pub mod decay_manager;
pub mod modifiers;
pub mod players;
pub mod territory_map;

pub use config::{DecayConfig, NeutralFilter};
pub use decay_log::{DecayLog, DecayRecord};
pub use decay_manager::TerritoryDecayManager;
pub use modifiers::{DECAY_RATE_KEY, TERRITORY_FILTER_KEY, ValueModifiers};
pub use players::{Diplomacy, PlayerRegistry};
pub use territory_map::TerritoryMap;
