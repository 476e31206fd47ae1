pub mod decay;

pub use decay::{
    DecayCtx, DecaySubject, TerritoryDecayPlugin, add_territory_decay_systems, decay_rate,
    is_connected, update_decay_state, update_owner,
};
