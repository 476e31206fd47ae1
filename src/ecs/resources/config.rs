use bevy_ecs::resource::Resource;

/// How the neutral-territory entry of a territory filter is interpreted when
/// an owned entity stands on gaia territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeutralFilter {
    /// Listing `neutral` exempts the entity from decay on gaia territory,
    /// the same way listing `enemy` exempts it on connected enemy territory.
    #[default]
    Membership,
    /// Legacy rule: exempt only when `neutral` sits at index 1 of the
    /// resolved filter list. A filter of just `["neutral"]` therefore still
    /// decays.
    Positional,
}

/// Simulation-wide TerritoryDecay settings.
#[derive(Resource, Debug, Clone, Default)]
pub struct DecayConfig {
    pub neutral_filter: NeutralFilter,
}
