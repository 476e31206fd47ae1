use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::model::TerritoryKind;

/// Modification key for the configured decay rate.
pub const DECAY_RATE_KEY: &str = "TerritoryDecay/DecayRate";
/// Modification key for the territory filter list.
pub const TERRITORY_FILTER_KEY: &str = "TerritoryDecay/Territory";

/// Injected modification function: `(key, base value, entity) -> effective value`.
pub type Modifier<T> = Box<dyn Fn(&str, T, Entity) -> T + Send + Sync>;

/// Runtime value-modification pipeline (technologies, auras, buffs).
///
/// Modifiers are applied in registration order, each receiving the previous
/// output. With nothing registered the base value passes through unchanged.
#[derive(Resource, Default)]
pub struct ValueModifiers {
    numeric: Vec<Modifier<f64>>,
    territory: Vec<Modifier<Vec<TerritoryKind>>>,
}

impl ValueModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_numeric(
        &mut self,
        modifier: impl Fn(&str, f64, Entity) -> f64 + Send + Sync + 'static,
    ) {
        self.numeric.push(Box::new(modifier));
    }

    pub fn add_territory(
        &mut self,
        modifier: impl Fn(&str, Vec<TerritoryKind>, Entity) -> Vec<TerritoryKind>
            + Send
            + Sync
            + 'static,
    ) {
        self.territory.push(Box::new(modifier));
    }

    pub fn apply_numeric(&self, key: &str, base: f64, entity: Entity) -> f64 {
        self.numeric.iter().fold(base, |value, m| m(key, value, entity))
    }

    pub fn apply_territory(
        &self,
        key: &str,
        base: Vec<TerritoryKind>,
        entity: Entity,
    ) -> Vec<TerritoryKind> {
        self.territory.iter().fold(base, |value, m| m(key, value, entity))
    }
}

impl std::fmt::Debug for ValueModifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueModifiers")
            .field("numeric", &self.numeric.len())
            .field("territory", &self.territory.len())
            .finish()
    }
}
