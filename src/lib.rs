pub mod ecs;
pub mod flush;
pub mod model;

pub use model::{DecayRate, PlayerId, TemplateSet, TerritoryDecayTemplate, TerritoryKind};
