#[macro_use]
mod macros;

pub mod player;
pub mod template;

pub use player::PlayerId;
pub use template::{DecayRate, TemplateSet, TerritoryDecayTemplate, TerritoryKind};
