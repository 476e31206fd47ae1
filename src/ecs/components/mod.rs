pub mod common;
pub mod decay;

pub use common::{Ownership, Position, TerritoryInfluence};
pub use decay::TerritoryDecay;
