use bevy_ecs::component::Component;

use crate::model::{PlayerId, TerritoryDecayTemplate};

/// Per-entity territory decay state.
///
/// Either a conventional decaying asset, or (when the template's rate is the
/// infinite sentinel) a territory-owned entity whose owner follows the tile it
/// stands on. The mode is fixed at construction.
#[derive(Component, Debug, Clone)]
pub struct TerritoryDecay {
    template: TerritoryDecayTemplate,
    territory_ownership: bool,
    pub(crate) decaying: bool,
    connected_neighbours: Vec<bool>,
}

impl TerritoryDecay {
    pub fn new(template: TerritoryDecayTemplate, num_players: usize) -> Self {
        let territory_ownership = template.decay_rate.is_some_and(|rate| rate.is_infinite());
        Self {
            template,
            territory_ownership,
            decaying: false,
            connected_neighbours: vec![false; num_players],
        }
    }

    pub fn template(&self) -> &TerritoryDecayTemplate {
        &self.template
    }

    pub fn is_decaying(&self) -> bool {
        self.decaying
    }

    pub fn has_territory_ownership(&self) -> bool {
        self.territory_ownership
    }

    /// Players whose territory pulls this entity away, indexed by player id.
    /// Only meaningful while decaying.
    pub fn connected_neighbours(&self) -> &[bool] {
        &self.connected_neighbours
    }

    pub(crate) fn reset_neighbours(&mut self, num_players: usize) {
        self.connected_neighbours.clear();
        self.connected_neighbours.resize(num_players, false);
    }

    pub(crate) fn mark_neighbour(&mut self, player: PlayerId) {
        if let Some(slot) = player.index().and_then(|i| self.connected_neighbours.get_mut(i)) {
            *slot = true;
        }
    }

    pub(crate) fn set_neighbours(&mut self, counts: &[u32]) {
        for (slot, &count) in self.connected_neighbours.iter_mut().zip(counts) {
            *slot = count > 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DecayRate;

    #[test]
    fn infinite_rate_selects_ownership_mode() {
        let decay = TerritoryDecay::new(TerritoryDecayTemplate::territory_owned(), 3);
        assert!(decay.has_territory_ownership());
        assert!(!decay.is_decaying());
    }

    #[test]
    fn finite_or_missing_rate_is_decay_mode() {
        assert!(!TerritoryDecay::new(TerritoryDecayTemplate::decaying(2.0), 3).has_territory_ownership());
        assert!(!TerritoryDecay::new(TerritoryDecayTemplate::default(), 3).has_territory_ownership());
        let zero = TerritoryDecayTemplate {
            decay_rate: Some(DecayRate::Finite(0.0)),
            territory: None,
        };
        assert!(!TerritoryDecay::new(zero, 3).has_territory_ownership());
    }

    #[test]
    fn neighbours_sized_and_reset_to_player_count() {
        let mut decay = TerritoryDecay::new(TerritoryDecayTemplate::decaying(1.0), 2);
        assert_eq!(decay.connected_neighbours(), &[false, false]);
        decay.mark_neighbour(PlayerId(1));
        assert_eq!(decay.connected_neighbours(), &[false, true]);
        decay.reset_neighbours(4);
        assert_eq!(decay.connected_neighbours(), &[false; 4]);
    }

    #[test]
    fn out_of_range_neighbour_ignored() {
        let mut decay = TerritoryDecay::new(TerritoryDecayTemplate::decaying(1.0), 2);
        decay.mark_neighbour(PlayerId(5));
        decay.mark_neighbour(PlayerId::INVALID);
        assert_eq!(decay.connected_neighbours(), &[false, false]);
    }

    #[test]
    fn set_neighbours_flags_nonzero_counts() {
        let mut decay = TerritoryDecay::new(TerritoryDecayTemplate::decaying(1.0), 3);
        decay.set_neighbours(&[0, 4, 1]);
        assert_eq!(decay.connected_neighbours(), &[false, true, true]);
    }
}
