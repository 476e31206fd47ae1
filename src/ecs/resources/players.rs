use std::collections::BTreeSet;

use bevy_ecs::resource::Resource;

use crate::model::PlayerId;

/// A player's diplomacy record: the players it considers allies.
///
/// Alliance is one-directional here; `PlayerRegistry::is_mutual_ally` requires
/// both sides to agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diplomacy {
    allies: BTreeSet<PlayerId>,
}

impl Diplomacy {
    pub fn is_ally(&self, other: PlayerId) -> bool {
        self.allies.contains(&other)
    }
}

/// Registry of players indexed by `PlayerId`, player 0 being gaia.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Option<Diplomacy>>,
}

impl PlayerRegistry {
    /// `num_players` players (gaia included), each with an empty diplomacy record.
    pub fn new(num_players: usize) -> Self {
        Self {
            players: vec![Some(Diplomacy::default()); num_players],
        }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        player.index().is_some_and(|i| i < self.players.len())
    }

    pub fn add_player(&mut self) -> PlayerId {
        self.players.push(Some(Diplomacy::default()));
        PlayerId::from_index(self.players.len() - 1)
    }

    /// Add a player that has no diplomacy record (e.g. an observer slot).
    pub fn add_player_without_diplomacy(&mut self) -> PlayerId {
        self.players.push(None);
        PlayerId::from_index(self.players.len() - 1)
    }

    pub fn diplomacy(&self, player: PlayerId) -> Option<&Diplomacy> {
        player.index().and_then(|i| self.players.get(i)).and_then(Option::as_ref)
    }

    pub fn has_diplomacy(&self, player: PlayerId) -> bool {
        self.diplomacy(player).is_some()
    }

    /// Set `player`'s view of `other`. Returns false if `player` has no
    /// diplomacy record or either id is unknown.
    pub fn set_ally(&mut self, player: PlayerId, other: PlayerId, allied: bool) -> bool {
        if !self.contains(other) {
            return false;
        }
        let Some(diplomacy) = player
            .index()
            .and_then(|i| self.players.get_mut(i))
            .and_then(Option::as_mut)
        else {
            return false;
        };
        if allied {
            diplomacy.allies.insert(other);
        } else {
            diplomacy.allies.remove(&other);
        }
        true
    }

    /// A player counts as its own ally; gaia is nobody's ally but its own.
    pub fn is_ally(&self, player: PlayerId, other: PlayerId) -> bool {
        match self.diplomacy(player) {
            Some(_) if player == other => true,
            Some(diplomacy) => !other.is_gaia() && diplomacy.is_ally(other),
            None => false,
        }
    }

    pub fn is_mutual_ally(&self, a: PlayerId, b: PlayerId) -> bool {
        self.is_ally(a, b) && self.is_ally(b, a)
    }
}
