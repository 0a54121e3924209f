use crate::data_fetcher::models::Player;
use std::collections::HashMap;

/// Players of the league with an id index, used to resolve which team a
/// score entry belongs to.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Builds the roster. When ids repeat, lookups resolve to the first player.
    pub fn new(players: Vec<Player>) -> Self {
        let mut index = HashMap::with_capacity(players.len());
        for (position, player) in players.iter().enumerate() {
            index.entry(player.id().to_string()).or_insert(position);
        }
        Self { players, index }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.index.get(player_id).map(|&position| &self.players[position])
    }

    /// Team id of a rostered player.
    pub fn team_of(&self, player_id: &str) -> Option<&str> {
        self.get(player_id).and_then(Player::team_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
