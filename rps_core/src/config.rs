use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub min_players: usize,
    pub max_players: usize,
    /// Player count suggested at setup and restored on reset.
    pub default_players: usize,
    pub countdown_from: u8,
    pub tick: Duration,
    /// Names for the seats in order; unnamed seats get a default name.
    pub player_names: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_players: 2,
            max_players: 10,
            default_players: 2,
            countdown_from: 3,
            tick: Duration::from_secs(1),
            player_names: vec![],
        }
    }
}

impl GameConfig {
    pub fn accepts_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}
