use serde::{Deserialize, Serialize};

use crate::choice::Choice;

/// Seat number of a player, starting at 1.
pub type PlayerId = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    choice: Option<Choice>,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Player {
            id,
            name,
            choice: None,
        }
    }

    pub fn with_default_name(id: PlayerId) -> Self {
        Player::new(id, default_name(id))
    }

    pub fn choice(&self) -> Option<Choice> {
        self.choice
    }

    pub fn has_chosen(&self) -> bool {
        self.choice.is_some()
    }

    pub(crate) fn set_choice(&mut self, choice: Choice) {
        self.choice = Some(choice);
    }
}

pub fn default_name(id: PlayerId) -> String {
    format!("Player {id}")
}
