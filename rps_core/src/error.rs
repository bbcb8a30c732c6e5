use thiserror::Error;

use crate::{game_state::Screen, player::PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{count} players cannot play, a game needs between {min} and {max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("there is no player {0}")]
    UnknownPlayer(PlayerId),
    #[error("player {0} has already chosen")]
    AlreadyChosen(PlayerId),
    #[error("players {0:?} have not chosen yet")]
    ChoicesPending(Vec<PlayerId>),
    #[error("expected the {expected} screen but the game is on the {actual} screen")]
    WrongScreen { expected: Screen, actual: Screen },
}
