use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{
    choice::Choice,
    config::GameConfig,
    error::GameError,
    event::{Event, EventEntry, EventVisibility},
    player::{Player, PlayerId},
    resolver::{resolve, RoundResult, Verdict},
};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, Serialize, Deserialize)]
pub enum Screen {
    PlayerSelection,
    Countdown,
    Result,
}

/// Descending countdown, yielding `from` down to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    remaining: u8,
}

impl Countdown {
    pub fn new(from: u8) -> Self {
        Countdown { remaining: from }
    }
}

impl Iterator for Countdown {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.remaining;
        self.remaining -= 1;
        Some(current)
    }
}

/// State of a single round. A new value is built for every round and
/// dropped on reset.
pub struct GameState {
    players: Vec<Player>,
    screen: Screen,
    log: Vec<EventEntry>,
    countdown_from: u8,
}

impl GameState {
    pub fn new(player_count: usize, config: &GameConfig) -> Result<Self, GameError> {
        GameState::with_names(player_count, &config.player_names, config)
    }

    /// Seats `player_count` players. Missing or blank names fall back to the
    /// default name of the seat.
    pub fn with_names(
        player_count: usize,
        names: &[String],
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        if !config.accepts_player_count(player_count) {
            log::warn!("rejected player count {player_count}");
            return Err(GameError::InvalidPlayerCount {
                count: player_count,
                min: config.min_players,
                max: config.max_players,
            });
        }
        let players = (1..=player_count)
            .map(|id| match names.get(id - 1).map(|n| n.trim()) {
                Some(name) if !name.is_empty() => Player::new(id, name.to_string()),
                _ => Player::with_default_name(id),
            })
            .collect();
        log::info!("seated {player_count} players");
        Ok(GameState {
            players,
            screen: Screen::PlayerSelection,
            log: vec![EventEntry::public(Event::Seated(player_count))],
            countdown_from: config.countdown_from,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn log(&self) -> &[EventEntry] {
        &self.log
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn select_choice(&mut self, player_id: PlayerId, choice: Choice) -> Result<(), GameError> {
        self.expect_screen(Screen::PlayerSelection)?;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(GameError::UnknownPlayer(player_id))?;
        if player.has_chosen() {
            log::warn!("player {player_id} tried to choose twice");
            return Err(GameError::AlreadyChosen(player_id));
        }
        player.set_choice(choice);
        log::debug!("player {player_id} locked in a choice");
        self.log.push(EventEntry::private(
            player_id,
            Event::ChoiceLocked(player_id, Some(choice)),
        ));
        Ok(())
    }

    pub fn all_selected(&self) -> bool {
        self.players.iter().all(|p| p.has_chosen())
    }

    pub fn pending_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !p.has_chosen())
            .map(|p| p.id)
            .collect()
    }

    pub fn start_countdown(&mut self) -> Result<Countdown, GameError> {
        self.expect_screen(Screen::PlayerSelection)?;
        let pending = self.pending_players();
        if !pending.is_empty() {
            return Err(GameError::ChoicesPending(pending));
        }
        self.screen = Screen::Countdown;
        Ok(Countdown::new(self.countdown_from))
    }

    pub fn tick(&mut self, remaining: u8) -> Result<(), GameError> {
        self.expect_screen(Screen::Countdown)?;
        log::debug!("countdown {remaining}");
        self.log
            .push(EventEntry::public(Event::CountdownTick(remaining)));
        Ok(())
    }

    pub fn reveal(&mut self) -> Result<Vec<RoundResult>, GameError> {
        self.expect_screen(Screen::Countdown)?;
        let picks: Vec<(PlayerId, Choice)> = self
            .players
            .iter()
            .filter_map(|p| p.choice().map(|c| (p.id, c)))
            .collect();
        let results: Vec<RoundResult> = resolve(&picks)
            .into_iter()
            .zip(self.players.iter())
            .map(|(resolution, player)| RoundResult {
                player_id: resolution.player_id,
                name: player.name.clone(),
                choice: resolution.choice,
                outcome: resolution.outcome,
            })
            .collect();
        let verdict = Verdict::from_results(&results);
        log::info!("round revealed, {verdict:?}");

        self.log
            .push(EventEntry::public(Event::Revealed(results.clone())));
        self.log
            .push(EventEntry::public(Event::Winner(verdict.winners())));
        for e in self.log.iter_mut() {
            e.visibility = EventVisibility::Public;
        }
        self.screen = Screen::Result;
        Ok(results)
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), GameError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(GameError::WrongScreen {
                expected,
                actual: self.screen,
            })
        }
    }
}
