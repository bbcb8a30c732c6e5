use std::thread;

use crate::{
    config::GameConfig,
    error::GameError,
    event::filter_events,
    game_state::GameState,
    resolver::{RoundResult, Verdict},
    view::View,
};

#[derive(Debug, PartialEq)]
pub enum RoundStatus {
    Finished(Vec<RoundResult>),
    Quit,
}

pub struct Game<V: View> {
    view: V,
    config: GameConfig,
}

impl<V: View> Game<V> {
    pub fn new(view: V, config: GameConfig) -> Self {
        Game { view, config }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Runs setup, selection, countdown and reveal once. The state of the
    /// round lives only as long as this call.
    pub fn play_round(&mut self) -> Result<RoundStatus, GameError> {
        let mut state = loop {
            let Some(count) = self.view.obtain_player_count(&self.config) else {
                return Ok(RoundStatus::Quit);
            };
            match GameState::new(count, &self.config) {
                Ok(state) => break state,
                Err(e) => self.view.show_error(&e),
            }
        };
        self.view
            .notify(&filter_events(state.log(), None), state.players());

        while !state.all_selected() {
            for id in state.pending_players() {
                let choice = match state.player(id) {
                    Some(player) => self.view.obtain_choice(player, state.players()),
                    None => return Err(GameError::UnknownPlayer(id)),
                };
                let Some(choice) = choice else {
                    log::info!("player {id} quit during selection");
                    return Ok(RoundStatus::Quit);
                };
                state.select_choice(id, choice)?;
                self.view
                    .notify(&filter_events(state.log(), None), state.players());
            }
        }

        for remaining in state.start_countdown()? {
            state.tick(remaining)?;
            self.view.show_countdown(remaining);
            if !self.config.tick.is_zero() {
                thread::sleep(self.config.tick);
            }
        }

        let results = state.reveal()?;
        let verdict = Verdict::from_results(&results);
        self.view
            .notify(&filter_events(state.log(), None), state.players());
        self.view.show_results(&results, &verdict);
        Ok(RoundStatus::Finished(results))
    }

    pub fn run(&mut self) -> Result<(), GameError> {
        loop {
            match self.play_round()? {
                RoundStatus::Quit => break,
                RoundStatus::Finished(_) => {
                    if !self.view.obtain_play_again() {
                        break;
                    }
                    log::info!("resetting for a new round");
                }
            }
        }
        Ok(())
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
