use crate::{
    choice::Choice,
    config::GameConfig,
    error::GameError,
    event::Event,
    player::Player,
    resolver::{RoundResult, Verdict},
};

/// Render boundary between the game and whatever draws the shared screen.
/// Returning `None` from a prompt quits the game.
pub trait View {
    fn obtain_player_count(&mut self, config: &GameConfig) -> Option<usize>;

    fn obtain_choice(&mut self, player: &Player, players: &[Player]) -> Option<Choice>;

    fn notify(&mut self, game_log: &[Event], players: &[Player]);

    fn show_countdown(&mut self, remaining: u8);

    fn show_results(&mut self, results: &[RoundResult], verdict: &Verdict);

    fn show_error(&mut self, error: &GameError);

    fn obtain_play_again(&mut self) -> bool;
}
