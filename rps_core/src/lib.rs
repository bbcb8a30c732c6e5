use config::GameConfig;
use error::GameError;
use game::Game;
use view::View;

pub mod choice;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod game_state;
pub mod player;
pub mod resolver;
pub mod view;

/// Plays rounds until the view quits, then hands the view back.
pub fn run_game<V>(view: V, config: GameConfig) -> Result<V, GameError>
where
    V: View,
{
    let mut game = Game::new(view, config);
    game.run()?;
    Ok(game.into_view())
}
