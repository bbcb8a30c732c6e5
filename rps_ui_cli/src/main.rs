use std::{io, time::Duration};

use anyhow::{bail, Context};
use clap::Parser;
use cli_view::CliView;
use rps_core::{config::GameConfig, run_game};

mod cli_view;

/// Rock · Paper · Scissors for 2 to 10 players sharing one terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Skip the setup prompt and always seat this many players
    #[arg(short, long)]
    players: Option<usize>,
    /// Number the countdown starts from
    #[arg(long, default_value_t = 3)]
    countdown: u8,
    /// Length of one countdown tick in milliseconds
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,
    /// Player name, repeat once per seat
    #[arg(short, long = "name")]
    names: Vec<String>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            countdown_from: self.countdown,
            tick: Duration::from_millis(self.tick_ms),
            player_names: self.names.clone(),
            ..GameConfig::default()
        }
    }

    fn validate(&self, config: &GameConfig) -> anyhow::Result<()> {
        if let Some(count) = self.players {
            if !config.accepts_player_count(count) {
                bail!(
                    "--players must be between {} and {}",
                    config.min_players,
                    config.max_players
                );
            }
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    args.validate(&config)?;
    log::info!("starting with {:?}", config);

    let view = run_game(CliView::new(io::stdin().lock(), args.players), config)
        .context("game aborted")?;
    if let Some(e) = view.into_io_error() {
        return Err(e).context("failed to read from the terminal");
    }
    Ok(())
}
