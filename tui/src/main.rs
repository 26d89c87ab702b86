mod args;
mod cli;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use lifegame_lib::{Error as GameError, PatternSet};
use log::warn;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());

    let patterns = match PatternSet::load_default(&args.patterns) {
        Ok(patterns) => patterns,
        Err(GameError::PatternDirError(dir)) => {
            warn!("Pattern directory {} not found, starting without patterns", dir);
            PatternSet::new()
        }
        Err(e) => return Err(e.into()),
    };
    let mut game = args.config.game(patterns)?;
    if let Some(index) = args.pattern {
        if !game.set_pattern(index) {
            warn!("Unable to stamp pattern {}, starting from a random board", index);
        }
    }

    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            tui::run(game, args.interval)?;
            return Ok(());
        }
    }

    cli::run(game, &args);
    Ok(())
}
