//! Running the game without the TUI.

use crate::args::Args;
use lifegame_lib::Game;
use log::info;
use std::time::Instant;

/// Widest board that is printed after the run.
const MAX_PRINT_WIDTH: i32 = 80;

/// Runs the configured number of generations and prints the timing and the
/// final board.
pub(crate) fn run(mut game: Game, args: &Args) {
    info!(
        "Running {} generations on a {}x{} board with {} worker(s)",
        args.generations,
        game.size().width,
        game.size().height,
        game.workers()
    );
    let start = Instant::now();
    game.advance(args.generations);
    let elapsed = start.elapsed();

    println!("({:.3}s.)", elapsed.as_secs_f64());
    println!(
        "Generation: {}  Population: {}",
        game.generation(),
        game.population()
    );
    if game.size().width <= MAX_PRINT_WIDTH {
        print!("{}", game.board().plaintext());
    }
}
