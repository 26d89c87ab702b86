//! __Lifegame__ is a fast, multi-threaded implementation of
//! [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a fixed-size board without wraparound.
//!
//! The board is stored as packed bits. Each generation is computed into a
//! second board by several worker threads, each responsible for its own rows,
//! and only the region that may contain living cells is scanned.
//!
//! # Example
//!
//! ```rust
//! use lifegame_lib::{Config, PatternDefinition, PatternSet, Point};
//!
//! let blinker = PatternDefinition::from_plaintext("blinker", "...\n***\n...\n");
//! let config = Config::new(8, 3).set_workers(Some(2)).set_seed(Some(42));
//! let mut game = config.game(PatternSet::from(vec![blinker]))?;
//!
//! assert!(game.set_pattern(0));
//! game.next();
//! assert!(game.get(Point::new(3, 0)));
//! assert!(game.get(Point::new(3, 2)));
//! assert_eq!(game.population(), 3);
//! # Ok::<(), lifegame_lib::Error>(())
//! ```

mod config;
mod double_buffer;
mod error;
mod game;
mod geom;
mod grid;
mod pattern;
pub mod region;
pub mod rule;
mod stamp;
mod stepper;
mod surface;

pub use config::Config;
pub use double_buffer::DoubleBuffer;
pub use error::Error;
pub use game::Game;
pub use geom::{Point, Rect, Size};
pub use grid::{BitGrid, UNIT_BITS};
pub use pattern::{PatternDefinition, PatternSet, PATTERN_EXTENSIONS};
pub use stepper::{available_workers, Stepper};
pub use surface::Surface;
