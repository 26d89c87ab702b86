//! Game configuration.

use crate::{
    error::Error,
    game::Game,
    geom::Size,
    grid::UNIT_BITS,
    pattern::PatternSet,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game configuration.
///
/// The game will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width. Must be a multiple of 8.
    #[educe(Default = 400)]
    pub width: i32,

    /// Height.
    #[educe(Default = 400)]
    pub height: i32,

    /// Number of worker threads used to compute a generation.
    ///
    /// `None` means one worker per hardware thread.
    /// `Some(1)` (or `Some(0)`) computes generations on the calling thread.
    pub workers: Option<usize>,

    /// Whether to track the region containing the living cells,
    /// so that only this region is scanned in each generation.
    ///
    /// This never changes the result, only the speed.
    #[educe(Default = true)]
    pub track_region: bool,

    /// Seed of the random number generator used to fill the board.
    ///
    /// `None` means a seed from the operating system.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the number of workers.
    pub fn set_workers<T: Into<Option<usize>>>(mut self, workers: T) -> Self {
        self.workers = workers.into();
        self
    }

    /// Sets whether to track the live region.
    pub fn set_track_region(mut self, track_region: bool) -> Self {
        self.track_region = track_region;
        self
    }

    /// Sets the random seed.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Width and height as a board size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks the board size.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        if self.width % UNIT_BITS != 0 {
            return Err(Error::UnalignedWidthError(self.width));
        }
        Ok(())
    }

    /// Creates a new game from the configuration and a set of patterns.
    ///
    /// Returns an error if the board size is invalid.
    pub fn game(&self, patterns: PatternSet) -> Result<Game, Error> {
        self.validate()?;
        Ok(Game::new(self, patterns))
    }
}
