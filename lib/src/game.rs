//! The game.

use crate::{
    config::Config,
    double_buffer::DoubleBuffer,
    geom::{Point, Rect, Size},
    grid::BitGrid,
    pattern::{PatternDefinition, PatternSet},
    stepper::Stepper,
    surface::Surface,
};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

/// The game.
///
/// Owns two boards of the same size. Each generation is computed from the
/// current board into the other one, then the two swap roles; the boards
/// themselves are never copied.
#[derive(Debug)]
pub struct Game {
    /// The current board and the board the next generation is written to.
    boards: DoubleBuffer<BitGrid>,

    /// Number of generations since construction or the last reset.
    generation: u64,

    /// Index of the stamped pattern. `None` means a random board.
    pattern_index: Option<usize>,

    /// Patterns available to [`set_pattern`](Self::set_pattern).
    patterns: PatternSet,

    /// Computes the generations.
    stepper: Stepper,

    /// Fills the board on construction and on [`reset`](Self::reset).
    rng: StdRng,
}

impl Game {
    /// Creates a new game with a random board.
    ///
    /// # Panics
    ///
    /// Panics if the size in the configuration is invalid.
    /// Use [`Config::game`] to get an error instead.
    pub fn new(config: &Config, patterns: PatternSet) -> Self {
        let size = config.size();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Game {
            boards: DoubleBuffer::new(
                BitGrid::new(size, config.track_region),
                BitGrid::new(size, config.track_region),
            ),
            generation: 0,
            pattern_index: None,
            patterns,
            stepper: Stepper::new(config.workers),
            rng,
        };
        game.boards.current_mut().randomize(&mut game.rng);
        debug!(
            "New {}x{} game, {} pattern(s), {:?}",
            size.width,
            size.height,
            game.patterns.len(),
            game.stepper
        );
        game
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &BitGrid {
        self.boards.current()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.board().size()
    }

    /// Number of generations since construction or the last reset.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of the stamped pattern, or `None` for a random board.
    #[inline]
    pub fn pattern_index(&self) -> Option<usize> {
        self.pattern_index
    }

    /// The stamped pattern, or `None` for a random board.
    pub fn pattern(&self) -> Option<&PatternDefinition> {
        self.pattern_index.and_then(|i| self.patterns.get(i))
    }

    #[inline]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    #[inline]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of worker threads.
    #[inline]
    pub fn workers(&self) -> usize {
        self.stepper.workers()
    }

    /// Number of living cells on the current board.
    pub fn population(&self) -> usize {
        self.board().live_count()
    }

    /// Whether the cell is alive on the current board.
    #[inline]
    pub fn get(&self, point: Point) -> bool {
        self.board().get(point)
    }

    /// Sets a cell on the current board. Does nothing outside the board.
    pub fn set(&mut self, point: Point, alive: bool) {
        self.boards.current_mut().set(point, alive);
    }

    /// Kills every cell on both boards.
    pub fn clear(&mut self) {
        let (main, sub) = self.boards.both_mut();
        main.clear();
        sub.clear();
    }

    /// Computes the next generation.
    ///
    /// With live-region tracking, only the union of both boards' regions is
    /// scanned: the current region holds every cell that can be alive next,
    /// and the other region holds every stale cell that must be overwritten.
    pub fn next(&mut self) {
        let (main, sub) = self.boards.split_mut();
        let scan = match (main.region(), sub.region()) {
            (Some(main_region), Some(sub_region)) => main_region.union(&sub_region),
            (Some(region), None) | (None, Some(region)) => region,
            (None, None) => main.bounds(),
        };
        self.stepper.step(main, sub, scan);
        self.boards.swap_roles();
        self.generation += 1;
    }

    /// Computes `n` generations.
    pub fn advance(&mut self, n: u64) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Resets the game.
    ///
    /// With `randomize`, the board is filled with new random cells.
    /// Without it, the cells are kept as they are.
    ///
    /// In both cases the generation goes back to 0, the pattern index to
    /// `None`, and the live regions are recomputed from the cells.
    pub fn reset(&mut self, randomize: bool) {
        let (main, sub) = self.boards.both_mut();
        if randomize {
            main.randomize(&mut self.rng);
            sub.clear();
        }
        main.refresh_region();
        sub.refresh_region();
        self.generation = 0;
        self.pattern_index = None;
    }

    /// Stamps the pattern with the given index in the center of the board.
    ///
    /// Returns `false` if there is no such pattern (including negative
    /// indices) or if it does not fit on the board. The pattern index is
    /// then `None` and the board is left as it was.
    ///
    /// On success both boards hold the pattern. The generation counter is
    /// left alone; only [`reset`](Self::reset) sets it back to 0.
    pub fn set_pattern<I: TryInto<usize>>(&mut self, index: I) -> bool {
        let found = index
            .try_into()
            .ok()
            .and_then(|i| self.patterns.get(i).map(|pattern| (i, pattern)));
        let (index, pattern) = match found {
            Some(found) => found,
            None => {
                self.pattern_index = None;
                return false;
            }
        };
        let (main, sub) = self.boards.both_mut();
        if !main.stamp(pattern) {
            debug!(
                "Pattern {} ({}x{}) does not fit",
                pattern.name(),
                pattern.width(),
                pattern.height()
            );
            self.pattern_index = None;
            return false;
        }
        sub.copy_from(main);
        self.pattern_index = Some(index);
        true
    }

    /// The live region of the current board, if tracked.
    pub fn region(&self) -> Option<Rect> {
        self.board().region()
    }

    /// Hands the current board to a render surface.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        let board = self.board();
        surface.blit(board.as_bytes(), board.size());
    }
}
