//! Computes one generation on several threads.
//!
//! The rows to scan are cut into one contiguous slice per worker. Every
//! worker reads the current board, which nobody writes during the step, and
//! writes its own rows of the next board, which no other worker touches.
//! The only synchronization is the join at the end of the step.

use crate::{
    geom::{Point, Rect},
    grid::{BitGrid, RowsMut},
    region::{grow_to_include, union_all},
    rule::next_state,
};
use log::debug;
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use std::{
    fmt::{self, Debug, Formatter},
    num::NonZeroUsize,
    ops::Range,
    thread,
};

/// Number of hardware threads, or 1 if it cannot be determined.
pub fn available_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Cuts `rows` into `workers` contiguous slices of `len / workers` rows.
///
/// The last slice absorbs the remainder. Empty slices are left out, so a
/// range shorter than the worker count gives one slice. `workers` is at
/// least 1 here.
pub(crate) fn partition(rows: Range<i32>, workers: usize) -> Vec<Range<i32>> {
    let len = (rows.end - rows.start).max(0);
    if len == 0 {
        return Vec::new();
    }
    let workers = (workers.max(1) as i32).min(len);
    let chunk = len / workers;
    (0..workers)
        .map(|i| {
            let start = rows.start + i * chunk;
            let end = if i == workers - 1 {
                rows.end
            } else {
                start + chunk
            };
            start..end
        })
        .collect()
}

/// Runs the rule over a fixed number of worker threads.
pub struct Stepper {
    /// Number of row slices per step.
    workers: usize,

    /// The worker threads. `None` means the slices are computed one after
    /// another on the calling thread.
    pool: Option<ThreadPool>,
}

impl Stepper {
    /// Creates a stepper with the given number of workers.
    ///
    /// `None` means one worker per hardware thread. Zero workers, or a
    /// thread pool that cannot be built, fall back to a single worker on
    /// the calling thread.
    pub fn new(workers: Option<usize>) -> Self {
        let workers = workers.unwrap_or_else(available_workers).max(1);
        let pool = if workers > 1 {
            match ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("life-worker-{}", i))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(e) => {
                    debug!(
                        "Unable to build a pool of {} workers ({}), stepping sequentially",
                        workers, e
                    );
                    None
                }
            }
        } else {
            None
        };
        let workers = if pool.is_some() { workers } else { 1 };
        debug!("Stepper uses {} worker(s)", workers);
        Stepper { workers, pool }
    }

    /// Creates a sequential stepper.
    pub fn sequential() -> Self {
        Stepper::new(Some(1))
    }

    /// Number of row slices per step.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Writes the next generation of the cells of `main` inside `scan`
    /// into `sub`.
    ///
    /// Cells of `sub` outside `scan` are not touched. When `sub` tracks its
    /// live region, the region is replaced by the merge of the per-worker
    /// regions, each seeded from `main`'s region.
    ///
    /// Returns after every worker has finished.
    pub fn step(&self, main: &BitGrid, sub: &mut BitGrid, scan: Rect) {
        let scan = scan.intersect(&main.bounds());
        let seed = main.region();
        let tracking = sub.tracks_region();
        let slices = partition(scan.top()..scan.bottom(), self.workers);
        let columns = scan.left()..scan.right();
        let bounds = sub.bounds();

        let rows_mut = sub.split_rows_mut(&slices);
        let run = |rows: RowsMut<'_>| step_rows(main, rows, columns.clone(), seed, bounds);
        let regions: Vec<Option<Rect>> = match &self.pool {
            Some(pool) => pool.install(|| rows_mut.into_par_iter().map(run).collect()),
            None => rows_mut.into_iter().map(run).collect(),
        };

        if tracking {
            match union_all(regions.into_iter().flatten()).or(seed) {
                Some(merged) => sub.set_region(Some(merged)),
                None => sub.refresh_region(),
            }
        }
    }
}

/// Computes one slice of rows. Returns the region grown over the living
/// cells written, seeded from `seed`.
fn step_rows(
    main: &BitGrid,
    mut rows: RowsMut<'_>,
    columns: Range<i32>,
    seed: Option<Rect>,
    bounds: Rect,
) -> Option<Rect> {
    let mut region = seed;
    for y in rows.rows() {
        for x in columns.clone() {
            let point = Point::new(x, y);
            let alive = next_state(main, point);
            rows.set(point, alive);
            if alive {
                region = region.map(|r| grow_to_include(r, bounds, point));
            }
        }
    }
    region
}

impl Default for Stepper {
    fn default() -> Self {
        Stepper::new(None)
    }
}

impl Debug for Stepper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("workers", &self.workers)
            .field("pooled", &self.pool.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_even() {
        assert_eq!(partition(0..12, 4), vec![0..3, 3..6, 6..9, 9..12]);
    }

    #[test]
    fn partition_remainder_goes_last() {
        assert_eq!(partition(2..13, 3), vec![2..5, 5..8, 8..13]);
    }

    #[test]
    fn partition_more_workers_than_rows() {
        assert_eq!(partition(5..7, 16), vec![5..6, 6..7]);
        assert_eq!(partition(5..5, 16), Vec::<Range<i32>>::new());
    }

    #[test]
    fn partition_zero_workers() {
        assert_eq!(partition(0..4, 0), vec![0..4]);
    }

    #[test]
    fn zero_workers_is_sequential() {
        let stepper = Stepper::new(Some(0));
        assert_eq!(stepper.workers(), 1);
        assert!(stepper.pool.is_none());
    }
}
