//! The transition rule of Conway's Game of Life, `B3/S23`.

use crate::{geom::Point, grid::BitGrid};

/// Whether a cell with the given state and number of living neighbors
/// is alive in the next generation.
///
/// A cell is born with exactly 3 living neighbors and survives with 2 or 3.
#[inline]
pub fn transition(alive: bool, neighbors: u32) -> bool {
    neighbors == 3 || (neighbors == 2 && alive)
}

/// The state of the cell at `point` in the next generation of `grid`.
#[inline]
pub fn next_state(grid: &BitGrid, point: Point) -> bool {
    transition(grid.get(point), grid.neighbor_count(point))
}
