//! Live-region tracking.
//!
//! A live region is a rectangle that contains every live cell of a board,
//! together with a margin of one cell on each side where the board allows it.
//! Births only happen next to live cells, so the next generation can be
//! computed by scanning the region alone.
//!
//! The region may overestimate the live cells but must never underestimate
//! them. It only grows while cells are set; it shrinks back to
//! [`default_region`] when the board is cleared.

use crate::geom::{Point, Rect, Size};

/// Side length of the region used after a clear.
const DEFAULT_SIDE: i32 = 3;

/// The smallest rectangle that contains `region` and `point` padded by one
/// cell on each side, clamped to `bounds`.
///
/// The padding means a live front moving outward one cell per generation
/// does not have to grow the region on every single set.
pub fn grow_to_include(region: Rect, bounds: Rect, point: Point) -> Rect {
    let left = region.left().min(point.x - 1).max(bounds.left());
    let top = region.top().min(point.y - 1).max(bounds.top());
    let right = region.right().max(point.x + 2).min(bounds.right());
    let bottom = region.bottom().max(point.y + 2).min(bounds.bottom());
    Rect::from_edges(left, top, right, bottom)
}

/// Merges regions by taking the componentwise minimum of their left-top
/// corners and maximum of their right-bottom corners.
///
/// Returns `None` when there is nothing to merge.
pub fn union_all<I>(regions: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    regions.into_iter().reduce(|acc, region| acc.union(&region))
}

/// A small centered region, `min(3, width) × min(3, height)`.
///
/// Used after a clear, so that a board always has a non-empty scan area,
/// even when nothing is alive.
pub fn default_region(bounds: Rect) -> Rect {
    let size = Size::new(
        DEFAULT_SIDE.min(bounds.size.width).max(0),
        DEFAULT_SIDE.min(bounds.size.height).max(0),
    );
    let left_top = Point::new(
        bounds.left() + (bounds.size.width - size.width) / 2,
        bounds.top() + (bounds.size.height - size.height) / 2,
    );
    Rect::new(left_top, size)
}
