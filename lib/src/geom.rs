//! Points, sizes and rectangles on the board.

use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// Both coordinates are 0-indexed. A point carries no bounds of its own;
/// it is valid on a board of size `(w, h)` when it lies in `[0, w) × [0, h)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl Add<Size> for Point {
    type Output = Point;

    #[inline]
    fn add(self, size: Size) -> Self::Output {
        Point::new(self.x + size.width, self.y + size.height)
    }
}

/// Width and height of a board or a pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Number of cells.
    #[inline]
    pub fn area(self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }
}

/// An axis-aligned rectangle.
///
/// The left and top edges are inclusive, the right and bottom edges are
/// exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub left_top: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(left_top: Point, size: Size) -> Self {
        Rect { left_top, size }
    }

    /// Builds a rectangle from its edges. `right` and `bottom` are exclusive.
    #[inline]
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left_top: Point::new(left, top),
            size: Size::new((right - left).max(0), (bottom - top).max(0)),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.left_top.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.left_top.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.left_top.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.left_top.y + self.size.height
    }

    #[inline]
    pub fn right_bottom(&self) -> Point {
        self.left_top + self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.left() <= point.x
            && point.x < self.right()
            && self.top() <= point.y
            && point.y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (self.left() <= other.left()
                && other.right() <= self.right()
                && self.top() <= other.top()
                && other.bottom() <= self.bottom())
    }

    /// The smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// The overlap of two rectangles; empty if they do not meet.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        Rect::from_edges(
            left,
            top,
            self.right().min(other.right()).max(left),
            self.bottom().min(other.bottom()).max(top),
        )
    }

    /// Iterates over every point in the rectangle, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (left, right) = (self.left(), self.right());
        (self.top()..self.bottom())
            .flat_map(move |y| (left..right).map(move |x| Point::new(x, y)))
    }
}
