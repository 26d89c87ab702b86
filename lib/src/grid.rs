//! The bit-packed board.

use crate::{
    geom::{Point, Rect, Size},
    region::{default_region, grow_to_include},
};
use rand::Rng;
use std::{
    fmt::{self, Debug, Formatter},
    mem,
    ops::Range,
};

/// Number of cells stored in one byte of the buffer.
///
/// The width of every board must be a multiple of this.
pub const UNIT_BITS: i32 = u8::BITS as i32;

/// Byte index and bit position of an in-bounds cell.
///
/// This is the only place that knows how cells are laid out:
/// row `y` starts at byte `y * stride`, and cell `x` of that row is
/// bit `x % 8` (least significant bit first) of byte `x / 8`.
#[inline]
fn bit_index(stride: usize, x: i32, y: i32) -> (usize, u8) {
    (
        y as usize * stride + (x / UNIT_BITS) as usize,
        (x % UNIT_BITS) as u8,
    )
}

/// A fixed-size 2-D board of dead and living cells, stored as packed bits.
///
/// Reading a cell outside the board gives a dead cell, and writing one is a
/// no-op. The board never changes its size after construction.
///
/// When live-region tracking is enabled, the board also keeps a rectangle
/// that contains all its living cells. See [`crate::region`].
#[derive(Clone)]
pub struct BitGrid {
    /// Width and height of the board.
    size: Size,

    /// Number of bytes per row.
    stride: usize,

    /// The packed cells, `stride * height` bytes.
    cells: Box<[u8]>,

    /// The live region, `None` when tracking is disabled.
    region: Option<Rect>,
}

impl BitGrid {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if the width or the height is not positive, or if the width
    /// is not a multiple of [`UNIT_BITS`].
    #[track_caller]
    pub fn new(size: Size, track_region: bool) -> Self {
        assert!(
            size.width > 0 && size.height > 0,
            "board size must be positive, got {}x{}",
            size.width,
            size.height
        );
        assert!(
            size.width % UNIT_BITS == 0,
            "board width must be a multiple of {}, got {}",
            UNIT_BITS,
            size.width
        );
        let stride = (size.width / UNIT_BITS) as usize;
        let cells = vec![0; stride * size.height as usize].into_boxed_slice();
        let region = if track_region {
            Some(default_region(Rect::new(Point::default(), size)))
        } else {
            None
        };
        BitGrid {
            size,
            stride,
            cells,
            region,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole board as a rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(Point::default(), self.size)
    }

    /// Number of bytes per row of the packed buffer.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The live region, or `None` if tracking is disabled.
    #[inline]
    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    #[inline]
    pub fn tracks_region(&self) -> bool {
        self.region.is_some()
    }

    /// The raw packed cells, row by row, least significant bit first.
    ///
    /// This is what a render surface blits.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    fn index(&self, point: Point) -> Option<(usize, u8)> {
        if self.bounds().contains(point) {
            Some(bit_index(self.stride, point.x, point.y))
        } else {
            None
        }
    }

    /// Whether the cell is alive. Cells outside the board are dead.
    #[inline]
    pub fn get(&self, point: Point) -> bool {
        match self.index(point) {
            Some((index, bit)) => self.cells[index] & (1 << bit) != 0,
            None => false,
        }
    }

    /// Sets the state of a cell. Does nothing outside the board.
    ///
    /// Setting a cell alive grows the live region to include it. Setting a
    /// cell dead never shrinks the region.
    #[inline]
    pub fn set(&mut self, point: Point, alive: bool) {
        if let Some((index, bit)) = self.index(point) {
            if alive {
                self.cells[index] |= 1 << bit;
                if let Some(region) = self.region {
                    self.region = Some(grow_to_include(region, self.bounds(), point));
                }
            } else {
                self.cells[index] &= !(1 << bit);
            }
        }
    }

    /// Kills every cell and resets the live region to the default one.
    pub fn clear(&mut self) {
        self.cells.fill(0);
        if self.region.is_some() {
            self.region = Some(default_region(self.bounds()));
        }
    }

    /// Number of living cells among the eight neighbors.
    ///
    /// There is no wraparound: neighbors outside the board are dead.
    #[inline]
    pub fn neighbor_count(&self, point: Point) -> u32 {
        let mut count = 0;
        for y in point.y.saturating_sub(1)..=point.y.saturating_add(1) {
            for x in point.x.saturating_sub(1)..=point.x.saturating_add(1) {
                if (x, y) != (point.x, point.y) && self.get(Point::new(x, y)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Copies all cells and the live region of another board of the same size.
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    #[track_caller]
    pub fn copy_from(&mut self, other: &BitGrid) {
        assert_eq!(self.size, other.size, "cannot copy between boards of different sizes");
        self.cells.copy_from_slice(&other.cells);
        if self.region.is_some() {
            match other.region {
                Some(region) => self.region = Some(region),
                None => self.refresh_region(),
            }
        }
    }

    /// Number of living cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Recomputes the live region from the current cells.
    ///
    /// The result is the default region grown around every living cell,
    /// so it is usually tighter than the region accumulated by `set`.
    pub fn refresh_region(&mut self) {
        if self.region.is_none() {
            return;
        }
        let bounds = self.bounds();
        let mut region = default_region(bounds);
        for (index, &byte) in self.cells.iter().enumerate() {
            if byte == 0 {
                continue;
            }
            let y = (index / self.stride) as i32;
            let x0 = (index % self.stride) as i32 * UNIT_BITS;
            for bit in 0..UNIT_BITS {
                if byte & (1 << bit) != 0 {
                    region = grow_to_include(region, bounds, Point::new(x0 + bit, y));
                }
            }
        }
        self.region = Some(region);
    }

    /// Fills the board with random cells, each alive with probability `1/2`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        rng.fill(&mut self.cells[..]);
        self.refresh_region();
    }

    /// Displays the board in [Plaintext](https://conwaylife.com/wiki/Plaintext)
    /// format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity(self.size.area() + self.size.height as usize);
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                str.push(if self.get(Point::new(x, y)) { 'o' } else { '.' });
            }
            str.push('\n');
        }
        str
    }

    #[inline]
    pub(crate) fn set_region(&mut self, region: Option<Rect>) {
        if self.region.is_some() {
            self.region = region;
        }
    }

    /// Splits the board into disjoint mutable row slices.
    ///
    /// `slices` must be sorted, non-overlapping and inside the board.
    /// The live region is not touched; the caller is responsible for it.
    #[track_caller]
    pub(crate) fn split_rows_mut(&mut self, slices: &[Range<i32>]) -> Vec<RowsMut<'_>> {
        let stride = self.stride;
        let width = self.size.width;
        let height = self.size.height;
        let mut rest = &mut self.cells[..];
        let mut consumed = 0;
        let mut rows_mut = Vec::with_capacity(slices.len());
        for rows in slices {
            assert!(
                consumed <= rows.start && rows.start <= rows.end && rows.end <= height,
                "row slices must be sorted, disjoint and inside the board"
            );
            let skip = (rows.start - consumed) as usize * stride;
            let len = (rows.end - rows.start) as usize * stride;
            let (_, tail) = mem::take(&mut rest).split_at_mut(skip);
            let (head, tail) = tail.split_at_mut(len);
            rows_mut.push(RowsMut {
                cells: head,
                stride,
                width,
                rows: rows.clone(),
            });
            rest = tail;
            consumed = rows.end;
        }
        rows_mut
    }
}

/// Two boards are equal when they have the same size and the same cells.
///
/// Live regions are not compared.
impl PartialEq for BitGrid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for BitGrid {}

impl Debug for BitGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitGrid")
            .field("size", &self.size)
            .field("region", &self.region)
            .field("live_count", &self.live_count())
            .finish()
    }
}

/// Exclusive write access to a range of rows of a [`BitGrid`].
///
/// Row slices handed out by one split never share a byte, so they can be
/// written from different threads at the same time.
pub(crate) struct RowsMut<'a> {
    cells: &'a mut [u8],
    stride: usize,
    width: i32,
    rows: Range<i32>,
}

impl<'a> RowsMut<'a> {
    #[inline]
    pub(crate) fn rows(&self) -> Range<i32> {
        self.rows.clone()
    }

    /// Sets the state of a cell. Does nothing outside these rows.
    #[inline]
    pub(crate) fn set(&mut self, point: Point, alive: bool) {
        if 0 <= point.x && point.x < self.width && self.rows.contains(&point.y) {
            let (index, bit) = bit_index(self.stride, point.x, point.y - self.rows.start);
            if alive {
                self.cells[index] |= 1 << bit;
            } else {
                self.cells[index] &= !(1 << bit);
            }
        }
    }
}
