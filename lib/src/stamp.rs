//! Stamping a pattern onto a board.

use crate::{geom::Point, grid::BitGrid, pattern::PatternDefinition};

impl BitGrid {
    /// Clears the board and draws `pattern` in its center.
    ///
    /// Returns `false` and leaves the board untouched if the pattern has no
    /// cells, or if it is wider or taller than the board.
    pub fn stamp(&mut self, pattern: &PatternDefinition) -> bool {
        let size = self.size();
        let pattern_size = pattern.size();
        if pattern.is_empty()
            || pattern_size.width > size.width
            || pattern_size.height > size.height
        {
            return false;
        }

        self.clear();
        let offset = Point::new(
            (size.width - pattern_size.width) / 2,
            (size.height - pattern_size.height) / 2,
        );
        for (i, &alive) in pattern.cells().iter().enumerate() {
            if alive {
                let x = (i % pattern.width()) as i32;
                let y = (i / pattern.width()) as i32;
                self.set(Point::new(offset.x + x, offset.y + y), true);
            }
        }
        true
    }
}
