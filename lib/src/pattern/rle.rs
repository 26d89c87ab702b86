//! [RLE](https://conwaylife.com/wiki/Rle) patterns.

use super::PatternDefinition;
use ca_formats::rle::Rle;
use log::warn;

/// Most cells a pattern may declare.
const MAX_AREA: usize = 1 << 24;

/// Width and height of the declared box, if both are positive, fit in an
/// `i32`, and the area is at most [`MAX_AREA`].
fn box_size(x: u64, y: u64) -> Option<(usize, usize)> {
    let width = usize::try_from(i32::try_from(x).ok()?).ok()?;
    let height = usize::try_from(i32::try_from(y).ok()?).ok()?;
    match width.checked_mul(height) {
        Some(area) if area > 0 && area <= MAX_AREA => Some((width, height)),
        _ => None,
    }
}

impl PatternDefinition {
    /// Parses a pattern in RLE format.
    ///
    /// The size is taken from the `x = …, y = …` header line. A missing or
    /// malformed header, or a malformed body, gives an empty pattern instead
    /// of an error. Cells outside the declared size are dropped.
    pub fn from_rle<S: Into<String>>(name: S, text: &str) -> Self {
        let name = name.into();
        let rle = match Rle::new(text) {
            Ok(rle) => rle,
            Err(e) => {
                warn!("Invalid RLE header in {}: {}", name, e);
                return PatternDefinition::empty(name);
            }
        };
        let (width, height) = match rle.header_data().and_then(|h| box_size(h.x, h.y)) {
            Some(size) => size,
            None => {
                warn!("Missing or unusable RLE header in {}", name);
                return PatternDefinition::empty(name);
            }
        };

        let mut cells = vec![false; width * height];
        for cell in rle {
            match cell {
                Ok(cell) => {
                    let (x, y) = cell.position;
                    if cell.state != 0
                        && (0..width as i64).contains(&x)
                        && (0..height as i64).contains(&y)
                    {
                        cells[y as usize * width + x as usize] = true;
                    }
                }
                Err(e) => {
                    warn!("Invalid RLE body in {}: {}", name, e);
                    return PatternDefinition::empty(name);
                }
            }
        }
        PatternDefinition::new(name, width, cells)
    }
}
