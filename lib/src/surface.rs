//! The boundary towards whatever displays the board.

use crate::geom::Size;

/// Something that can show a 1-bit-per-pixel image of the board.
///
/// Implemented by the front end. The simulation only hands out read-only
/// snapshots; it never calls a surface on its own.
pub trait Surface {
    /// Draws the board.
    ///
    /// `bits` holds `size.height` rows of `size.width / 8` bytes each.
    /// Bit `x % 8` (least significant first) of byte `x / 8` is the pixel
    /// in column `x`; a set bit is a living cell.
    fn blit(&mut self, bits: &[u8], size: Size);
}
