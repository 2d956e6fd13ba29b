//! Packed board representation and cell operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tic-tac-toe position packed into a `u32`.
///
/// The low 18 bits hold 9 consecutive 2-bit cells; cell `i` occupies bits
/// `2i..2i+1`. Cell values are 0 (empty), 1 (first mover) and 2 (second
/// mover). Bits above position 17 are never written by the engine and are
/// ignored, not cleared, by every reader.
///
/// The grid maps onto cell indices as
///
/// ```text
/// 8 7 6
/// 5 4 3
/// 2 1 0
/// ```
///
/// # Examples
///
/// ```
/// use tictoc::Board;
///
/// let board = Board::EMPTY.with_cell(4, 1);
/// assert_eq!(board.cell(4), 1);
/// assert_eq!(board.ply(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Board(u32);

impl Board {
    /// The empty board, ply 0
    pub const EMPTY: Board = Board(0);

    /// Wrap a raw packed word without touching any bits
    pub const fn from_bits(bits: u32) -> Self {
        Board(bits)
    }

    /// The raw packed word, high bits included
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The 2-bit value of cell `index` (0..=8)
    pub fn cell(self, index: usize) -> u32 {
        debug_assert!(index < 9);
        (self.0 >> (index << 1)) & 0b11
    }

    /// A copy of this board with cell `index` replaced by `piece` (0..=3),
    /// all other bits unchanged
    pub fn with_cell(self, index: usize, piece: u32) -> Board {
        debug_assert!(index < 9);
        Board((self.0 & !(0b11 << (index << 1))) | (piece << (index << 1)))
    }

    /// Number of non-empty cells, i.e. the 0-based index of the next move.
    ///
    /// Even ply means the first mover plays next (piece 1), odd ply the
    /// second mover (piece 2).
    pub fn ply(self) -> u32 {
        (0..9).filter(|&i| self.cell(i) != 0).count() as u32
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_roundtrip_all_positions() {
        for index in 0..9 {
            for piece in 0..=3 {
                let board = Board::EMPTY.with_cell(index, piece);
                assert_eq!(board.cell(index), piece);
            }
        }
    }

    #[test]
    fn test_with_cell_leaves_other_cells_unchanged() {
        let mut board = Board::EMPTY;
        for index in 0..9 {
            board = board.with_cell(index, (index as u32 % 2) + 1);
        }

        let updated = board.with_cell(4, 0);
        for index in 0..9 {
            if index == 4 {
                assert_eq!(updated.cell(index), 0);
            } else {
                assert_eq!(updated.cell(index), board.cell(index));
            }
        }
    }

    #[test]
    fn test_with_cell_clears_before_writing() {
        let board = Board::EMPTY.with_cell(3, 2).with_cell(3, 1);
        assert_eq!(board.cell(3), 1);
        assert_eq!(board.bits(), 0b01 << 6);
    }

    #[test]
    fn test_cell_ignores_high_bits() {
        let clean = Board::from_bits(0b01_10_00_01);
        let noisy = Board::from_bits(0b01_10_00_01 | 0xFFFC_0000);
        for index in 0..9 {
            assert_eq!(noisy.cell(index), clean.cell(index));
        }
    }

    #[test]
    fn test_ply_counts_filled_cells() {
        assert_eq!(Board::EMPTY.ply(), 0);

        let board = Board::EMPTY
            .with_cell(0, 1)
            .with_cell(4, 2)
            .with_cell(8, 1);
        assert_eq!(board.ply(), 3);

        let noisy = Board::from_bits(board.bits() | 0xFFFC_0000);
        assert_eq!(noisy.ply(), 3);
    }
}
