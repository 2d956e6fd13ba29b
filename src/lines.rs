//! Winning line detection on the packed board

use crate::board::Board;

/// Winning line indices on the 3x3 board, laid out `8 7 6 / 5 4 3 / 2 1 0`
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [8, 7, 6],
    [5, 4, 3],
    [2, 1, 0], // rows
    [8, 5, 2],
    [7, 4, 1],
    [6, 3, 0], // columns
    [8, 4, 0],
    [6, 4, 2], // diagonals
];

/// Check whether any winning line holds three equal non-empty cells.
///
/// Only answers yes or no; callers that need to know which player won
/// derive it from the ply parity of the move that completed the line.
pub fn has_winner(board: Board) -> bool {
    WINNING_LINES.iter().any(|&[a, b, c]| {
        let piece = board.cell(a);
        piece != 0 && piece == board.cell(b) && piece == board.cell(c)
    })
}
