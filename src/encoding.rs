//! Textual board representation over a caller-supplied alphabet

use crate::board::Board;
use crate::error::{Error, Result};

/// The three symbols standing for `[empty, first, second]`, in that order.
///
/// Symbols are Unicode code points, not bytes; multi-byte symbols work the
/// same as ASCII ones.
pub type Alphabet = [char; 3];

/// Parse a 9-symbol text into a packed board.
///
/// The text must hold exactly 9 code points; the length is checked before
/// any symbol is examined. Scanning left to right, the first code point
/// outside the alphabet fails the parse with its 0-based position.
///
/// # Errors
///
/// [`Error::InvalidLength`] when the code-point count is not 9, and
/// [`Error::IllegalSymbol`] for the first out-of-alphabet symbol.
///
/// # Examples
///
/// ```
/// use tictoc::{board_from_text, Board};
///
/// let board = board_from_text("100020000", ['0', '1', '2']).unwrap();
/// assert_eq!(board.cell(0), 1);
/// assert_eq!(board.cell(4), 2);
/// ```
pub fn board_from_text(text: &str, alphabet: Alphabet) -> Result<Board> {
    let got = text.chars().count();
    if got != 9 {
        return Err(Error::InvalidLength { got });
    }

    let mut board = Board::EMPTY;
    for (position, symbol) in text.chars().enumerate() {
        if symbol == alphabet[0] {
            // Cell stays empty
        } else if symbol == alphabet[1] {
            board = board.with_cell(position, 1);
        } else if symbol == alphabet[2] {
            board = board.with_cell(position, 2);
        } else {
            return Err(Error::IllegalSymbol { symbol, position });
        }
    }

    Ok(board)
}

/// Render a board as 9 alphabet symbols in cell order.
///
/// Always succeeds; only the 18 cell bits are read, so garbage above bit
/// 17 does not affect the output.
pub fn board_to_text(board: Board, alphabet: Alphabet) -> String {
    (0..9)
        .map(|index| alphabet[board.cell(index) as usize])
        .collect()
}
