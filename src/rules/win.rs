//! Win detection logic.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked:
/// rows top-to-bottom, columns left-to-right, then the two diagonals.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first fully matched non-empty line,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a)?;
        if sq != Square::Empty && board.get(b) == Some(sq) && board.get(c) == Some(sq) {
            return sq.mark();
        }
    }

    None
}
