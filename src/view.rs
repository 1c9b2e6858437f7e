//! Render contract: plain data for a presentation layer.
//!
//! No widget hierarchy here. The board becomes rows of squares and the
//! history becomes a list of labeled entries; any rendering layer (TUI,
//! web, tests) consumes these values directly.

use crate::describe::{UNKNOWN_LOCATION, locate_move};
use crate::state::GameState;
use crate::types::{Board, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry in the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Step this entry jumps to when clicked.
    pub step: usize,
    /// Button label.
    pub label: String,
    /// True for the step currently on display; rendered emphasized.
    pub is_current: bool,
}

/// Splits a board into three rows of three squares, top row first.
pub fn board_rows(board: &Board) -> [[Square; 3]; 3] {
    let squares = board.squares();
    [
        [squares[0], squares[1], squares[2]],
        [squares[3], squares[4], squares[5]],
        [squares[6], squares[7], squares[8]],
    ]
}

/// Builds the move list for the given state, one entry per snapshot.
///
/// Step 0 reads "Go to game start". Every later step reads
/// "Go to move #n - (col c, row r)" where the location is the cell of
/// the MOST RECENT applied move, not the cell that produced that entry.
/// This mirrors the behavior the game has always shipped with; see the
/// move-label tests before changing it.
#[instrument(skip(state))]
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    let location = state
        .last_move_cell()
        .map(locate_move)
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

    (0..state.history_len())
        .map(|step| {
            let label = if step == 0 {
                "Go to game start".to_string()
            } else {
                format!("Go to move #{step} - ({location})")
            };
            MoveEntry {
                step,
                label,
                is_current: step == state.current_step(),
            }
        })
        .collect()
}
