//! Game-state reducer: snapshot history, step pointer, time travel.

use crate::rules::{check_winner, is_full};
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Game status derived from the board at the current step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// Game continues; the given mark moves next.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
    /// The given mark has three in a row.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// Board is full with no winner.
    #[display("Result: Draw!")]
    Draw,
}

/// Complete game state: the snapshot history plus the step on display.
///
/// `GameState` is an immutable value. [`apply_move`](Self::apply_move) and
/// [`jump_to`](Self::jump_to) return a new state and leave `self` untouched;
/// the presentation layer holds "current state" as its only mutable cell.
/// Each history entry is an independent board snapshot, so jumping between
/// steps can never corrupt earlier boards.
///
/// Whose turn it is falls out of the step pointer: the mark for step `n`
/// is X when `n` is even. It is derived on demand, never stored.
///
/// Deserialization goes through [`InvalidState`] validation, so a
/// serialized snapshot can never restore into a state the reducer could
/// not have reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Board snapshots, one per move, starting with the empty board.
    history: Vec<Board>,
    /// Index into `history` of the board currently on display.
    current_step: usize,
    /// Cell of the most recent applied move. Jumps do not touch this.
    last_move_cell: Option<usize>,
}

impl GameState {
    /// Creates a new game: a single empty snapshot at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
            last_move_cell: None,
        }
    }

    /// Applies a move at the given cell (0-8) and returns the next state.
    ///
    /// Invalid moves are policy no-ops, not errors: if the board at the
    /// current step already has a winner, the cell is occupied, or the
    /// index is out of range, the returned state equals `self`.
    ///
    /// A move made after jumping to an earlier step discards the snapshots
    /// beyond that step; the new move starts a fresh branch.
    #[must_use = "apply_move returns the next state and leaves self unchanged"]
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&self, cell: usize) -> Self {
        if cell >= 9 {
            warn!(cell, "cell index outside the board, ignoring move");
            return self.clone();
        }

        let board = self.current_board();
        if check_winner(board).is_some() || !board.is_empty(cell) {
            return self.clone();
        }

        // Copy-on-write: truncate any future branch, then snapshot.
        let mark = self.next_mark();
        let mut history = self.history[..=self.current_step].to_vec();
        let mut next = board.clone();
        if next.set(cell, Square::Occupied(mark)).is_err() {
            return self.clone();
        }
        debug!(
            placed = %mark,
            to_move = %mark.opponent(),
            "applied move at cell {cell}\n{}",
            next.display()
        );
        history.push(next);

        Self {
            current_step: history.len() - 1,
            history,
            last_move_cell: Some(cell),
        }
    }

    /// Moves the step pointer to a prior (or later) snapshot.
    ///
    /// History is untouched; only the pointer changes. An out-of-range
    /// step is a defensive no-op. `last_move_cell` still reflects the
    /// most recent [`apply_move`](Self::apply_move), even after a jump.
    #[must_use = "jump_to returns the next state and leaves self unchanged"]
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Self {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "step outside history, ignoring jump");
            return self.clone();
        }

        Self {
            current_step: step,
            ..self.clone()
        }
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Checks if the current board is a draw (full, no winner).
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && is_full(self.current_board())
    }

    /// Returns the status derived from the current board.
    pub fn status(&self) -> Status {
        if let Some(winner) = self.winner() {
            Status::Winner(winner)
        } else if self.is_draw() {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_mark())
        }
    }

    /// True when X moves next: step 0, 2, 4, ...
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// Returns the mark that moves next.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    /// Returns all board snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.history
    }

    /// Returns the number of snapshots (moves made plus the empty start).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the step currently on display.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the cell of the most recent applied move, if any.
    pub fn last_move_cell(&self) -> Option<usize> {
        self.last_move_cell
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a serialized state violates the reducer's invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidState {
    /// History held no snapshots; even a fresh game has the empty board.
    #[display("history must hold at least the starting snapshot")]
    EmptyHistory,
    /// The step pointer fell outside the history.
    #[display("current step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// The serialized step pointer.
        step: usize,
        /// The serialized history length.
        len: usize,
    },
    /// The recorded last move was not a board cell.
    #[display("last move cell {cell} is outside the board")]
    LastMoveOutOfRange {
        /// The serialized cell index.
        cell: usize,
    },
}

/// Unvalidated mirror of [`GameState`] for deserialization.
///
/// `apply_move` and `jump_to` keep the live struct consistent, but a
/// serialized snapshot comes from outside the reducer and has to be
/// checked before the field invariants can be assumed.
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_step: usize,
    last_move_cell: Option<usize>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.history.is_empty() {
            return Err(InvalidState::EmptyHistory);
        }
        if raw.current_step >= raw.history.len() {
            return Err(InvalidState::StepOutOfRange {
                step: raw.current_step,
                len: raw.history.len(),
            });
        }
        if let Some(cell) = raw.last_move_cell {
            if cell >= 9 {
                return Err(InvalidState::LastMoveOutOfRange { cell });
            }
        }

        Ok(Self {
            history: raw.history,
            current_step: raw.current_step,
            last_move_cell: raw.last_move_cell,
        })
    }
}
