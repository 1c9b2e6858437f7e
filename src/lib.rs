//! Tic-tac-toe game-state reducer with move history and time travel.
//!
//! The reducer derives everything from an ordered history of board
//! snapshots: the board on display, whose turn is next, win/draw status,
//! and a labeled move list for jumping back to any prior step. Rendering
//! is out of scope; the [`view`] module exposes plain data for whatever
//! presentation layer sits on top.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameState, Mark};
//!
//! // X takes the left column: 0, 3, 6.
//! let state = GameState::new()
//!     .apply_move(0)
//!     .apply_move(1)
//!     .apply_move(3)
//!     .apply_move(4)
//!     .apply_move(6);
//!
//! assert_eq!(state.winner(), Some(Mark::X));
//! assert_eq!(state.status().to_string(), "Winner: X");
//!
//! // Time travel: jump back and branch; the old future is discarded.
//! let branched = state.jump_to(2).apply_move(8);
//! assert_eq!(branched.history_len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod describe;
mod state;
mod types;
mod view;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - domain types
pub use types::{Board, Mark, OutOfBounds, Square};

// Crate-level exports - reducer
pub use state::{GameState, InvalidState, Status};

// Crate-level exports - move descriptions
pub use describe::{UNKNOWN_LOCATION, locate_move};

// Crate-level exports - render contract
pub use view::{MoveEntry, board_rows, move_list};
