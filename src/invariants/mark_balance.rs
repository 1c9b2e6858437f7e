//! Mark balance invariant: X moves first and marks alternate.

use super::Invariant;
use crate::state::GameState;
use crate::types::{Mark, Square};

/// Invariant: in every snapshot, the X count leads the O count by 0 or 1.
///
/// X moves at even steps and O at odd steps, so no reachable snapshot can
/// hold two more X than O, or more O than X.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        state.snapshots().iter().all(|board| {
            let (x_count, o_count) =
                board
                    .squares()
                    .iter()
                    .fold((0usize, 0usize), |(x, o), square| match square {
                        Square::Occupied(Mark::X) => (x + 1, o),
                        Square::Occupied(Mark::O) => (x, o + 1),
                        Square::Empty => (x, o),
                    });
            x_count == o_count || x_count == o_count + 1
        })
    }

    fn description() -> &'static str {
        "Every snapshot has #X - #O equal to 0 or 1"
    }
}
