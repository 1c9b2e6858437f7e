//! Step-in-bounds invariant: the step pointer always lands on a snapshot.

use super::Invariant;
use crate::state::GameState;

/// Invariant: history is never empty and the current step indexes into it.
///
/// `0 <= current_step < history_len` must hold after every transition,
/// including defensive no-ops.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.history_len() > 0 && state.current_step() < state.history_len()
    }

    fn description() -> &'static str {
        "Current step indexes into a non-empty history"
    }
}
