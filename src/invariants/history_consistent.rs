//! History consistency invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::state::GameState;
use crate::types::Square;

/// Invariant: the snapshot at index k has exactly k occupied squares.
///
/// The initial snapshot is empty and every move adds one mark, so the
/// occupied count and the snapshot index move in lockstep. Truncating a
/// future branch never breaks this because the kept prefix is untouched.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.snapshots().iter().enumerate().all(|(step, board)| {
            let occupied = board
                .squares()
                .iter()
                .filter(|s| **s != Square::Empty)
                .count();
            occupied == step
        })
    }

    fn description() -> &'static str {
        "Snapshot k has exactly k occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut state = GameState::new();
        for cell in [4, 0, 8, 2, 6] {
            state = state.apply_move(cell);
            assert!(HistoryConsistentInvariant::holds(&state));
        }
        assert_eq!(state.history_len(), 6);
    }

    #[test]
    fn test_holds_after_branch_truncation() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .apply_move(2)
            .jump_to(1)
            .apply_move(5);
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.history_len(), 3);
    }
}
