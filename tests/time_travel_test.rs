//! Tests for the history/time-travel behavior of the reducer.

use tictactoe_rewind::invariants::{
    HistoryConsistentInvariant, InvariantSet, MarkBalanceInvariant,
    StepInBoundsInvariant,
};
use tictactoe_rewind::{GameState, Mark, Square};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn check_invariants(state: &GameState) {
    let result = <(
        StepInBoundsInvariant,
        HistoryConsistentInvariant,
        MarkBalanceInvariant,
    ) as InvariantSet<GameState>>::check_all(state);
    assert!(result.is_ok(), "invariant violations: {:?}", result);
}

#[test]
fn test_history_grows_one_snapshot_per_move() {
    init_tracing();
    let mut state = GameState::new();
    assert_eq!(state.history_len(), 1);

    for (count, cell) in [4, 0, 8, 2].into_iter().enumerate() {
        state = state.apply_move(cell);
        assert_eq!(state.history_len(), count + 2);
        assert_eq!(state.current_step(), count + 1);
        check_invariants(&state);
    }
}

#[test]
fn test_turn_parity_at_every_reachable_step() {
    init_tracing();
    let played = GameState::new()
        .apply_move(0)
        .apply_move(1)
        .apply_move(2)
        .apply_move(3)
        .apply_move(5);

    for step in 0..played.history_len() {
        let state = played.jump_to(step);
        assert_eq!(state.x_is_next(), step % 2 == 0);
        assert_eq!(
            state.next_mark(),
            if step % 2 == 0 { Mark::X } else { Mark::O }
        );
        check_invariants(&state);
    }
}

#[test]
fn test_jump_then_move_truncates_future() {
    init_tracing();
    // Four moves: history length 5 (empty start plus four snapshots).
    let state = GameState::new()
        .apply_move(0)
        .apply_move(1)
        .apply_move(2)
        .apply_move(3);
    assert_eq!(state.history_len(), 5);

    let branched = state.jump_to(2).apply_move(7);
    assert_eq!(branched.history_len(), 4);
    assert_eq!(branched.current_step(), 3);
    check_invariants(&branched);

    // Kept prefix is intact, discarded future is gone.
    assert_eq!(branched.snapshots()[..3], state.snapshots()[..3]);
    assert!(branched.current_board().is_empty(2));
    assert!(branched.current_board().is_empty(3));
}

#[test]
fn test_occupied_cell_never_changes_history() {
    init_tracing();
    let state = GameState::new().apply_move(4).apply_move(0);
    let after = state.apply_move(4);
    assert_eq!(after.history_len(), state.history_len());
    assert_eq!(after.current_step(), state.current_step());
    assert_eq!(after, state);
}

#[test]
fn test_winning_board_freezes_the_game() {
    init_tracing();
    // X: 0, 3, 6 (left column), O: 1, 4.
    let state = GameState::new()
        .apply_move(0)
        .apply_move(1)
        .apply_move(3)
        .apply_move(4)
        .apply_move(6);
    assert_eq!(state.winner(), Some(Mark::X));

    for cell in 0..9 {
        let after = state.apply_move(cell);
        assert_eq!(after.history_len(), state.history_len());
        assert_eq!(after.current_step(), state.current_step());
    }
}

#[test]
fn test_jumping_off_a_won_board_reopens_play() {
    init_tracing();
    let won = GameState::new()
        .apply_move(0)
        .apply_move(1)
        .apply_move(3)
        .apply_move(4)
        .apply_move(6);
    assert_eq!(won.winner(), Some(Mark::X));

    // Back before the winning move, play continues on a fresh branch.
    let reopened = won.jump_to(4).apply_move(8);
    assert_eq!(reopened.winner(), None);
    assert_eq!(reopened.history_len(), 6);
    assert_eq!(
        reopened.current_board().get(8),
        Some(Square::Occupied(Mark::X))
    );
    check_invariants(&reopened);
}

#[test]
fn test_snapshots_are_independent() {
    init_tracing();
    // Mutating history through new moves must never rewrite old snapshots.
    let one = GameState::new().apply_move(0);
    let two = one.apply_move(4);

    assert!(two.snapshots()[1].is_empty(4));
    assert_eq!(one.snapshots()[1], two.snapshots()[1]);
}
