//! History invariant: the move log explains the board.

use super::super::{Board, GameState, Mark, Square};
use super::Invariant;

/// Invariant: replaying the history, alternating from X, rebuilds the board.
///
/// Implies no position is played twice and every mark on the board has a
/// move behind it.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut rebuilt = Board::new();
        let mut mark = Mark::X;

        for &pos in state.history() {
            if !rebuilt.is_empty(pos) {
                return false;
            }
            rebuilt.set(pos, Square::Occupied(mark));
            mark = mark.opponent();
        }

        rebuilt == *state.board()
    }

    fn description() -> &'static str {
        "History replays to the board"
    }
}
