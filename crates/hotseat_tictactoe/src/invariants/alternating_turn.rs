//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: marks alternate, X first.
///
/// X has placed as many marks as O, or one more. While the game is in
/// progress, X is to move exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);

        if x != o && x != o + 1 {
            return false;
        }

        let expected_next = if x == o { Mark::X } else { Mark::O };
        state.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
