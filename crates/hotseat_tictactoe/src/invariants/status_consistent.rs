//! Status invariant: the stored status is what the board says.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: `status` equals [`evaluate`] of the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        *state.status() == evaluate(state.board())
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}
