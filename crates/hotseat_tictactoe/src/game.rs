//! Move application: the only way a game advances.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::evaluate;
use super::{GameState, Position, Square, Status};
use tracing::{debug, info, instrument};

/// Creates a fresh game: empty board, X to move.
#[instrument]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Places the current mark at `index`, returning the next state.
///
/// Checks run in order: game over, index out of range, cell occupied.
/// On error `state` is untouched.
#[instrument(skip(state), fields(turn = %state.current_turn()))]
pub fn apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    if state.status().is_terminal() {
        debug!(status = ?state.status(), "Rejected move after game end");
        return Err(MoveError::GameOver);
    }

    let Some(pos) = Position::from_index(index) else {
        debug!("Rejected out-of-range index");
        return Err(MoveError::InvalidIndex(index));
    };

    if !state.board().is_empty(pos) {
        debug!(position = %pos, "Rejected occupied cell");
        return Err(MoveError::CellOccupied(pos));
    }

    let mark = state.current_turn();
    let mut board = *state.board();
    board.set(pos, Square::Occupied(mark));

    let mut history = state.history().to_vec();
    history.push(pos);

    let status = evaluate(&board);
    let next = GameState::from_parts(board, mark.opponent(), status, history);

    debug_assert!(
        GameInvariants::check_all(&next).is_ok(),
        "Game invariants violated after move"
    );

    match status {
        Status::InProgress => debug!(position = %pos, next = %next.current_turn(), "Move applied"),
        Status::Won(winner, line) => {
            info!(%winner, line = ?line.indices(), moves = next.history().len(), "Game won")
        }
        Status::Draw => info!("Game drawn"),
    }

    Ok(next)
}

/// Replays move indices from a fresh game, stopping at the first rejection.
#[instrument]
pub fn replay(indices: &[usize]) -> Result<GameState, MoveError> {
    indices
        .iter()
        .try_fold(new_game(), |state, &index| apply_move(&state, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, WIN_LINES};

    #[test]
    fn test_first_move_places_x() {
        let state = apply_move(&new_game(), 4).unwrap();
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(state.current_turn(), Mark::O);
        assert_eq!(state.history(), &[Position::Center]);
    }

    #[test]
    fn test_input_state_untouched() {
        let before = new_game();
        let _after = apply_move(&before, 0).unwrap();
        assert_eq!(before, new_game());
    }

    #[test]
    fn test_game_over_checked_before_index() {
        let won = replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(*won.status(), Status::Won(Mark::X, WIN_LINES[0]));
        assert_eq!(apply_move(&won, 99), Err(MoveError::GameOver));
        assert_eq!(apply_move(&won, 0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_index_checked_before_occupancy() {
        let state = replay(&[0]).unwrap();
        assert_eq!(apply_move(&state, 9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(
            apply_move(&state, 0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        assert_eq!(
            replay(&[4, 4, 5]),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let won = replay(&[0, 3, 1, 4, 2]).unwrap();
        assert!(won.valid_moves().is_empty());
        let open = replay(&[0, 3]).unwrap();
        assert_eq!(open.valid_moves().len(), 7);
    }
}
