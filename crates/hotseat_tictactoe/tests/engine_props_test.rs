//! Property tests over random move sequences.

use hotseat_tictactoe::invariants::{GameInvariants, InvariantSet};
use hotseat_tictactoe::{Direction, Mark, MoveError, apply_move, evaluate, focus_step, new_game};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn prop_moves_keep_state_consistent(indices in prop::collection::vec(0usize..12, 0..20)) {
        let mut state = new_game();
        let mut accepted = 0usize;

        for index in indices {
            let before = state.clone();
            match apply_move(&state, index) {
                Ok(next) => {
                    accepted += 1;
                    prop_assert_eq!(*next.status(), evaluate(next.board()));
                    prop_assert!(GameInvariants::check_all(&next).is_ok());
                    prop_assert_eq!(next.history().len(), accepted);
                    prop_assert_eq!(next.current_turn() == Mark::X, accepted % 2 == 0);
                    state = next;
                }
                Err(err) => {
                    let expected = if before.status().is_terminal() {
                        MoveError::GameOver
                    } else if index > 8 {
                        MoveError::InvalidIndex(index)
                    } else {
                        MoveError::CellOccupied(before.history()
                            .iter()
                            .copied()
                            .find(|p| p.to_index() == index)
                            .expect("occupied cell is in history"))
                    };
                    prop_assert_eq!(err, expected);
                    prop_assert_eq!(&state, &before);
                }
            }
        }
    }

    #[test]
    fn prop_focus_step_stays_on_board(index in 0usize..9, dirs in prop::collection::vec(direction(), 0..16)) {
        let mut focus = index;
        for d in dirs {
            let next = focus_step(focus, d);
            prop_assert!(next <= 8);
            let (r0, c0) = (focus / 3, focus % 3);
            let (r1, c1) = (next / 3, next % 3);
            prop_assert!(r0.abs_diff(r1) + c0.abs_diff(c1) <= 1);
            focus = next;
        }
    }
}
