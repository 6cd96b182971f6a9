//! Hotseat tic-tac-toe engine.
//!
//! Pure game logic for two players sharing one device: the board, whose
//! turn it is, win/draw detection and move validation. There is no I/O and
//! no shared state; a [`GameState`] is an ordinary value owned by whoever
//! drives the game.
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{Mark, MoveError, Status, apply_move, new_game};
//!
//! let state = new_game();
//! let state = apply_move(&state, 4)?;
//! assert_eq!(state.current_turn(), Mark::O);
//! assert_eq!(apply_move(&state, 4), Err(MoveError::CellOccupied(hotseat_tictactoe::Position::Center)));
//! assert_eq!(*state.status(), Status::InProgress);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::MoveError;
pub use game::{apply_move, new_game, replay};
pub use position::{Direction, Position, focus_step};
pub use rules::{WIN_LINES, WinLine, evaluate};
pub use types::{Board, GameState, Mark, Square, Status};
