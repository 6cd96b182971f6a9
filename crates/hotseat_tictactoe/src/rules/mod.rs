//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here touches turn or history,
//! so the same checks serve move application, invariants and tests.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, first_complete_line};

use super::{Board, Status};
use tracing::instrument;

/// Classifies a board.
///
/// The first complete line in [`WIN_LINES`] order wins, even if a
/// constructed board completes several at once. A full board with no
/// complete line is a draw.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Status {
    if let Some((mark, line)) = first_complete_line(board) {
        return Status::Won(mark, line);
    }
    if is_full(board) {
        return Status::Draw;
    }
    Status::InProgress
}
