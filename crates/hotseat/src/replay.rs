//! Headless replay of a move list.

use anyhow::{Result, bail};
use hotseat_tictactoe::{apply_move, new_game};
use std::io::Write;
use tracing::{info, instrument};

/// Applies `moves` from a fresh game and prints the result to `out`.
///
/// Prints the board and summary, or the state as JSON when `json` is set.
/// A rejected move stops the replay: the board so far is printed and the
/// rejection is returned as an error naming the move.
#[instrument(skip(out))]
pub fn run(moves: &[usize], json: bool, out: &mut impl Write) -> Result<()> {
    let mut state = new_game();

    for (n, &index) in moves.iter().enumerate() {
        match apply_move(&state, index) {
            Ok(next) => state = next,
            Err(err) => {
                writeln!(out, "{}", state.board().display())?;
                bail!("Move {} (index {}) rejected: {}", n + 1, index, err);
            }
        }
    }

    info!(moves = moves.len(), status = ?state.status(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &state)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", state.board().display())?;
        writeln!(out, "{}", state.summary())?;
    }
    Ok(())
}
