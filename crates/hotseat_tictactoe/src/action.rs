//! Move rejection reasons.

use super::Position;

/// Why a move was rejected.
///
/// Every variant is recoverable: the state the move was applied to is
/// left exactly as it was, and the caller may simply ask for another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game is already won or drawn.
    #[display("The game is over. Press r to restart.")]
    GameOver,

    /// The index does not name a cell (valid cells are 0-8).
    #[display("There is no cell at index {_0}.")]
    InvalidIndex(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("That cell is already taken.")]
    CellOccupied(#[error(not(source))] Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::InvalidIndex(12).to_string(),
            "There is no cell at index 12."
        );
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "That cell is already taken."
        );
        assert!(MoveError::GameOver.to_string().contains("restart"));
    }
}
