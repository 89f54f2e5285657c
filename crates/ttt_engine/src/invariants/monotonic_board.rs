//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameController, Square};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty grid.
///
/// Every recorded move must land on an empty square, so a mark is never
/// overwritten or cleared.
pub struct MonotonicBoardInvariant;

impl Invariant<GameController> for MonotonicBoardInvariant {
    fn holds(game: &GameController) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
