//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here caches state:
//! every answer is recomputed from the squares at call time.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::available_moves;
pub use win::{has_won, winner};

use super::{Board, GameOutcome, Player};
use tracing::instrument;

/// True once either player has a line or no empty square remains.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Player::X) || has_won(board, Player::O) || is_full(board)
}

/// Derives the outcome of `board`.
///
/// `O` is checked before `X`, matching the order of the search's base cases.
/// Both can only hold on boards no legal game reaches.
#[instrument(skip(board))]
pub fn outcome_of(board: &Board) -> GameOutcome {
    if has_won(board, Player::O) {
        GameOutcome::Won(Player::O)
    } else if has_won(board, Player::X) {
        GameOutcome::Won(Player::X)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert!(!is_terminal(&board));
        assert_eq!(outcome_of(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_top_row_terminal_with_empty_cells_left() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!is_terminal(&board));

        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert!(is_terminal(&board));
        assert_eq!(outcome_of(&board), GameOutcome::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        assert!(is_terminal(&board));
        assert_eq!(outcome_of(&board), GameOutcome::Draw);
    }
}
