//! Move enumeration.

use super::super::{Board, Position};

/// All empty cells of `board` in row-major order.
///
/// Empty iff the board is full. The search relies on this order for its
/// first-best tie-break.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_all_cells_on_empty_board() {
        assert_eq!(available_moves(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_filters_occupied_in_row_major_order() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert_eq!(
            available_moves(&board),
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }
}
