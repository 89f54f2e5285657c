//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight lines that win the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` owns all three cells of any line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the player owning a full line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::O, Player::X]
        .into_iter()
        .find(|player| has_won(board, *player))
}
