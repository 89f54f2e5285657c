//! Board-level entry points for UI collaborators that keep their own board.
//!
//! These functions do not track whose turn it is; callers that want turn
//! enforcement use [`GameController`](crate::GameController) instead.

use super::action::MoveError;
use super::rules::{is_terminal, outcome_of};
use super::search::best_move;
use super::{Board, GameOutcome, Player, Position, Square};
use tracing::{instrument, warn};

/// A fresh board with every cell empty.
pub fn new_game() -> Board {
    Board::new()
}

/// Marks `(row, col)` for the human and returns the resulting outcome.
///
/// # Errors
///
/// - [`MoveError::GameAlreadyOver`] if the board is already decided
/// - [`MoveError::OutOfBounds`] for a row or column above 2
/// - [`MoveError::CellOccupied`] if the cell is taken
///
/// The board is unchanged on every error.
#[instrument(skip(board))]
pub fn apply_human_move(board: &mut Board, row: usize, col: usize) -> Result<GameOutcome, MoveError> {
    if is_terminal(board) {
        return Err(MoveError::GameAlreadyOver);
    }
    let position = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    if !board.is_empty(position) {
        warn!(position = %position, "Cell already occupied");
        return Err(MoveError::CellOccupied(position));
    }

    board.set(position, Square::Occupied(Player::X));
    Ok(outcome_of(board))
}

/// Plays the engine's move on `board`.
///
/// # Errors
///
/// [`MoveError::GameAlreadyOver`] if the board is already decided.
#[instrument(skip(board))]
pub fn run_ai_turn(board: &mut Board) -> Result<(Position, GameOutcome), MoveError> {
    if is_terminal(board) {
        return Err(MoveError::GameAlreadyOver);
    }
    let position = best_move(board)?;
    board.set(position, Square::Occupied(Player::O));
    Ok((position, outcome_of(board)))
}
