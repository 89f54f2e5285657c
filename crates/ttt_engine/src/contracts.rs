//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::controller::{GameController, Phase};
use super::invariants::{ControllerInvariants, InvariantSet};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any request once the controller reached `GameOver`.
    #[instrument(skip(game))]
    pub fn check(game: &GameController) -> Result<(), MoveError> {
        if matches!(game.phase(), Phase::GameOver(_)) {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto a marked cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameController) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Precondition: the move belongs to the player the phase is waiting for.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the side that is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameController) -> Result<(), MoveError> {
        match game.phase().to_move() {
            Some(player) if player == mov.player => Ok(()),
            Some(_) => Err(match mov.player {
                super::Player::X => MoveError::NotHumanTurn,
                super::Player::O => MoveError::NotAiTurn,
            }),
            None => Err(MoveError::GameAlreadyOver),
        }
    }
}

/// Composite precondition, checked in the order the UI expects errors:
/// a finished game first, then a taken cell, then the turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameController) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions:
/// - Board matches a replay of the history
/// - Marks alternate starting with the opener
/// - Phase agrees with the outcome derived from the board
pub struct MoveContract;

impl Contract<GameController, Move> for MoveContract {
    fn pre(game: &GameController, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameController, after: &GameController) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one move must be recorded".to_string(),
            ));
        }
        ControllerInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
