//! Move events and the errors a move request can raise.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Failure of the search itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is full or already decided, so there is nothing to choose.
    #[display("No available moves: board is full or already decided")]
    NoAvailableMoves,
}

impl std::error::Error for SearchError {}

/// Error raised when a move request is rejected.
///
/// Every variant except [`MoveError::Search`] and
/// [`MoveError::InvariantViolation`] is a recoverable caller error and leaves
/// the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has ended; the terminal state is absorbing.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A human move was requested while the AI is to move.
    #[display("It's the AI's turn")]
    NotHumanTurn,

    /// An AI turn was requested while the human is to move.
    #[display("It's the human's turn")]
    NotAiTurn,

    /// Row or column outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The search was asked to move on a finished board.
    #[display("Search failed: {}", _0)]
    Search(SearchError),

    /// A postcondition check failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<SearchError> for MoveError {
    fn from(err: SearchError) -> Self {
        MoveError::Search(err)
    }
}
