//! Turn orchestration between the human (`X`) and the engine (`O`).
//!
//! The controller owns the board for one game. The UI drives it with
//! [`GameController::apply_human_move`] and [`GameController::run_ai_turn`];
//! each call either moves the state machine forward or is rejected without
//! touching the board.

use super::action::{Move, MoveError, SearchError};
use super::contracts::{Contract, GameNotOver, MoveContract};
use super::rules::{is_terminal, outcome_of};
use super::search::Searcher;
use super::{Board, GameOutcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Who places the first mark of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// The human opens (`X` first).
    #[default]
    Human,
    /// The engine opens (`O` first).
    Ai,
}

impl FirstMover {
    /// Mark of the opening player.
    pub fn player(self) -> Player {
        match self {
            FirstMover::Human => Player::X,
            FirstMover::Ai => Player::O,
        }
    }

    fn opening_phase(self) -> Phase {
        match self {
            FirstMover::Human => Phase::AwaitingHumanMove,
            FirstMover::Ai => Phase::AwaitingAiMove,
        }
    }
}

/// State of the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to mark a cell.
    AwaitingHumanMove,
    /// Waiting for the UI to trigger the engine's move.
    AwaitingAiMove,
    /// Game ended. Absorbing until [`GameController::reset`].
    GameOver(GameOutcome),
}

impl Phase {
    /// Player expected to move next, if any.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::AwaitingHumanMove => Some(Player::X),
            Phase::AwaitingAiMove => Some(Player::O),
            Phase::GameOver(_) => None,
        }
    }
}

/// One game of human versus engine.
#[derive(Debug, Clone)]
pub struct GameController {
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
    pub(crate) first_mover: FirstMover,
}

impl GameController {
    /// New game with the human to move first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_first_mover(FirstMover::Human)
    }

    /// New game with the given opening player.
    #[instrument]
    pub fn with_first_mover(first_mover: FirstMover) -> Self {
        Self {
            board: Board::new(),
            phase: first_mover.opening_phase(),
            history: Vec::new(),
            first_mover,
        }
    }

    /// Discards the current board and starts a new game with the same opener.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Starting new game");
        *self = Self::with_first_mover(self.first_mover);
    }

    /// Marks `(row, col)` for the human.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`MoveError::GameAlreadyOver`] once the game has ended
    /// - [`MoveError::OutOfBounds`] for a row or column above 2
    /// - [`MoveError::CellOccupied`] if the cell is taken
    /// - [`MoveError::NotHumanTurn`] while the engine is to move
    ///
    /// The board is unchanged on every error.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, MoveError> {
        GameNotOver::check(self)?;
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(Move::new(Player::X, position))
    }

    /// Lets the engine pick and play its move.
    ///
    /// Returns the cell it marked and the resulting outcome.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] once the game has ended
    /// - [`MoveError::NotAiTurn`] while the human is to move
    /// - [`MoveError::Search`] if the board is terminal while the machine
    ///   still expects a move, which means the controller lost track of the
    ///   game
    #[instrument(skip(self))]
    pub fn run_ai_turn(&mut self) -> Result<(Position, GameOutcome), MoveError> {
        GameNotOver::check(self)?;
        if self.phase != Phase::AwaitingAiMove {
            warn!(phase = ?self.phase, "AI turn requested out of order");
            return Err(MoveError::NotAiTurn);
        }
        if is_terminal(&self.board) {
            error!(board = %self.board.display(), "Terminal board in AwaitingAiMove");
            return Err(SearchError::NoAvailableMoves.into());
        }

        let mut searcher = Searcher::new();
        let position = searcher.best_move(&self.board)?;
        debug!(
            position = %position,
            nodes = *searcher.stats().nodes(),
            "Engine chose move"
        );

        let outcome = self.place(Move::new(Player::O, position))?;
        Ok((position, outcome))
    }

    /// Applies a move after checking its contract.
    #[instrument(skip(self))]
    fn place(&mut self, action: Move) -> Result<GameOutcome, MoveError> {
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.position, Square::Occupied(action.player));
        self.history.push(action);

        let outcome = outcome_of(&self.board);
        self.phase = match outcome {
            GameOutcome::InProgress => match action.player {
                Player::X => Phase::AwaitingAiMove,
                Player::O => Phase::AwaitingHumanMove,
            },
            finished => {
                info!(outcome = %finished, moves = self.history.len(), "Game over");
                Phase::GameOver(finished)
            }
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(outcome)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current state of the turn machine.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Who opened this game.
    pub fn first_mover(&self) -> FirstMover {
        self.first_mover
    }

    /// Outcome derived from the current board.
    pub fn outcome(&self) -> GameOutcome {
        outcome_of(&self.board)
    }

    /// True once the board is won or full.
    pub fn is_terminal(&self) -> bool {
        is_terminal(&self.board)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_move_hands_turn_to_ai() {
        let mut game = GameController::new();
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);

        let outcome = game.apply_human_move(1, 1).unwrap();
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(game.phase(), Phase::AwaitingAiMove);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut game = GameController::new();
        game.apply_human_move(0, 0).unwrap();
        game.run_ai_turn().unwrap();

        let board = *game.board();
        let phase = game.phase();
        assert_eq!(
            game.apply_human_move(0, 0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(*game.board(), board);
        assert_eq!(game.phase(), phase);
    }

    #[test]
    fn test_out_of_turn_requests_rejected() {
        let mut game = GameController::new();
        assert_eq!(game.run_ai_turn(), Err(MoveError::NotAiTurn));

        game.apply_human_move(0, 0).unwrap();
        assert_eq!(game.apply_human_move(2, 2), Err(MoveError::NotHumanTurn));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameController::new();
        assert_eq!(
            game.apply_human_move(3, 1),
            Err(MoveError::OutOfBounds { row: 3, col: 1 })
        );
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_ai_first_opens_in_ai_phase() {
        let mut game = GameController::with_first_mover(FirstMover::Ai);
        assert_eq!(game.phase(), Phase::AwaitingAiMove);
        assert_eq!(game.apply_human_move(0, 0), Err(MoveError::NotHumanTurn));

        let (position, outcome) = game.run_ai_turn().unwrap();
        assert_eq!(position, Position::TopLeft);
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    }

    #[test]
    fn test_occupied_check_precedes_turn_check() {
        let mut game = GameController::new();
        game.apply_human_move(0, 0).unwrap();
        assert_eq!(
            game.apply_human_move(0, 0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut game = GameController::new();
        // Human tries cells in row-major order, skipping taken ones.
        let mut tries = Position::ALL.into_iter();
        while !matches!(game.phase(), Phase::GameOver(_)) {
            match game.phase() {
                Phase::AwaitingHumanMove => {
                    let pos = tries.next().unwrap();
                    let _ = game.apply_human_move(pos.row(), pos.col());
                }
                Phase::AwaitingAiMove => {
                    game.run_ai_turn().unwrap();
                }
                Phase::GameOver(_) => unreachable!(),
            }
        }

        let board = *game.board();
        assert_ne!(game.outcome(), GameOutcome::Won(Player::X));
        assert_eq!(game.apply_human_move(0, 0), Err(MoveError::GameAlreadyOver));
        assert_eq!(game.run_ai_turn(), Err(MoveError::GameAlreadyOver));
        assert_eq!(*game.board(), board);
        assert_eq!(game.phase(), Phase::GameOver(game.outcome()));
    }

    #[test]
    fn test_reset_keeps_first_mover() {
        let mut game = GameController::with_first_mover(FirstMover::Ai);
        game.run_ai_turn().unwrap();
        game.reset();
        assert_eq!(*game.board(), Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.phase(), Phase::AwaitingAiMove);
    }
}
