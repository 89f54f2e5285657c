//! Tic-tac-toe engine for a human (`X`) versus AI (`O`) game.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: win, full-board and terminal detection, move enumeration
//! - **Search**: exhaustive minimax that picks the AI's move
//! - **Controller**: turn state machine the UI drives
//!
//! # Example
//!
//! ```
//! use ttt_engine::{GameController, GameOutcome, Phase};
//!
//! let mut game = GameController::new();
//! assert_eq!(game.apply_human_move(1, 1)?, GameOutcome::InProgress);
//! let (reply, _outcome) = game.run_ai_turn()?;
//! assert!(!game.board().is_empty(reply));
//! assert_eq!(game.phase(), Phase::AwaitingHumanMove);
//! # Ok::<(), ttt_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod interface;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError, SearchError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn};
pub use controller::{FirstMover, GameController, Phase};
pub use interface::{apply_human_move, new_game, run_ai_turn};
pub use invariants::{
    AlternatingTurnInvariant, ControllerInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, PhaseConsistentInvariant,
};
pub use position::Position;
pub use rules::{available_moves, has_won, is_full, is_terminal, outcome_of, winner};
pub use search::{DRAW, O_WINS, Score, SearchStats, Searcher, X_WINS, best_move, evaluate};
pub use types::{Board, GameOutcome, Player, Square};
