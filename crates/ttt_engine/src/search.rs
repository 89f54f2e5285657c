//! Exhaustive minimax search.
//!
//! Scores are from `O`'s point of view: `+1` when `O` wins with best play,
//! `-1` when `X` does, `0` for a draw. The whole game tree below a position is
//! explored, with no pruning and no caching.
//!
//! Each recursion level builds its children with [`Board::with_mark`], so the
//! board handed in by the caller is never written to.

use super::action::SearchError;
use super::rules::{available_moves, has_won, is_terminal};
use super::{Board, Player, Position};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Minimax value of a position.
pub type Score = i8;

/// `O` wins with best play.
pub const O_WINS: Score = 1;
/// Neither side can force a win.
pub const DRAW: Score = 0;
/// `X` wins with best play.
pub const X_WINS: Score = -1;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Positions visited, root included.
    nodes: u64,
    /// Deepest ply reached below the root.
    max_depth: u8,
}

/// Minimax searcher.
///
/// Holds only instrumentation; the result of every call depends on the board
/// alone.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics accumulated since creation.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Game-theoretic value of `board` with `to_move` playing next.
    #[instrument(skip(self, board))]
    pub fn evaluate(&mut self, board: &Board, to_move: Player) -> Score {
        let score = self.minimax(board, to_move, 0);
        debug!(score, nodes = self.stats.nodes, "Evaluated position");
        score
    }

    fn minimax(&mut self, board: &Board, to_move: Player, depth: u8) -> Score {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if has_won(board, Player::O) {
            return O_WINS;
        }
        if has_won(board, Player::X) {
            return X_WINS;
        }
        let moves = available_moves(board);
        if moves.is_empty() {
            return DRAW;
        }

        let mut best = match to_move {
            Player::O => Score::MIN,
            Player::X => Score::MAX,
        };
        for pos in moves {
            let child = board.with_mark(pos, to_move);
            let score = self.minimax(&child, to_move.opponent(), depth + 1);
            best = match to_move {
                Player::O => best.max(score),
                Player::X => best.min(score),
            };
        }
        best
    }

    /// Every available move for `player` with the score it leads to.
    ///
    /// Moves come back in row-major order.
    #[instrument(skip(self, board))]
    pub fn scored_moves(&mut self, board: &Board, player: Player) -> Vec<(Position, Score)> {
        available_moves(board)
            .into_iter()
            .map(|pos| {
                let child = board.with_mark(pos, player);
                (pos, self.minimax(&child, player.opponent(), 1))
            })
            .collect()
    }

    /// Best move for `player`.
    ///
    /// `O` takes the highest score and `X` the lowest. Ties go to the first
    /// move in row-major order.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoAvailableMoves`] if the board is full or already won.
    #[instrument(skip(self, board))]
    pub fn best_move_for(&mut self, board: &Board, player: Player) -> Result<Position, SearchError> {
        if is_terminal(board) {
            return Err(SearchError::NoAvailableMoves);
        }

        let mut best: Option<(Position, Score)> = None;
        for (pos, score) in self.scored_moves(board, player) {
            let improves = best.is_none_or(|(_, best_score)| match player {
                Player::O => score > best_score,
                Player::X => score < best_score,
            });
            if improves {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(SearchError::NoAvailableMoves)?;
        debug!(
            position = %pos,
            score,
            nodes = self.stats.nodes,
            max_depth = self.stats.max_depth,
            "Selected move"
        );
        Ok(pos)
    }

    /// Best move for the AI (`O`).
    pub fn best_move(&mut self, board: &Board) -> Result<Position, SearchError> {
        self.best_move_for(board, Player::O)
    }
}

/// Game-theoretic value of `board` with `to_move` playing next.
pub fn evaluate(board: &Board, to_move: Player) -> Score {
    Searcher::new().evaluate(board, to_move)
}

/// The AI's move on `board`.
///
/// # Errors
///
/// [`SearchError::NoAvailableMoves`] if the board is full or already won.
pub fn best_move(board: &Board) -> Result<Position, SearchError> {
    Searcher::new().best_move(board)
}
