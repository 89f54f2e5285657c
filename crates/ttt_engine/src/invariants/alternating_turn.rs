//! Alternating turn invariant: the opener moves first, then marks alternate.

use super::super::GameController;
use super::Invariant;

/// Invariant: players alternate, starting with the game's opener.
///
/// Also checks the mark counts, which can never differ by more than one.
pub struct AlternatingTurnInvariant;

impl Invariant<GameController> for AlternatingTurnInvariant {
    fn holds(game: &GameController) -> bool {
        let history = game.history();
        let opener = game.first_mover().player();

        if let Some(first) = history.first()
            && first.player != opener
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let board = game.board();
        board.count(opener) >= board.count(opener.opponent())
            && board.count(opener) - board.count(opener.opponent()) <= 1
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opener"
    }
}
