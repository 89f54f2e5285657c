//! Phase consistency: the turn machine agrees with the board.

use super::super::rules::outcome_of;
use super::super::{GameController, GameOutcome, Phase};
use super::Invariant;

/// Invariant: `GameOver` carries exactly the outcome derived from the board,
/// and an ongoing game waits for the player who did not move last.
pub struct PhaseConsistentInvariant;

impl Invariant<GameController> for PhaseConsistentInvariant {
    fn holds(game: &GameController) -> bool {
        let outcome = outcome_of(game.board());
        match game.phase() {
            Phase::GameOver(recorded) => recorded == outcome && outcome.is_over(),
            phase => {
                let expected = match game.history().last() {
                    Some(last) => last.player.opponent(),
                    None => game.first_mover().player(),
                };
                outcome == GameOutcome::InProgress && phase.to_move() == Some(expected)
            }
        }
    }

    fn description() -> &'static str {
        "Phase matches the outcome derived from the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_fresh_and_played_games_hold() {
        let mut game = GameController::new();
        assert!(PhaseConsistentInvariant::holds(&game));
        game.apply_human_move(0, 0).unwrap();
        assert!(PhaseConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_phase_violates() {
        let mut game = GameController::new();
        game.apply_human_move(0, 0).unwrap();
        game.phase = Phase::AwaitingHumanMove;
        assert!(!PhaseConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_missed_game_over_violates() {
        let mut game = GameController::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            game.board.set(pos, Square::Occupied(Player::X));
        }
        assert!(!PhaseConsistentInvariant::holds(&game));
    }
}
