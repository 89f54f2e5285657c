//! Terminal sessions: interactive play, self-play and position analysis.

use crate::config::PlayConfig;
use crate::input::{Command, parse_command};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use ttt_engine::{
    Board, GameController, GameOutcome, Phase, Player, Position, Score, Searcher, is_terminal,
    outcome_of,
};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by the human.
    pub human_wins: u32,
    /// Games won by the engine.
    pub ai_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Player::X) => self.human_wins += 1,
            GameOutcome::Won(Player::O) => self.ai_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.ai_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} game(s): {} won by you, {} by the AI, {} drawn",
            self.games(),
            self.human_wins,
            self.ai_wins,
            self.draws
        )
    }
}

fn write_scores<W: Write>(output: &mut W, scored: &[(Position, Score)]) -> Result<()> {
    for (pos, score) in scored {
        let verdict = match score.signum() {
            1 => "O wins",
            -1 => "X wins",
            _ => "draw",
        };
        writeln!(output, "  {:<22} {:>2}  {}", pos.to_string(), score, verdict)?;
    }
    Ok(())
}

/// Runs an interactive game loop until `quit` or end of input.
///
/// The engine moves as soon as it is its turn; the human is prompted
/// otherwise. Rejected moves are reported and the prompt repeats.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(input: R, output: &mut W, config: &PlayConfig) -> Result<Tally> {
    let mut game = GameController::with_first_mover(*config.first_mover());
    let mut tally = Tally::default();
    let mut lines = input.lines();

    writeln!(output, "You are X, the AI is O.")?;
    loop {
        if game.phase() == Phase::AwaitingAiMove {
            if *config.show_scores() {
                let scored = Searcher::new().scored_moves(game.board(), Player::O);
                writeln!(output, "AI candidates:")?;
                write_scores(output, &scored)?;
            }
            let (position, outcome) = game.run_ai_turn()?;
            writeln!(output, "AI plays {}", position)?;
            tally.record(outcome);
            continue;
        }

        writeln!(output, "\n{}\n", game.board().display())?;
        match game.phase() {
            Phase::GameOver(outcome) => {
                writeln!(output, "{} Type 'new' to play again or 'quit'.", outcome)?
            }
            _ => write!(output, "Your move (row col, 1-9, or a label): ")?,
        }
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Ok(Command::Place { row, col }) => match game.apply_human_move(row, col) {
                Ok(outcome) => tally.record(outcome),
                Err(e) => writeln!(output, "{}", e)?,
            },
            Ok(Command::Hint) => {
                if game.is_terminal() {
                    writeln!(output, "The game is over.")?;
                } else {
                    let hint = Searcher::new().best_move_for(game.board(), Player::X)?;
                    writeln!(output, "Hint: {}", hint)?;
                }
            }
            Ok(Command::NewGame) => game.reset(),
            Ok(Command::Quit) => break,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    info!(games = tally.games(), "Session finished");
    writeln!(output, "{}", tally)?;
    Ok(tally)
}

/// Plays `games` engine-versus-engine games, alternating the opener.
#[instrument(skip(output))]
pub fn self_play<W: Write>(games: u32, output: &mut W) -> Result<Tally> {
    let mut tally = Tally::default();
    for game in 0..games {
        let mut to_move = if game % 2 == 0 { Player::X } else { Player::O };
        let mut board = Board::new();
        let mut searcher = Searcher::new();
        let mut moves = Vec::new();

        while !is_terminal(&board) {
            let pos = searcher.best_move_for(&board, to_move)?;
            board = board.with_mark(pos, to_move);
            moves.push(format!("{}{}", to_move, pos.to_index() + 1));
            to_move = to_move.opponent();
        }

        let outcome = outcome_of(&board);
        tally.record(outcome);
        writeln!(
            output,
            "Game {}: {} [{}] ({} positions searched)",
            game + 1,
            outcome,
            moves.join(" "),
            searcher.stats().nodes()
        )?;
    }
    writeln!(output, "{}", tally)?;
    Ok(tally)
}

/// Prints the score of every available move for `to_move`.
#[instrument(skip(board, output))]
pub fn analyze<W: Write>(board: &Board, to_move: Player, output: &mut W) -> Result<()> {
    writeln!(output, "{}\n", board.display())?;
    if is_terminal(board) {
        writeln!(output, "{}", outcome_of(board))?;
        return Ok(());
    }

    let mut searcher = Searcher::new();
    let scored = searcher.scored_moves(board, to_move);
    writeln!(output, "{} to move:", to_move)?;
    write_scores(output, &scored)?;
    let best = searcher.best_move_for(board, to_move)?;
    writeln!(output, "Best: {}", best)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_board;
    use std::io::Cursor;
    use ttt_engine::FirstMover;

    fn run(script: &str, config: &PlayConfig) -> (Tally, String) {
        let mut output = Vec::new();
        let tally = play(Cursor::new(script.to_string()), &mut output, config).unwrap();
        (tally, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_human_move_gets_ai_reply() {
        let (tally, output) = run("1 1\nquit\n", &PlayConfig::default());
        assert!(output.contains("AI plays"));
        assert_eq!(tally.games(), 0);
    }

    #[test]
    fn test_occupied_cell_reported() {
        let (_, output) = run("5\n5\nq\n", &PlayConfig::default());
        assert!(output.contains("Center (1, 1) is already occupied"));
    }

    #[test]
    fn test_unrecognized_input_reported() {
        let (_, output) = run("banana\n", &PlayConfig::default());
        assert!(output.contains("Unrecognized input 'banana'"));
    }

    #[test]
    fn test_ai_first_opens_top_left() {
        let config = PlayConfig::default().with_first_mover(FirstMover::Ai);
        let (_, output) = run("", &config);
        assert!(output.contains("AI plays Top-left (0, 0)"));
    }

    #[test]
    fn test_full_game_ends_without_human_win() {
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\nquit\n";
        let (tally, output) = run(script, &PlayConfig::default());
        assert_eq!(tally.games(), 1);
        assert_eq!(tally.human_wins, 0);
        assert!(output.contains("Type 'new' to play again"));
    }

    #[test]
    fn test_show_scores_lists_candidates() {
        let config = PlayConfig::default().with_show_scores(true);
        let (_, output) = run("1 1\nq\n", &config);
        assert!(output.contains("AI candidates:"));
        assert!(output.contains("Top-left (0, 0)"));
    }

    #[test]
    fn test_self_play_always_draws() {
        let mut output = Vec::new();
        let tally = self_play(2, &mut output).unwrap();
        assert_eq!(tally.draws, 2);
        assert_eq!(tally.games(), 2);
    }

    #[test]
    fn test_analyze_names_blocking_move() {
        let board = parse_board("...|.O.|XX.").unwrap();
        let mut output = Vec::new();
        analyze(&board, Player::O, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Best: Bottom-right (2, 2)"));
    }
}
