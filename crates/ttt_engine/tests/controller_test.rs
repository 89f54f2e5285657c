//! Tests for the human-versus-engine turn machine.

use ttt_engine::{
    Board, FirstMover, GameController, GameOutcome, MoveError, Phase, Player, Position, Square,
    is_terminal,
};

#[test]
fn test_rejects_second_move_on_same_cell() {
    let mut game = GameController::new();
    game.apply_human_move(0, 0).unwrap();
    let board = *game.board();

    assert_eq!(
        game.apply_human_move(0, 0),
        Err(MoveError::CellOccupied(Position::TopLeft))
    );
    assert_eq!(*game.board(), board);
    assert_eq!(game.phase(), Phase::AwaitingAiMove);
}

#[test]
fn test_engine_blocks_open_line() {
    let mut game = GameController::new();
    game.apply_human_move(2, 0).unwrap();
    // Against a corner opening only the center holds the draw.
    let (first, _) = game.run_ai_turn().unwrap();
    assert_eq!(first, Position::Center);

    game.apply_human_move(2, 1).unwrap();
    let (reply, outcome) = game.run_ai_turn().unwrap();
    assert_eq!(reply, Position::BottomRight);
    assert_eq!(outcome, GameOutcome::InProgress);
}

#[test]
fn test_top_row_is_terminal_immediately() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::TopCenter, Square::Occupied(Player::X));
    board.set(Position::MiddleLeft, Square::Occupied(Player::O));
    board.set(Position::Center, Square::Occupied(Player::O));
    assert!(!is_terminal(&board));

    board.set(Position::TopRight, Square::Occupied(Player::X));
    assert!(is_terminal(&board));
}

#[test]
fn test_full_game_never_lost_by_engine() {
    // Human plays cells in a fixed order, skipping taken ones.
    let order = [(0, 0), (2, 2), (0, 2), (2, 0), (1, 0), (0, 1), (1, 2), (2, 1), (1, 1)];
    for first_mover in [FirstMover::Human, FirstMover::Ai] {
        let mut game = GameController::with_first_mover(first_mover);
        let mut tries = order.into_iter();
        loop {
            match game.phase() {
                Phase::AwaitingHumanMove => {
                    let (row, col) = tries.next().unwrap();
                    match game.apply_human_move(row, col) {
                        Ok(_) | Err(MoveError::CellOccupied(_)) => {}
                        Err(e) => panic!("unexpected error: {e}"),
                    }
                }
                Phase::AwaitingAiMove => {
                    game.run_ai_turn().unwrap();
                }
                Phase::GameOver(outcome) => {
                    assert_ne!(outcome, GameOutcome::Won(Player::X));
                    assert_eq!(outcome, game.outcome());
                    break;
                }
            }
        }
    }
}

#[test]
fn test_history_records_both_sides() {
    let mut game = GameController::new();
    game.apply_human_move(1, 1).unwrap();
    let (reply, _) = game.run_ai_turn().unwrap();

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, Player::X);
    assert_eq!(history[0].position, Position::Center);
    assert_eq!(history[1].player, Player::O);
    assert_eq!(history[1].position, reply);
}

#[test]
fn test_errors_display() {
    assert_eq!(
        MoveError::CellOccupied(Position::TopLeft).to_string(),
        "Top-left (0, 0) is already occupied"
    );
    assert_eq!(
        MoveError::OutOfBounds { row: 4, col: 0 }.to_string(),
        "Cell (4, 0) is outside the 3x3 board"
    );
    assert_eq!(MoveError::GameAlreadyOver.to_string(), "Game is already over");
}
