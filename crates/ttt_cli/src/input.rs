//! Parsing of terminal input: move commands and board diagrams.

use ttt_engine::{Board, Player, Position, Square};

/// A line typed by the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell. Coordinates are passed to the engine unchecked.
    Place {
        /// Row (0-2).
        row: usize,
        /// Column (0-2).
        col: usize,
    },
    /// Show the engine's suggestion for the human.
    Hint,
    /// Start a new game.
    NewGame,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Neither a command, coordinates, cell number nor label.
    #[display("Unrecognized input '{}'. Try 'row col', a cell 1-9, a label like 'center', 'hint', 'new' or 'quit'", _0)]
    Unrecognized(String),

    /// Board diagram does not have three rows of three cells.
    #[display("Board must be three rows of three cells separated by '|', got '{}'", _0)]
    BoardShape(String),

    /// Board diagram contains a character other than X, O or '.'.
    #[display("Unexpected cell '{}' in board diagram", _0)]
    BoardCell(char),
}

impl std::error::Error for InputError {}

/// Parses one line of human input.
///
/// Accepts `row col` (zero-based), a cell number 1-9 or a cell label, plus
/// the `hint`, `new` and `quit` commands.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "hint" | "h" | "?" => return Ok(Command::Hint),
        "new" | "n" | "restart" => return Ok(Command::NewGame),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        return Ok(Command::Place { row, col });
    }

    Position::from_label_or_number(trimmed)
        .map(|pos| Command::Place {
            row: pos.row(),
            col: pos.col(),
        })
        .ok_or_else(|| InputError::Unrecognized(trimmed.to_string()))
}

/// Parses a diagram such as `XO.|.X.|..O` into a board.
///
/// `.`, `-`, `_` and spaces mark empty cells; letters are case-insensitive.
pub fn parse_board(diagram: &str) -> Result<Board, InputError> {
    let rows: Vec<&str> = diagram.trim().split('|').collect();
    if rows.len() != 3 || rows.iter().any(|row| row.chars().count() != 3) {
        return Err(InputError::BoardShape(diagram.to_string()));
    }

    let mut board = Board::new();
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.chars().enumerate() {
            let square = match cell.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => return Err(InputError::BoardCell(other)),
            };
            if let Some(pos) = Position::from_row_col(row, col) {
                board.set(pos, square);
            }
        }
    }
    Ok(board)
}
