//! Tic-tac-toe, the one game behind `play`.
//!
//! The player is `X` and moves first; the computer answers as `O` with a
//! fixed preference order (win, block, centre, corners, edges).

use std::fmt;

/// Identifier accepted by `play`.
pub const TICTACTOE: &str = "tictactoe";

/// Display title.
pub const TICTACTOE_TITLE: &str = "Tic-Tac-Toe";

/// Every game `play` accepts.
pub const GAMES: [&str; 1] = [TICTACTOE];

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const PREFERRED: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    fn symbol(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell must be a number from 1 to 9")]
    OutOfRange,
    #[error("cell {0} is already taken")]
    Occupied(usize),
    #[error("the game is over; type 'new' to play again")]
    GameOver,
}

/// What the front end should do after a line of game input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameReply {
    /// Show this text (board and status).
    Text(String),
    /// Leave the game view.
    Exit,
}

/// A tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at 1-based `cell`.
    pub fn cell(&self, cell: usize) -> Option<Mark> {
        cell.checked_sub(1)
            .and_then(|i| self.cells.get(i).copied())
            .flatten()
    }

    pub fn outcome(&self) -> Outcome {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a]
                && self.cells[b] == Some(mark)
                && self.cells[c] == Some(mark)
            {
                return Outcome::Won(mark);
            }
        }
        if self.cells.iter().all(Option::is_some) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Place `X` at 1-based `cell`, then let the computer answer.
    ///
    /// Returns the computer's 1-based cell, or `None` if the player's move
    /// ended the game.
    pub fn play(&mut self, cell: usize) -> Result<Option<usize>, MoveError> {
        if self.outcome() != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if !(1..=9).contains(&cell) {
            return Err(MoveError::OutOfRange);
        }
        if self.cells[cell - 1].is_some() {
            return Err(MoveError::Occupied(cell));
        }
        self.cells[cell - 1] = Some(Mark::X);
        if self.outcome() != Outcome::InProgress {
            return Ok(None);
        }
        let reply = self.computer_move();
        if let Some(i) = reply {
            self.cells[i] = Some(Mark::O);
        }
        Ok(reply.map(|i| i + 1))
    }

    fn computer_move(&self) -> Option<usize> {
        self.winning_cell(Mark::O)
            .or_else(|| self.winning_cell(Mark::X))
            .or_else(|| PREFERRED.into_iter().find(|&i| self.cells[i].is_none()))
    }

    /// A free cell that would complete a line for `mark`.
    fn winning_cell(&self, mark: Mark) -> Option<usize> {
        LINES.iter().find_map(|line| {
            let owned = line.iter().filter(|&&i| self.cells[i] == Some(mark)).count();
            let free: Vec<usize> = line
                .iter()
                .copied()
                .filter(|&i| self.cells[i].is_none())
                .collect();
            (owned == 2 && free.len() == 1).then(|| free[0])
        })
    }

    /// Interpret one line of game input.
    pub fn handle_input(&mut self, input: &str) -> GameReply {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "exit" | "quit" | "q" => return GameReply::Exit,
            "new" | "restart" => {
                *self = Self::new();
                return GameReply::Text(format!("New game. You are X.\n{self}"));
            },
            _ => {},
        }
        let Ok(cell) = input.parse::<usize>() else {
            return GameReply::Text(
                "Enter a cell number (1-9), 'new' to restart or 'exit' to leave.".to_string(),
            );
        };
        match self.play(cell) {
            Ok(_) => GameReply::Text(format!("{self}\n{}", self.status())),
            Err(e) => GameReply::Text(format!("Error: {e}")),
        }
    }

    /// One-line description of the current outcome.
    pub fn status(&self) -> &'static str {
        match self.outcome() {
            Outcome::InProgress => "Your move.",
            Outcome::Won(Mark::X) => "You win!",
            Outcome::Won(Mark::O) => "The computer wins.",
            Outcome::Draw => "It's a draw.",
        }
    }
}

impl fmt::Display for TicTacToe {
    /// Renders the board; free cells show their number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let i = row * 3 + col;
                    match self.cells[i] {
                        Some(mark) => mark.symbol().to_string(),
                        None => (i + 1).to_string(),
                    }
                })
                .collect();
            write!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let game = TicTacToe::new();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!((1..=9).all(|c| game.cell(c).is_none()));
        assert!(game.cell(0).is_none());
        assert!(game.cell(10).is_none());
    }

    #[test]
    fn computer_takes_centre() {
        let mut game = TicTacToe::new();
        assert_eq!(game.play(1), Ok(Some(5)));
        assert_eq!(game.cell(1), Some(Mark::X));
        assert_eq!(game.cell(5), Some(Mark::O));
    }

    #[test]
    fn computer_blocks() {
        let mut game = TicTacToe::new();
        game.play(1).unwrap(); // O takes 5
        assert_eq!(game.play(2), Ok(Some(3)));
    }

    #[test]
    fn computer_wins_when_it_can() {
        let mut game = TicTacToe::new();
        game.play(1).unwrap(); // O: 5
        game.play(9).unwrap(); // O: 3 (corner)
        // O holds 3 and 5; 7 completes the diagonal and X threatens nothing.
        game.play(2).unwrap();
        assert_eq!(game.outcome(), Outcome::Won(Mark::O));
    }

    #[test]
    fn rejects_bad_moves() {
        let mut game = TicTacToe::new();
        assert_eq!(game.play(0), Err(MoveError::OutOfRange));
        assert_eq!(game.play(10), Err(MoveError::OutOfRange));
        game.play(1).unwrap();
        assert_eq!(game.play(1), Err(MoveError::Occupied(1)));
        assert_eq!(game.play(5), Err(MoveError::Occupied(5)));
    }

    #[test]
    fn detects_draw() {
        let mut game = TicTacToe {
            cells: [
                Some(Mark::X),
                Some(Mark::O),
                Some(Mark::X),
                Some(Mark::X),
                Some(Mark::O),
                Some(Mark::O),
                Some(Mark::O),
                Some(Mark::X),
                Some(Mark::X),
            ],
        };
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.play(1), Err(MoveError::GameOver));
    }

    #[test]
    fn player_can_win() {
        let mut game = TicTacToe {
            cells: [
                Some(Mark::X),
                Some(Mark::X),
                None,
                Some(Mark::O),
                Some(Mark::O),
                None,
                None,
                None,
                None,
            ],
        };
        assert_eq!(game.play(3), Ok(None));
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
        assert_eq!(game.status(), "You win!");
    }

    #[test]
    fn board_rendering() {
        let mut game = TicTacToe::new();
        game.play(1).unwrap();
        assert_eq!(
            game.to_string(),
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn input_handling() {
        let mut game = TicTacToe::new();
        assert_eq!(game.handle_input("EXIT"), GameReply::Exit);
        match game.handle_input("7") {
            GameReply::Text(t) => assert!(t.contains("Your move.")),
            GameReply::Exit => panic!("unexpected exit"),
        }
        match game.handle_input("7") {
            GameReply::Text(t) => assert!(t.contains("already taken")),
            GameReply::Exit => panic!("unexpected exit"),
        }
        match game.handle_input("banana") {
            GameReply::Text(t) => assert!(t.contains("1-9")),
            GameReply::Exit => panic!("unexpected exit"),
        }
        game.handle_input("new");
        assert_eq!(game, TicTacToe::new());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn random_play_never_overwrites(moves in proptest::collection::vec(1usize..=9, 0..30)) {
                let mut game = TicTacToe::new();
                for cell in moves {
                    let before = game.clone();
                    if game.play(cell).is_err() {
                        prop_assert_eq!(&game, &before);
                    }
                }
                let xs = game.cells.iter().filter(|c| **c == Some(Mark::X)).count();
                let os = game.cells.iter().filter(|c| **c == Some(Mark::O)).count();
                prop_assert!(xs == os || xs == os + 1);
            }
        }
    }
}
