//! End-of-game scoring.
//!
//! The final tally counts live stones only; there is no territory or komi.
//! It is added on top of the running score built up during play.

use std::fmt;

use crate::board::{Board, Color};

/// Stones of each color on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoneCount {
    pub black: usize,
    pub white: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => write!(f, "Black"),
            Winner::White => write!(f, "White"),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}

/// Count the stones of each color on `board`.
pub fn tally(board: &Board) -> StoneCount {
    StoneCount {
        black: board.count(Color::Black),
        white: board.count(Color::White),
    }
}

/// Higher score wins; equal scores tie.
pub fn winner(black_score: i32, white_score: i32) -> Winner {
    match black_score.cmp(&white_score) {
        std::cmp::Ordering::Greater => Winner::Black,
        std::cmp::Ordering::Less => Winner::White,
        std::cmp::Ordering::Equal => Winner::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    #[test]
    fn test_tally_empty_board() {
        let board = Board::new(BoardSize::Nine);
        assert_eq!(tally(&board), StoneCount::default());
    }

    #[test]
    fn test_tally_counts_stones() {
        let board = Board::from_diagram(BoardSize::Thirteen, &["XXO", "", "..O.X"]).unwrap();
        assert_eq!(tally(&board), StoneCount { black: 3, white: 2 });
    }

    #[test]
    fn test_winner() {
        assert_eq!(winner(3, 2), Winner::Black);
        assert_eq!(winner(-1, 0), Winner::White);
        assert_eq!(winner(0, 0), Winner::Tie);
        assert_eq!(winner(0, 0).to_string(), "Tie");
    }
}
