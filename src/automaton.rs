//! Game-of-Life mutation of the board.
//!
//! One step applies the B3/S23 rules to every point at once, reading only the
//! board as it was before the step. Neighbor counts ignore color; a birth
//! takes the majority color of the three parents, and a tie stays empty.

use tracing::debug;

use crate::board::{Board, Color, Point};
use crate::constants::{BIRTH_COUNT, SURVIVE_MAX, SURVIVE_MIN};

/// Result of one automaton step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Board after all removals and births.
    pub board: Board,
    pub removed_black: usize,
    pub removed_white: usize,
    pub born_black: usize,
    pub born_white: usize,
}

impl Step {
    /// Score change for `color`: each removed stone costs its owner one point.
    /// Births do not score.
    pub fn score_delta(&self, color: Color) -> i32 {
        let removed = match color {
            Color::Black => self.removed_black,
            Color::White => self.removed_white,
        };
        -(removed as i32)
    }

    pub fn removed(&self) -> usize {
        self.removed_black + self.removed_white
    }

    pub fn born(&self) -> usize {
        self.born_black + self.born_white
    }
}

/// Occupied Moore neighbors of `pt` as `(black, white)`.
fn neighbor_colors(board: &Board, pt: Point) -> (usize, usize) {
    board
        .surrounding(pt)
        .fold((0, 0), |(b, w), n| match board.get(n) {
            Some(Color::Black) => (b + 1, w),
            Some(Color::White) => (b, w + 1),
            None => (b, w),
        })
}

/// Fate of a single point given the pre-step board.
fn next_cell(board: &Board, pt: Point) -> Option<Color> {
    let (black, white) = neighbor_colors(board, pt);
    let stones = black + white;
    match board.get(pt) {
        Some(color) if (SURVIVE_MIN..=SURVIVE_MAX).contains(&stones) => Some(color),
        Some(_) => None,
        None if stones == BIRTH_COUNT => {
            if black > white {
                Some(Color::Black)
            } else if white > black {
                Some(Color::White)
            } else {
                None
            }
        }
        None => None,
    }
}

/// Run one synchronous automaton step.
pub fn step(board: &Board) -> Step {
    let mut next = board.clone();
    let mut result = Step {
        board: Board::new(board.board_size()),
        removed_black: 0,
        removed_white: 0,
        born_black: 0,
        born_white: 0,
    };

    for pt in board.points() {
        let before = board.get(pt);
        let after = next_cell(board, pt);
        if before == after {
            continue;
        }
        match (before, after) {
            (Some(Color::Black), None) => result.removed_black += 1,
            (Some(Color::White), None) => result.removed_white += 1,
            (None, Some(Color::Black)) => result.born_black += 1,
            (None, Some(Color::White)) => result.born_white += 1,
            _ => {}
        }
        next.set(pt, after);
    }

    debug!(
        removed_black = result.removed_black,
        removed_white = result.removed_white,
        born_black = result.born_black,
        born_white = result.born_white,
        "automaton step"
    );
    result.board = next;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn diagram(rows: &[&str]) -> Board {
        Board::from_diagram(BoardSize::Nine, rows).unwrap()
    }

    #[test]
    fn test_lone_stone_dies() {
        let board = diagram(&["", "", "", "", "....X"]);
        let s = step(&board);
        assert_eq!(s.board.stones(), 0);
        assert_eq!(s.removed_black, 1);
        assert_eq!(s.score_delta(Color::Black), -1);
        assert_eq!(s.score_delta(Color::White), 0);
    }

    #[test]
    fn test_block_is_stable() {
        let board = diagram(&["", ".XO", ".OX"]);
        let s = step(&board);
        assert_eq!(s.board, board);
        assert_eq!(s.removed(), 0);
        assert_eq!(s.born(), 0);
    }

    #[test]
    fn test_blinker_uses_snapshot() {
        // Horizontal blinker becomes vertical. Updating in place while
        // scanning would kill the middle stone's neighbors early and leave a
        // different pattern.
        let board = diagram(&["", "", "", "", "...XXX"]);
        let s = step(&board);
        let expected = diagram(&["", "", "", "....X", "....X", "....X"]);
        assert_eq!(s.board, expected);
        assert_eq!(s.removed_black, 2);
        assert_eq!(s.born_black, 2);
    }

    #[test]
    fn test_birth_takes_majority_color() {
        // (1,1) has neighbors (0,0)=X, (0,2)=X, (2,1)=O.
        let board = diagram(&["X.X", "...", ".O."]);
        let s = step(&board);
        assert_eq!(s.board.get((1, 1)), Some(Color::Black));

        let board = diagram(&["O.O", "...", ".X."]);
        let s = step(&board);
        assert_eq!(s.board.get((1, 1)), Some(Color::White));
    }

    #[test]
    fn test_overcrowded_stone_dies() {
        // Centre stone has four neighbors.
        let board = diagram(&["X.X", ".O.", "X.X"]);
        let s = step(&board);
        assert_eq!(s.board.get((1, 1)), None);
        assert_eq!(s.removed_white, 1);
    }

    #[test]
    fn test_two_or_four_neighbors_no_birth() {
        let board = diagram(&["X.X"]);
        let s = step(&board);
        assert_eq!(s.board.get((0, 1)), None);
        assert_eq!(s.board.get((1, 1)), None);
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let board = Board::new(BoardSize::Nineteen);
        let s = step(&board);
        assert_eq!(s.board, board);
    }
}
