//! Stone placement: capture resolution and the suicide rule.
//!
//! Everything here is pure. The caller owns the board and the scores and
//! decides what to commit.

use tracing::debug;

use crate::board::{Board, Color, Point};
use crate::error::Rejection;
use crate::group::{Group, has_liberty};

/// A legal placement, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Board after the stone is placed and captures are removed.
    pub board: Board,
    /// Number of opponent stones removed.
    pub captured: usize,
}

/// Put a `color` stone on `placed` and remove every adjacent opponent group
/// left without liberties.
///
/// Groups are judged on the board with the new stone in place and before any
/// removal, so all groups killed by the move go together. A group touching
/// the new stone from several sides is removed (and counted) once. The
/// mover's own stones are never removed here.
///
/// A point off the board or already occupied places nothing and captures
/// nothing: the board comes back unchanged.
pub fn apply_captures(board: &Board, placed: Point, color: Color) -> (Board, usize) {
    if !board.contains(placed) || board.get(placed).is_some() {
        return (board.clone(), 0);
    }

    let mut placed_board = board.clone();
    placed_board.set(placed, Some(color));

    let opp = color.opponent();
    let mut removed = vec![false; board.size() * board.size()];
    let mut to_remove: Vec<Point> = Vec::new();

    for n in placed_board.neighbors(placed) {
        if placed_board.get(n) != Some(opp) || removed[placed_board.index_of(n)] {
            continue;
        }
        if let Some(group) = Group::find(&placed_board, n) {
            if group.liberties == 0 {
                for &pt in &group.stones {
                    removed[placed_board.index_of(pt)] = true;
                }
                to_remove.extend(group.stones);
            }
        }
    }

    let mut next = placed_board;
    for &pt in &to_remove {
        next.set(pt, None);
    }
    (next, to_remove.len())
}

/// Check and resolve a `color` stone at `pt`.
///
/// A move that captures nothing and leaves its own group without liberties is
/// suicide. A capturing move is always legal.
pub fn resolve_placement(board: &Board, pt: Point, color: Color) -> Result<Placement, Rejection> {
    if !board.contains(pt) {
        return Err(Rejection::OutOfBounds);
    }
    if board.get(pt).is_some() {
        return Err(Rejection::Occupied);
    }

    let (next, captured) = apply_captures(board, pt, color);
    if captured == 0 && !has_liberty(&next, pt, color) {
        return Err(Rejection::Suicide);
    }
    if captured > 0 {
        debug!(?pt, %color, captured, "stones captured");
    }
    Ok(Placement {
        board: next,
        captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn diagram(rows: &[&str]) -> Board {
        Board::from_diagram(BoardSize::Nine, rows).unwrap()
    }

    #[test]
    fn test_capture_single_stone() {
        let board = diagram(&["", "", "", "...X", "..XOX", "", ""]);
        let (next, captured) = apply_captures(&board, (5, 3), Color::Black);
        assert_eq!(captured, 1);
        assert_eq!(next.get((4, 3)), None, "Captured stone should be removed");
        assert_eq!(next.get((5, 3)), Some(Color::Black));
    }

    #[test]
    fn test_capture_corner() {
        let board = diagram(&["OX"]);
        let (next, captured) = apply_captures(&board, (1, 0), Color::Black);
        assert_eq!(captured, 1);
        assert_eq!(next.get((0, 0)), None);
    }

    #[test]
    fn test_capture_group() {
        // White pair at (1,1),(1,2) with a single liberty at (2,1).
        let board = diagram(&[".XX.", "XOOX", "..X."]);
        let (next, captured) = apply_captures(&board, (2, 1), Color::Black);
        assert_eq!(captured, 2);
        assert_eq!(next.get((1, 1)), None);
        assert_eq!(next.get((1, 2)), None);
    }

    #[test]
    fn test_group_touched_from_several_sides_counted_once() {
        // One white group surrounds (1,1) on all four sides.
        let board = diagram(&["OOX", "O.OX", "OOOX", "XXX"]);
        let (next, captured) = apply_captures(&board, (1, 1), Color::Black);
        assert_eq!(captured, 7);
        assert_eq!(next.count(Color::White), 0);
        assert_eq!(next.get((1, 1)), Some(Color::Black));
    }

    #[test]
    fn test_multiple_groups_captured() {
        // Two separate white stones share (0,2) as their last liberty.
        let board = diagram(&["XO.OX", ".X.X."]);
        let (next, captured) = apply_captures(&board, (0, 2), Color::Black);
        assert_eq!(captured, 2);
        assert_eq!(next.get((0, 1)), None);
        assert_eq!(next.get((0, 3)), None);
    }

    #[test]
    fn test_never_captures_own_stones() {
        // Black connects its own stones next to white stones that still
        // have liberties.
        let board = diagram(&[".X", "XO", "O"]);
        let (next, captured) = apply_captures(&board, (0, 0), Color::Black);
        assert_eq!(captured, 0);
        assert_eq!(next.get((0, 1)), Some(Color::Black));
        assert_eq!(next.get((1, 0)), Some(Color::Black));
    }

    #[test]
    fn test_suicide_rejected() {
        let board = diagram(&[".X", "X"]);
        assert_eq!(
            resolve_placement(&board, (0, 0), Color::White),
            Err(Rejection::Suicide)
        );
    }

    #[test]
    fn test_capture_is_not_suicide() {
        // Black at (0,1) has no empty neighbor, but it takes the last
        // liberty of the white stone in the corner.
        let board = diagram(&["O.O", "XO"]);
        let placement = resolve_placement(&board, (0, 1), Color::Black).unwrap();
        assert_eq!(placement.captured, 1);
        assert_eq!(placement.board.get((0, 1)), Some(Color::Black));
        assert_eq!(placement.board.get((0, 0)), None);
    }

    #[test]
    fn test_occupied_and_off_board() {
        let board = diagram(&["X"]);
        assert_eq!(
            resolve_placement(&board, (0, 0), Color::White),
            Err(Rejection::Occupied)
        );
        assert_eq!(
            resolve_placement(&board, (0, 9), Color::White),
            Err(Rejection::OutOfBounds)
        );
    }

    #[test]
    fn test_off_board_point_captures_nothing() {
        // White in the bottom-left corner is already out of liberties.
        let board = diagram(&["", "", "", "", "", "", "", "X", "OX"]);
        let (next, captured) = apply_captures(&board, (9, 0), Color::Black);
        assert_eq!(captured, 0);
        assert_eq!(next, board);
        assert_eq!(next.get((8, 0)), Some(Color::White));
    }

    #[test]
    fn test_occupied_point_is_not_overwritten() {
        let board = diagram(&["", "", "", "", "", "", "", "X", "OX"]);
        let (next, captured) = apply_captures(&board, (7, 0), Color::Black);
        assert_eq!(captured, 0);
        assert_eq!(next, board);

        let (next, captured) = apply_captures(&board, (8, 1), Color::White);
        assert_eq!(captured, 0);
        assert_eq!(next.get((8, 1)), Some(Color::Black));
    }
}
