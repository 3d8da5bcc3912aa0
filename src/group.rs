//! Group and liberty analysis.
//!
//! Both walks are iterative flood fills over 4-connected stones of one color,
//! with an explicit work stack and a visited mask indexed by board point, so
//! even a board-spanning group on 19x19 costs one pass.

use crate::board::{Board, Color, Point};

/// A maximal 4-connected set of same-colored stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    /// Member points, in discovery order.
    pub stones: Vec<Point>,
    /// Number of distinct empty points adjacent to the group.
    pub liberties: usize,
}

impl Group {
    /// Collect the group containing `start`, or `None` if `start` is empty
    /// or off the board.
    pub fn find(board: &Board, start: Point) -> Option<Group> {
        let color = board.get(start)?;
        let area = board.size() * board.size();
        let mut stack = vec![start];
        let mut visited = vec![false; area];
        let mut liberty_seen = vec![false; area];
        let mut stones = Vec::new();
        let mut liberties = 0;

        while let Some(pt) = stack.pop() {
            let i = board.index_of(pt);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            stones.push(pt);

            for n in board.neighbors(pt) {
                let ni = board.index_of(n);
                match board.get(n) {
                    None => {
                        if !liberty_seen[ni] {
                            liberty_seen[ni] = true;
                            liberties += 1;
                        }
                    }
                    Some(c) if c == color && !visited[ni] => stack.push(n),
                    _ => {}
                }
            }
        }

        Some(Group {
            color,
            stones,
            liberties,
        })
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.stones.contains(&pt)
    }
}

/// Does the `color` group reachable from `start` touch at least one empty point?
///
/// An empty `start` is its own liberty. A `start` holding the other color, or
/// lying off the board, has no `color` group and yields `false`. The walk
/// stops at the first liberty found.
pub fn has_liberty(board: &Board, start: Point, color: Color) -> bool {
    if !board.contains(start) {
        return false;
    }
    match board.get(start) {
        None => return true,
        Some(c) if c != color => return false,
        Some(_) => {}
    }

    let mut stack = vec![start];
    let mut visited = vec![false; board.size() * board.size()];

    while let Some(pt) = stack.pop() {
        let i = board.index_of(pt);
        if visited[i] {
            continue;
        }
        visited[i] = true;

        for n in board.neighbors(pt) {
            match board.get(n) {
                None => return true,
                Some(c) if c == color && !visited[board.index_of(n)] => stack.push(n),
                _ => {}
            }
        }
    }
    false
}
