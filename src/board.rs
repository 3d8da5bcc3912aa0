//! Square board of stones.
//!
//! The board is a flat row-major vector of cells whose side is fixed when the
//! board is created. Points are `(row, col)` pairs, row 0 at the top.
//! Out-of-range points read as empty and are never written.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ORTHOGONAL, SURROUNDING};
use crate::error::ConfigError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player's color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Content of a single point: `None` is empty.
pub type Cell = Option<Color>;

/// A `(row, col)` pair, 0-indexed.
pub type Point = (usize, usize);

/// One of the board sizes a game can be played on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardSize {
    Nine,
    Thirteen,
    Nineteen,
}

impl BoardSize {
    /// Side length in points.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Nine => 9,
            BoardSize::Thirteen => 13,
            BoardSize::Nineteen => 19,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            _ => Err(ConfigError::BoardSize(side)),
        }
    }
}

impl FromStr for BoardSize {
    type Err = ConfigError;

    /// Accepts `9`, `13`, `19` as well as `9x9` style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let side = s.split(['x', 'X']).next().unwrap_or(s);
        match side.parse::<usize>() {
            Ok(n) => BoardSize::try_from(n),
            Err(_) => Err(ConfigError::UnknownBoardSize(s.to_string())),
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.side();
        write!(f, "{n}x{n}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board.
    pub fn new(size: BoardSize) -> Self {
        let n = size.side();
        Self {
            size,
            cells: vec![None; n * n],
        }
    }

    /// Build a board from a text diagram, one string per row from the top.
    ///
    /// `X`/`B` are black, `O`/`W` are white, `.`/`+` are empty and spaces are
    /// ignored. Missing rows and trailing columns are left empty. Returns
    /// `None` for an unknown character or a diagram larger than the board.
    pub fn from_diagram(size: BoardSize, rows: &[&str]) -> Option<Self> {
        let n = size.side();
        if rows.len() > n {
            return None;
        }
        let mut board = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            let mut col = 0;
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = match ch.to_ascii_uppercase() {
                    'X' | 'B' => Some(Color::Black),
                    'O' | 'W' => Some(Color::White),
                    '.' | '+' => None,
                    _ => return None,
                };
                if col >= n {
                    return None;
                }
                board.set((row, col), cell);
                col += 1;
            }
        }
        Some(board)
    }

    pub fn size(&self) -> usize {
        self.size.side()
    }

    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size() && col < self.size()
    }

    /// Dense index of a point, for visited masks sized `size * size`.
    pub(crate) fn index_of(&self, (row, col): Point) -> usize {
        row * self.size() + col
    }

    pub fn get(&self, pt: Point) -> Cell {
        if !self.contains(pt) {
            return None;
        }
        self.cells[self.index_of(pt)]
    }

    pub fn is_empty_at(&self, pt: Point) -> bool {
        self.contains(pt) && self.get(pt).is_none()
    }

    /// Overwrite a point. Points off the board are ignored.
    pub fn set(&mut self, pt: Point, cell: Cell) {
        if self.contains(pt) {
            let i = self.index_of(pt);
            self.cells[i] = cell;
        }
    }

    fn offset(&self, (row, col): Point, (dr, dc): (isize, isize)) -> Option<Point> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.contains((r, c)).then_some((r, c))
    }

    /// On-board orthogonal neighbors (N, E, S, W).
    pub fn neighbors(&self, pt: Point) -> impl Iterator<Item = Point> + '_ {
        ORTHOGONAL.iter().filter_map(move |&d| self.offset(pt, d))
    }

    /// On-board points of the 8-point Moore neighborhood.
    pub fn surrounding(&self, pt: Point) -> impl Iterator<Item = Point> + '_ {
        SURROUNDING.iter().filter_map(move |&d| self.offset(pt, d))
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let n = self.size();
        (0..n).flat_map(move |row| (0..n).map(move |col| (row, col)))
    }

    /// Number of stones of the given color.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Number of occupied points.
    pub fn stones(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Parse a vertex such as `D4` for a board of side `n`.
///
/// Columns use letters A-T, skipping I (Go convention to avoid confusion with
/// J). Row 1 is the bottom line of the board.
pub fn parse_vertex(s: &str, n: usize) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return None;
    }
    let mut col = (col_char as u8 - b'A') as usize;
    if col_char > 'I' {
        col -= 1;
    }

    let number: usize = chars.as_str().parse().ok()?;
    if number == 0 || number > n || col >= n {
        return None;
    }
    Some((n - number, col))
}

/// Vertex name of a point on a board of side `n` (e.g. `(5, 3)` on 9x9 is `D4`).
pub fn vertex_name((row, col): Point, n: usize) -> String {
    let mut c = (b'A' + col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }
    format!("{c}{}", n - row)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            write!(f, "{:>2} ", n - row)?;
            for col in 0..n {
                let ch = match self.get((row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..n {
            let name = vertex_name((0, col), n);
            write!(f, "{} ", &name[..1])?;
        }
        writeln!(f)
    }
}
