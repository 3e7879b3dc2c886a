use std::fmt;
use std::str::FromStr;

use crate::constants::Direction;

/// A cell on the board, addressed by zero-based row and column.
///
/// Coordinates order lexicographically by `(row, col)`, which is the order
/// used to break ties between equally acceptable moves.
///
/// The textual form follows the usual Reversi notation: a column label
/// (`a`, `b`, ..., `z`, `aa`, `ab`, ...) followed by the one-based row,
/// so `Coord::new(2, 3)` is written `d3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Returns `true` if the coordinate lies on a `size` x `size` board.
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Moves one step in `dir`.
    ///
    /// # Returns
    ///
    /// `None` if the step leaves a `size` x `size` board.
    #[inline]
    pub fn step(self, dir: Direction, size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dir.0)?;
        let col = self.col.checked_add_signed(dir.1)?;
        let next = Coord { row, col };
        next.in_bounds(size).then_some(next)
    }

    /// Row-major index on a `size` x `size` board.
    #[inline]
    pub fn index(self, size: usize) -> usize {
        debug_assert!(self.in_bounds(size), "{self:?} outside {size}x{size}");
        self.row * size + self.col
    }

    /// Inverse of [`Coord::index`].
    #[inline]
    pub fn from_index(index: usize, size: usize) -> Coord {
        Coord {
            row: index / size,
            col: index % size,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// Column label for a zero-based column index.
pub fn column_label(col: usize) -> String {
    let mut n = col + 1;
    let mut label = Vec::new();
    while n > 0 {
        n -= 1;
        label.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// Errors that can occur when parsing a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("invalid coordinate format: expected column letters then a row number (e.g. 'd3')")]
    InvalidFormat,

    #[error("invalid row '{0}': rows start at 1")]
    InvalidRow(String),
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parses algebraic notation such as `d3` or `AB12`.
    ///
    /// Only the notation is checked here. Whether the coordinate fits a given
    /// board is decided by the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or(CoordError::InvalidFormat)?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() || digits.is_empty() {
            return Err(CoordError::InvalidFormat);
        }

        let col = letters
            .bytes()
            .map(|b| (b.to_ascii_lowercase() - b'a') as usize + 1)
            .try_fold(0usize, |acc, v| acc.checked_mul(26)?.checked_add(v))
            .ok_or(CoordError::InvalidFormat)?
            - 1;

        let row: usize = digits
            .parse()
            .map_err(|_| CoordError::InvalidRow(digits.to_string()))?;
        if row == 0 {
            return Err(CoordError::InvalidRow(digits.to_string()));
        }

        Ok(Coord { row: row - 1, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_label(self.col), self.row + 1)
    }
}
