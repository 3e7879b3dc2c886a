//! Reversi board storage for any even edge length.

use std::fmt;

use crate::constants::MIN_BOARD_SIZE;
use crate::coord::{Coord, column_label};
use crate::disc::Disc;
use crate::error::GameError;

/// A square Reversi board.
///
/// Cells are stored row-major in a single vector. The board holds no rules of
/// its own: legality lives in [`crate::legality`] and mutation in
/// [`crate::flip`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Disc>,
}

/// Creates a board of the given size in the starting position.
///
/// # Errors
///
/// Returns [`GameError::InvalidBoardSize`] for odd sizes or sizes below 4.
pub fn new_game(size: usize) -> Result<Board, GameError> {
    Board::new(size)
}

/// Checks that `size` is a playable board edge: even and at least 4.
///
/// # Errors
///
/// Returns [`GameError::InvalidBoardSize`] otherwise.
pub fn validate_size(size: usize) -> Result<(), GameError> {
    if size < MIN_BOARD_SIZE || !size.is_multiple_of(2) {
        return Err(GameError::InvalidBoardSize(size));
    }
    Ok(())
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    ///
    /// With `mid = size / 2` the four center cells are populated as
    /// `(mid-1, mid-1)` and `(mid, mid)` White, `(mid-1, mid)` and
    /// `(mid, mid-1)` Black. Every other cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for odd sizes or sizes below 4.
    pub fn new(size: usize) -> Result<Board, GameError> {
        let mut board = Board::empty(size)?;
        let mid = size / 2;
        board.set(Coord::new(mid - 1, mid - 1), Disc::White);
        board.set(Coord::new(mid, mid), Disc::White);
        board.set(Coord::new(mid - 1, mid), Disc::Black);
        board.set(Coord::new(mid, mid - 1), Disc::Black);
        Ok(board)
    }

    /// Creates a board with no discs on it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for odd sizes or sizes below 4.
    pub fn empty(size: usize) -> Result<Board, GameError> {
        validate_size(size)?;
        Ok(Board {
            size,
            cells: vec![Disc::Empty; size * size],
        })
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string lists the cells row by row: `X` for Black, `O` for White,
    /// `-` for empty. Whitespace is ignored, so the output of
    /// [`Board::to_string_as_board`] parses back.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is invalid, a character is not a cell
    /// symbol, or the cell count is not `size * size`.
    pub fn from_string(size: usize, board_string: &str) -> Result<Board, GameError> {
        let mut board = Board::empty(size)?;
        let cells = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Disc::from_char(c)
                    .ok_or_else(|| GameError::InvalidBoardString(format!("unexpected '{c}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != size * size {
            return Err(GameError::InvalidBoardString(format!(
                "expected {} cells, found {}",
                size * size,
                cells.len()
            )));
        }
        board.cells = cells;
        Ok(board)
    }

    /// Returns the edge length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Fails with [`GameError::OutOfBounds`] if `coord` is off the board.
    pub fn check_bounds(&self, coord: Coord) -> Result<(), GameError> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    /// Gets the disc at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Disc {
        self.cells[coord.index(self.size)]
    }

    /// Writes a cell. Only move execution mutates a live board.
    #[inline]
    pub(crate) fn set(&mut self, coord: Coord, disc: Disc) {
        let idx = coord.index(self.size);
        self.cells[idx] = disc;
    }

    /// Iterates all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size * size).map(move |i| Coord::from_index(i, size))
    }

    /// Iterates the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Disc]> {
        self.cells.chunks(self.size)
    }

    /// Counts the cells holding `disc`.
    pub fn count(&self, disc: Disc) -> usize {
        self.cells.iter().filter(|&&d| d == disc).count()
    }

    /// Returns the number of empty cells.
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.count(Disc::Empty)
    }

    /// Returns `true` once every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Disc::Empty)
    }

    /// Converts the board to a string representation.
    ///
    /// One line per row using `X`, `O` and `-`, as accepted by
    /// [`Board::from_string`].
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(self.size * (self.size + 1));
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                s.push('\n');
            }
            s.extend(row.iter().map(|d| d.to_char()));
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();
        write!(f, "{:width$} ", "")?;
        for col in 0..self.size {
            write!(f, " {}", column_label(col))?;
        }
        writeln!(f)?;
        for (i, row) in self.rows().enumerate() {
            write!(f, "{:>width$} ", i + 1)?;
            for disc in row {
                write!(f, " {}", disc.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
