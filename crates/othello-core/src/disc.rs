/// Represents the content of a cell.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - Represents an empty cell on the board.
/// * `Black` - Represents a black disc.
/// * `White` - Represents a white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disc {
    #[default]
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses the character produced by [`Disc::to_char`].
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            '-' => Some(Disc::Empty),
            'X' | 'x' => Some(Disc::Black),
            'O' | 'o' => Some(Disc::White),
            _ => None,
        }
    }

    /// Integer cell code used by the oracle query: 0 empty, 1 black, 2 white.
    pub fn code(self) -> u8 {
        match self {
            Disc::Empty => 0,
            Disc::Black => 1,
            Disc::White => 2,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Disc::Empty
    }
}
