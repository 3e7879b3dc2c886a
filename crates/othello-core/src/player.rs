use std::fmt;

use crate::disc::Disc;

/// One of the two sides of a game. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    Black,
    White,
}

impl Player {
    /// Returns the other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The disc this side places.
    #[inline]
    pub fn disc(self) -> Disc {
        match self {
            Player::Black => Disc::Black,
            Player::White => Disc::White,
        }
    }

    /// Integer player code used by the oracle query.
    pub fn code(self) -> u8 {
        self.disc().code()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}
