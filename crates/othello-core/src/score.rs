//! Disc counting.

use std::cmp::Ordering;
use std::fmt;

use crate::board::Board;
use crate::disc::Disc;
use crate::player::Player;

/// Disc counts for both sides. Always derived from a board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Returns the counts as `(black, white)`.
    pub fn as_tuple(self) -> (usize, usize) {
        (self.black, self.white)
    }

    /// Total number of discs on the board.
    pub fn total(self) -> usize {
        self.black + self.white
    }

    /// The side with more discs, or `None` on a tie.
    pub fn leader(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Player::Black),
            Ordering::Less => Some(Player::White),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

/// Counts the discs of each color on `board`.
pub fn score(board: &Board) -> Score {
    board
        .rows()
        .flatten()
        .fold(Score::default(), |mut s, &disc| {
            match disc {
                Disc::Black => s.black += 1,
                Disc::White => s.white += 1,
                Disc::Empty => {}
            }
            s
        })
}
