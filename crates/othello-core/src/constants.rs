//! Board geometry constants.

/// Smallest playable board edge.
pub const MIN_BOARD_SIZE: usize = 4;

/// Board edge used when none is specified.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Board edges offered by the reference front-end.
pub const STANDARD_BOARD_SIZES: [usize; 4] = [4, 6, 8, 10];

/// A unit step on the grid as `(row delta, column delta)`.
pub type Direction = (isize, isize);

/// The eight unit directions scanned around a placement point.
#[rustfmt::skip]
pub const DIRECTIONS: [Direction; 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];
