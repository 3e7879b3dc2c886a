//! Move legality.

use crate::board::Board;
use crate::coord::Coord;
use crate::error::GameError;
use crate::player::Player;
use crate::scan;

/// Checks if placing a disc for `player` at `coord` is legal.
///
/// A placement is legal when the target cell is empty and at least one of the
/// eight directional scans from it captures. The board is not modified.
///
/// `coord` must be on the board; use [`check_legal`] for untrusted input.
#[inline]
pub fn is_legal(board: &Board, coord: Coord, player: Player) -> bool {
    debug_assert!(board.in_bounds(coord), "{coord:?} is off the board");
    board.get(coord).is_empty() && scan::any_capture(board, coord, player)
}

/// Bounds-checked variant of [`is_legal`].
///
/// # Errors
///
/// Returns [`GameError::OutOfBounds`] if `coord` is off the board.
pub fn check_legal(board: &Board, coord: Coord, player: Player) -> Result<bool, GameError> {
    board.check_bounds(coord)?;
    Ok(is_legal(board, coord, player))
}

/// Returns every legal placement for `player` in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&c| is_legal(board, c, player))
        .collect()
}

/// Returns every cell where `player` may not place a disc, in row-major order.
///
/// Occupied cells are included. Front-ends use this to shade the board.
pub fn illegal_cells(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&c| !is_legal(board, c, player))
        .collect()
}

/// Checks if `player` has at least one legal placement.
pub fn has_legal_moves(board: &Board, player: Player) -> bool {
    board.coords().any(|c| is_legal(board, c, player))
}
