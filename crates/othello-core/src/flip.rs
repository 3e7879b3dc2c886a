//! Move execution: placement and disc flipping.

use tracing::trace;

use crate::board::Board;
use crate::constants::DIRECTIONS;
use crate::coord::Coord;
use crate::legality;
use crate::player::Player;
use crate::scan;

/// Places a disc for `player` at `coord` and flips every captured run.
///
/// The caller must have confirmed the move with [`legality::is_legal`]. The
/// move is not validated again: calling this on an illegal placement leaves
/// the board inconsistent, which debug builds catch with an assertion.
///
/// The placed disc is written first, then each direction is scanned and
/// flipped independently. A direction only reads cells on its own ray, so the
/// order in which directions are processed does not change the result.
///
/// # Returns
///
/// The flipped coordinates, grouped by direction.
pub fn apply_move(board: &mut Board, coord: Coord, player: Player) -> Vec<Coord> {
    debug_assert!(
        legality::is_legal(board, coord, player),
        "apply_move called with illegal move {coord} for {player}"
    );

    let disc = player.disc();
    board.set(coord, disc);

    let mut flipped = Vec::new();
    for dir in DIRECTIONS {
        let run = scan::scan_direction(board, coord, player, dir);
        if run.captures() {
            for &cell in &run.cells {
                board.set(cell, disc);
            }
            flipped.extend(run.cells);
        }
    }

    trace!(%coord, %player, flipped = flipped.len(), "applied move");
    flipped
}

/// Returns the cells that `apply_move` would flip, without touching the board.
pub fn flipped_by(board: &Board, coord: Coord, player: Player) -> Vec<Coord> {
    scan::capturing_runs(board, coord, player)
        .into_iter()
        .flat_map(|run| run.cells)
        .collect()
}
