//! Directional capture scan shared by move validation and move execution.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::constants::{DIRECTIONS, Direction};
use crate::coord::Coord;
use crate::player::Player;

/// The opponent discs met by one directional scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapturedRun {
    /// Opponent discs in scan order, nearest first.
    pub cells: Vec<Coord>,
    /// Whether the scan stopped on one of the mover's own discs.
    pub closed_by_mover: bool,
}

impl CapturedRun {
    /// A run captures only if it is non-empty and closed by the mover.
    #[inline]
    pub fn captures(&self) -> bool {
        self.closed_by_mover && !self.cells.is_empty()
    }
}

/// Scans from `origin` in direction `dir` on behalf of `player`.
///
/// The scan starts at the cell adjacent to `origin` (the origin itself is
/// never inspected) and collects cells while they hold the opponent's disc.
/// It stops at the first cell that is off the board, empty, or the mover's.
///
/// # Arguments
///
/// * `board` - The position to scan
/// * `origin` - The placement point
/// * `player` - The side placing the disc
/// * `dir` - One of the eight unit directions
pub fn scan_direction(board: &Board, origin: Coord, player: Player, dir: Direction) -> CapturedRun {
    let size = board.size();
    let mover = player.disc();
    let opponent = player.opponent().disc();

    let mut run = CapturedRun::default();
    let mut cursor = origin.step(dir, size);
    while let Some(coord) = cursor {
        let disc = board.get(coord);
        if disc == opponent {
            run.cells.push(coord);
            cursor = coord.step(dir, size);
        } else {
            run.closed_by_mover = disc == mover;
            break;
        }
    }
    run
}

/// Returns the capturing runs around `origin`, one per direction at most.
pub fn capturing_runs(board: &Board, origin: Coord, player: Player) -> ArrayVec<CapturedRun, 8> {
    DIRECTIONS
        .iter()
        .map(|&dir| scan_direction(board, origin, player, dir))
        .filter(CapturedRun::captures)
        .collect()
}

/// Returns `true` if any direction from `origin` captures.
///
/// Stops at the first capturing direction.
pub fn any_capture(board: &Board, origin: Coord, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| scan_direction(board, origin, player, dir).captures())
}
