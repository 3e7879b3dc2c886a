//! Move-tree node counting for validating the rules modules.
//!
//! Unlike [`crate::game_state`], perft follows standard tournament rules: a
//! side without a legal move passes, and a position where neither side can
//! move is a leaf.

use crate::board::Board;
use crate::error::GameError;
use crate::flip;
use crate::legality;
use crate::player::Player;

/// Executes a perft run starting from the initial position of a `size` board.
///
/// # Arguments
///
/// * `size` - Board edge length
/// * `depth` - Number of plies to expand. A depth of `1` counts the immediate
///   legal moves and `0` counts only the root; passes do not consume depth.
///
/// # Returns
///
/// The number of leaf nodes reached.
///
/// # Errors
///
/// Returns [`GameError::InvalidBoardSize`] for unsupported sizes.
pub fn perft_root(size: usize, depth: u32) -> Result<u64, GameError> {
    let board = Board::new(size)?;
    Ok(perft(&board, Player::Black, depth))
}

/// Counts the leaf nodes `depth` plies below `board` with `player` to move.
///
/// Depth `0` is the position itself and counts as one node.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legality::legal_moves(board, player);

    if moves.is_empty() {
        return if legality::has_legal_moves(board, player.opponent()) {
            perft(board, player.opponent(), depth)
        } else {
            1
        };
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|m| {
            let mut next = board.clone();
            flip::apply_move(&mut next, m, player);
            perft(&next, player.opponent(), depth - 1)
        })
        .sum()
}
