//! Query protocol for an external legal-move generator.
//!
//! The automated side does not compute its own moves. It asks a
//! [`MoveOracle`] for the complete set of legal moves on the current board.
//! The exchange uses plain integer data so any engine can sit behind it:
//!
//! - the request carries the player code and the board as rows of cell codes
//!   (`0` empty, `1` black, `2` white);
//! - the answer is a list of one-based `(row, col)` pairs, possibly with
//!   repeats, or nothing at all.
//!
//! [`query_legal_moves`] performs the round trip and returns zero-based,
//! deduplicated coordinates in row-major order.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::board::Board;
use crate::constants::DIRECTIONS;
use crate::coord::Coord;
use crate::disc::Disc;
use crate::player::Player;

/// A legal-move query as sent to the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OracleRequest {
    /// Player code: `1` black, `2` white.
    pub player: u8,
    /// Cell codes, one inner vector per row.
    pub board: Vec<Vec<u8>>,
}

impl OracleRequest {
    /// Encodes `board` and `player` into a request.
    pub fn new(player: Player, board: &Board) -> OracleRequest {
        OracleRequest {
            player: player.code(),
            board: board
                .rows()
                .map(|row| row.iter().map(|d| d.code()).collect())
                .collect(),
        }
    }

    /// Edge length of the encoded board.
    pub fn size(&self) -> usize {
        self.board.len()
    }
}

impl fmt::Display for OracleRequest {
    /// Renders the request as a goal term: `legal_moves(P, [[..],..], Moves)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "legal_moves({}, [", self.player)?;
        for (i, row) in self.board.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("[")?;
            for (j, code) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{code}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("], Moves)")
    }
}

/// One entry of an oracle answer: a one-based `(row, col)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OracleMove(pub usize, pub usize);

impl OracleMove {
    /// Converts to a zero-based coordinate on a `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::MoveOutOfRange`] if either component is outside
    /// `1..=size`.
    pub fn to_coord(self, size: usize) -> Result<Coord, OracleError> {
        let OracleMove(row, col) = self;
        if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
            return Err(OracleError::MoveOutOfRange { row, col, size });
        }
        Ok(Coord::new(row - 1, col - 1))
    }
}

impl From<Coord> for OracleMove {
    fn from(c: Coord) -> Self {
        OracleMove(c.row + 1, c.col + 1)
    }
}

/// Errors that can occur while querying an oracle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    #[error("malformed oracle request: {0}")]
    MalformedRequest(String),

    #[error("oracle reported ({row}, {col}) which is outside a {size}x{size} board")]
    MoveOutOfRange { row: usize, col: usize, size: usize },
}

/// An external collaborator that lists the legal moves for a player.
///
/// Implementations answer `Ok(None)` when they produce no result at all and
/// `Ok(Some(moves))` otherwise. Repeated entries are allowed.
pub trait MoveOracle {
    fn query(&mut self, request: &OracleRequest) -> Result<Option<Vec<OracleMove>>, OracleError>;
}

impl<T: MoveOracle + ?Sized> MoveOracle for Box<T> {
    fn query(&mut self, request: &OracleRequest) -> Result<Option<Vec<OracleMove>>, OracleError> {
        (**self).query(request)
    }
}

impl<T: MoveOracle + ?Sized> MoveOracle for &mut T {
    fn query(&mut self, request: &OracleRequest) -> Result<Option<Vec<OracleMove>>, OracleError> {
        (**self).query(request)
    }
}

/// Converts an oracle answer into zero-based, deduplicated coordinates.
///
/// An absent answer and an empty answer both yield an empty set. Pairs
/// outside the board are dropped with a warning; the rest of the answer is
/// kept.
pub fn decode_response(answer: Option<Vec<OracleMove>>, size: usize) -> BTreeSet<Coord> {
    answer
        .unwrap_or_default()
        .into_iter()
        .filter_map(|m| match m.to_coord(size) {
            Ok(coord) => Some(coord),
            Err(e) => {
                warn!(error = %e, "dropping oracle entry");
                None
            }
        })
        .collect()
}

/// Asks `oracle` for the legal moves of `player` on `board`.
///
/// # Returns
///
/// The moves as a set ordered by `(row, col)`; empty when the oracle reports
/// nothing.
///
/// # Errors
///
/// Propagates oracle failures.
pub fn query_legal_moves<O: MoveOracle + ?Sized>(
    oracle: &mut O,
    player: Player,
    board: &Board,
) -> Result<BTreeSet<Coord>, OracleError> {
    let request = OracleRequest::new(player, board);
    trace!(%request, "querying oracle");

    let answer = oracle.query(&request)?;
    let reported = answer.as_ref().map(Vec::len);
    let moves = decode_response(answer, board.size());

    debug!(%player, ?reported, unique = moves.len(), "oracle answered");
    Ok(moves)
}

/// A native resolver for the legal-move query.
///
/// It works only from the encoded request and derives moves from the mover's
/// side: starting at each of the mover's discs it follows a run of opponent
/// discs and reports the empty cell that ends it. A destination reachable
/// through several anchors or directions is reported once per derivation, so
/// answers routinely contain duplicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOracle;

impl NativeOracle {
    pub fn new() -> Self {
        NativeOracle
    }
}

impl MoveOracle for NativeOracle {
    fn query(&mut self, request: &OracleRequest) -> Result<Option<Vec<OracleMove>>, OracleError> {
        let size = request.size();
        if request.board.iter().any(|row| row.len() != size) {
            return Err(OracleError::MalformedRequest(
                "board rows must all have the board's length".to_string(),
            ));
        }
        let mover = match request.player {
            1 => Disc::Black.code(),
            2 => Disc::White.code(),
            other => {
                return Err(OracleError::MalformedRequest(format!(
                    "unknown player code {other}"
                )));
            }
        };
        let opponent = 3 - mover;
        let empty = Disc::Empty.code();

        let cell = |r: isize, c: isize| -> Option<u8> {
            let (r, c) = (usize::try_from(r).ok()?, usize::try_from(c).ok()?);
            request.board.get(r)?.get(c).copied()
        };

        let mut moves = Vec::new();
        for (r, row) in request.board.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                if code != mover {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    let (mut y, mut x) = (r as isize + dr, c as isize + dc);
                    let mut seen_opponent = false;
                    while cell(y, x) == Some(opponent) {
                        seen_opponent = true;
                        y += dr;
                        x += dc;
                    }
                    if seen_opponent && cell(y, x) == Some(empty) {
                        moves.push(OracleMove(y as usize + 1, x as usize + 1));
                    }
                }
            }
        }

        Ok(Some(moves))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legality;

    #[test]
    fn test_request_encoding() {
        let board = Board::new(4).unwrap();
        let request = OracleRequest::new(Player::White, &board);
        assert_eq!(request.player, 2);
        assert_eq!(
            request.board,
            vec![
                vec![0, 0, 0, 0],
                vec![0, 2, 1, 0],
                vec![0, 1, 2, 0],
                vec![0, 0, 0, 0]
            ]
        );
        assert_eq!(
            request.to_string(),
            "legal_moves(2, [[0,0,0,0],[0,2,1,0],[0,1,2,0],[0,0,0,0]], Moves)"
        );
    }

    #[test]
    fn test_decode_converts_and_deduplicates() {
        let answer = Some(vec![
            OracleMove(3, 5),
            OracleMove(1, 1),
            OracleMove(3, 5),
            OracleMove(8, 8),
        ]);
        let moves = decode_response(answer, 8);
        assert_eq!(
            moves.into_iter().collect::<Vec<_>>(),
            vec![Coord::new(0, 0), Coord::new(2, 4), Coord::new(7, 7)]
        );
    }

    #[test]
    fn test_decode_absent_answer_is_empty() {
        assert!(decode_response(None, 8).is_empty());
        assert!(decode_response(Some(vec![]), 8).is_empty());
    }

    #[test]
    fn test_decode_drops_only_out_of_range_entries() {
        let answer = Some(vec![OracleMove(0, 1), OracleMove(2, 2), OracleMove(1, 5)]);
        assert_eq!(
            decode_response(answer, 4).into_iter().collect::<Vec<_>>(),
            vec![Coord::new(1, 1)]
        );
        assert!(decode_response(Some(vec![OracleMove(5, 5)]), 4).is_empty());
    }

    #[test]
    fn test_oracle_move_out_of_range() {
        assert_eq!(
            OracleMove(0, 1).to_coord(4),
            Err(OracleError::MoveOutOfRange {
                row: 0,
                col: 1,
                size: 4
            })
        );
        assert!(OracleMove(1, 5).to_coord(4).is_err());
    }

    #[test]
    fn test_native_oracle_reports_duplicates() {
        // c3 is reached from c1 across c2 and from a3 across b3.
        let board = Board::from_string(4, "--X- --O- XO-- ----").unwrap();
        let answer = NativeOracle.query(&OracleRequest::new(Player::Black, &board));
        let answer = answer.unwrap().unwrap();
        assert_eq!(answer, vec![OracleMove(3, 3), OracleMove(3, 3)]);

        let moves = decode_response(Some(answer), 4);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![Coord::new(2, 2)]);
    }

    #[test]
    fn test_native_oracle_matches_validator() {
        for size in [4, 6, 8, 10] {
            let board = Board::new(size).unwrap();
            for player in [Player::Black, Player::White] {
                let moves = query_legal_moves(&mut NativeOracle, player, &board).unwrap();
                let expected = legality::legal_moves(&board, player);
                assert_eq!(moves.into_iter().collect::<Vec<_>>(), expected);
            }
        }
    }

    #[test]
    fn test_native_oracle_rejects_bad_player() {
        let request = OracleRequest {
            player: 0,
            board: vec![vec![0; 4]; 4],
        };
        assert_eq!(
            NativeOracle.query(&request),
            Err(OracleError::MalformedRequest(
                "unknown player code 0".to_string()
            ))
        );
    }

    #[test]
    fn test_oracle_move_from_coord() {
        assert_eq!(OracleMove::from(Coord::new(0, 3)), OracleMove(1, 4));
        assert_eq!(OracleMove(1, 4).to_coord(4), Ok(Coord::new(0, 3)));
    }
}
