//! Turn sequencing for a human (Black) versus oracle-driven (White) game.
//!
//! This module provides the `Game` struct which owns the board and the oracle
//! handle for one game, applies moves through the rules modules, and decides
//! when the game ends.
//!
//! Two termination rules differ from tournament Reversi:
//!
//! - when the oracle has no move for White, Black is declared the winner
//!   without looking at the score;
//! - when Black has no legal move but the board still has empty cells, the
//!   game does not end. Callers see `BlackToMove` with an empty move list.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::coord::Coord;
use crate::error::GameError;
use crate::flip;
use crate::legality;
use crate::oracle::{self, MoveOracle};
use crate::player::Player;
use crate::score::{self, Score};

/// The side that may act next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    BlackToMove,
    WhiteToMove,
    GameOver,
}

/// The result of a game, as far as it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

/// Whether a placement request was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    Rejected,
}

/// What the automated side did when asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Moved(Coord),
    NoMoveAvailable,
}

/// A single game between a human playing Black and an oracle playing White.
///
/// The board is owned here and only changed through [`flip::apply_move`];
/// callers get read-only access through [`Game::board`].
#[derive(Debug)]
pub struct Game<O: MoveOracle> {
    board: Board,
    turn: TurnState,
    status: Status,
    last_move: Option<Coord>,
    oracle: O,
}

impl<O: MoveOracle> Game<O> {
    /// Creates a new game in the initial position with Black to move.
    ///
    /// # Arguments
    ///
    /// * `size` - Board edge length; an even number of at least 4
    /// * `oracle` - Move generator consulted on White's turns
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for unsupported sizes.
    pub fn new(size: usize, oracle: O) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        debug!(size, "new game");
        Ok(Self::from_board(board, TurnState::BlackToMove, oracle))
    }

    /// Creates a game from an existing position.
    ///
    /// Passing `TurnState::GameOver` resolves the result from the disc count.
    pub fn from_board(board: Board, turn: TurnState, oracle: O) -> Self {
        let status = match turn {
            TurnState::GameOver => status_by_score(score::score(&board)),
            _ => Status::InProgress,
        };
        Self {
            board,
            turn,
            status,
            last_move: None,
            oracle,
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns the side to move, or `None` once the game is over.
    pub fn side_to_move(&self) -> Option<Player> {
        match self.turn {
            TurnState::BlackToMove => Some(Player::Black),
            TurnState::WhiteToMove => Some(Player::White),
            TurnState::GameOver => None,
        }
    }

    /// Returns the last placement by either side.
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Returns the disc count for both players.
    pub fn current_score(&self) -> Score {
        score::score(&self.board)
    }

    pub fn game_status(&self) -> Status {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.turn == TurnState::GameOver
    }

    /// Legal placements for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        self.side_to_move()
            .map(|p| legality::legal_moves(&self.board, p))
            .unwrap_or_default()
    }

    /// Cells the side to move may not play; every cell once the game is over.
    pub fn illegal_cells(&self) -> Vec<Coord> {
        match self.side_to_move() {
            Some(p) => legality::illegal_cells(&self.board, p),
            None => self.board.coords().collect(),
        }
    }

    /// Returns a reference to the oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Validates a human placement and plays it if it is legal.
    ///
    /// Only Black's placements are accepted, and only while Black is to move.
    /// Anything else, including an illegal placement, is rejected without
    /// changing the game.
    ///
    /// After an accepted move the turn passes to White, unless the board is
    /// now full, in which case the game ends and the score decides.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `coord` is off the board.
    pub fn attempt_move(&mut self, coord: Coord, player: Player) -> Result<MoveOutcome, GameError> {
        self.board.check_bounds(coord)?;

        if self.turn != TurnState::BlackToMove || player != Player::Black {
            debug!(%coord, %player, turn = ?self.turn, "placement out of turn");
            return Ok(MoveOutcome::Rejected);
        }
        if !legality::is_legal(&self.board, coord, player) {
            debug!(%coord, %player, "illegal placement ignored");
            return Ok(MoveOutcome::Rejected);
        }

        self.play(coord, player);
        if !self.is_game_over() {
            self.turn = TurnState::WhiteToMove;
        }
        Ok(MoveOutcome::Accepted)
    }

    /// Lets the automated side play one move.
    ///
    /// The oracle is asked once for White's legal moves. The smallest
    /// coordinate in row-major order that the validator also accepts is
    /// played. If there is none, whether because the oracle reported nothing,
    /// failed, or reported only unplayable cells, the game ends with Black
    /// declared the winner regardless of the score.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotAutomatedTurn`] unless White is to move.
    pub fn advance_turn(&mut self) -> Result<TurnResult, GameError> {
        if self.turn != TurnState::WhiteToMove {
            return Err(GameError::NotAutomatedTurn);
        }

        let player = Player::White;
        let candidates = match oracle::query_legal_moves(&mut self.oracle, player, &self.board) {
            Ok(moves) => moves,
            Err(e) => {
                warn!(error = %e, "oracle query failed");
                Default::default()
            }
        };

        let choice = candidates.into_iter().find(|&c| {
            let legal = legality::is_legal(&self.board, c, player);
            if !legal {
                warn!(coord = %c, "oracle reported a move the validator rejects");
            }
            legal
        });

        match choice {
            Some(coord) => {
                self.play(coord, player);
                if !self.is_game_over() {
                    self.turn = TurnState::BlackToMove;
                }
                Ok(TurnResult::Moved(coord))
            }
            None => {
                // No automated move means a Black win,
                // even when White is ahead on discs.
                self.finish(Status::Won(Player::Black));
                Ok(TurnResult::NoMoveAvailable)
            }
        }
    }

    /// Plays a human move and, if it was accepted, the automated reply.
    ///
    /// # Returns
    ///
    /// The outcome of the placement and, when White was asked to move, what
    /// it did.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `coord` is off the board.
    pub fn play_turn(&mut self, coord: Coord) -> Result<(MoveOutcome, Option<TurnResult>), GameError> {
        let outcome = self.attempt_move(coord, Player::Black)?;
        let reply = match self.turn {
            TurnState::WhiteToMove => Some(self.advance_turn()?),
            _ => None,
        };
        Ok((outcome, reply))
    }

    fn play(&mut self, coord: Coord, player: Player) {
        let flipped = flip::apply_move(&mut self.board, coord, player);
        self.last_move = Some(coord);

        let score = self.current_score();
        debug!(%player, %coord, flipped = flipped.len(), %score, "move played");

        if self.board.is_full() {
            self.finish(status_by_score(score));
        }
    }

    fn finish(&mut self, status: Status) {
        self.turn = TurnState::GameOver;
        self.status = status;
        info!(?status, score = %self.current_score(), "game over");
    }
}

fn status_by_score(score: Score) -> Status {
    match score.leader() {
        Some(p) => Status::Won(p),
        None => Status::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::oracle::{NativeOracle, OracleError, OracleMove, OracleRequest};

    /// Answers every query with the same list.
    struct FixedOracle(Option<Vec<OracleMove>>);

    impl MoveOracle for FixedOracle {
        fn query(&mut self, _: &OracleRequest) -> Result<Option<Vec<OracleMove>>, OracleError> {
            Ok(self.0.clone())
        }
    }

    struct FailingOracle;

    impl MoveOracle for FailingOracle {
        fn query(&mut self, _: &OracleRequest) -> Result<Option<Vec<OracleMove>>, OracleError> {
            Err(OracleError::Unavailable("resolver not loaded".to_string()))
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(8, NativeOracle).unwrap();
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(game.side_to_move(), Some(Player::Black));
        assert_eq!(game.game_status(), Status::InProgress);
        assert_eq!(game.current_score().as_tuple(), (2, 2));
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_new_game_invalid_size() {
        assert_eq!(
            Game::new(7, NativeOracle).unwrap_err(),
            GameError::InvalidBoardSize(7)
        );
    }

    #[test]
    fn test_attempt_move_d3() {
        let mut game = Game::new(8, NativeOracle).unwrap();
        let outcome = game.attempt_move(Coord::new(2, 3), Player::Black).unwrap();
        assert_eq!(outcome, MoveOutcome::Accepted);
        assert_eq!(game.turn(), TurnState::WhiteToMove);
        assert_eq!(game.current_score().as_tuple(), (4, 1));
        assert_eq!(game.last_move(), Some(Coord::new(2, 3)));
    }

    #[test]
    fn test_illegal_move_is_ignored() {
        let mut game = Game::new(8, NativeOracle).unwrap();
        let before = game.board().clone();
        let outcome = game.attempt_move(Coord::new(0, 0), Player::Black).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut game = Game::new(4, NativeOracle).unwrap();
        assert_eq!(
            game.attempt_move(Coord::new(4, 1), Player::Black),
            Err(GameError::OutOfBounds {
                coord: Coord::new(4, 1),
                size: 4
            })
        );
    }

    #[test]
    fn test_white_placement_is_rejected() {
        let mut game = Game::new(8, NativeOracle).unwrap();
        let outcome = game.attempt_move(Coord::new(2, 4), Player::White).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected);
    }

    #[test]
    fn test_advance_turn_out_of_sequence() {
        let mut game = Game::new(8, NativeOracle).unwrap();
        assert_eq!(game.advance_turn(), Err(GameError::NotAutomatedTurn));
    }

    #[test]
    fn test_advance_turn_picks_smallest_coordinate() {
        let mut game = Game::new(8, NativeOracle).unwrap();
        game.attempt_move(Coord::new(2, 3), Player::Black).unwrap();
        // White can answer c3, e3 or c5; c3 = (2,2) is the smallest.
        assert_eq!(
            legality::legal_moves(game.board(), Player::White),
            vec![Coord::new(2, 2), Coord::new(2, 4), Coord::new(4, 2)]
        );
        let result = game.advance_turn().unwrap();
        assert_eq!(result, TurnResult::Moved(Coord::new(2, 2)));
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(game.current_score().as_tuple(), (3, 3));
    }

    #[test]
    fn test_oracle_tie_break_ignores_answer_order() {
        let mut game = Game::new(8, FixedOracle(Some(vec![
            OracleMove(3, 5),
            OracleMove(5, 3),
            OracleMove(3, 3),
            OracleMove(3, 5),
        ])))
        .unwrap();
        game.attempt_move(Coord::new(2, 3), Player::Black).unwrap();
        assert_eq!(
            game.advance_turn().unwrap(),
            TurnResult::Moved(Coord::new(2, 2))
        );
    }

    #[test]
    fn test_oracle_move_rejected_by_validator_is_skipped() {
        let mut game = Game::new(8, FixedOracle(Some(vec![
            OracleMove(1, 1),
            OracleMove(3, 5),
        ])))
        .unwrap();
        game.attempt_move(Coord::new(2, 3), Player::Black).unwrap();
        assert_eq!(
            game.advance_turn().unwrap(),
            TurnResult::Moved(Coord::new(2, 4))
        );
        assert_eq!(game.board().get(Coord::new(0, 0)), Disc::Empty);
    }

    #[test]
    fn test_out_of_range_oracle_entry_does_not_void_answer() {
        let mut game = Game::new(8, FixedOracle(Some(vec![
            OracleMove(3, 3),
            OracleMove(0, 9),
        ])))
        .unwrap();
        game.attempt_move(Coord::new(2, 3), Player::Black).unwrap();
        assert_eq!(
            game.advance_turn().unwrap(),
            TurnResult::Moved(Coord::new(2, 2))
        );
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(game.game_status(), Status::InProgress);
    }

    #[test]
    fn test_empty_oracle_answer_awards_black() {
        for answer in [None, Some(vec![])] {
            let mut game = Game::new(8, FixedOracle(answer)).unwrap();
            game.attempt_move(Coord::new(2, 3), Player::Black).unwrap();
            assert_eq!(game.advance_turn().unwrap(), TurnResult::NoMoveAvailable);
            assert_eq!(game.turn(), TurnState::GameOver);
            assert_eq!(game.game_status(), Status::Won(Player::Black));
        }
    }

    #[test]
    fn test_failing_oracle_awards_black() {
        let mut game = Game::new(6, FailingOracle).unwrap();
        game.attempt_move(Coord::new(1, 2), Player::Black).unwrap();
        assert_eq!(game.advance_turn().unwrap(), TurnResult::NoMoveAvailable);
        assert_eq!(game.game_status(), Status::Won(Player::Black));
    }

    #[test]
    fn test_game_over_accepts_nothing() {
        let mut game = Game::new(8, FixedOracle(None)).unwrap();
        game.attempt_move(Coord::new(2, 3), Player::Black).unwrap();
        game.advance_turn().unwrap();
        let before = game.board().clone();
        let outcome = game.attempt_move(Coord::new(2, 2), Player::Black).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(game.board(), &before);
        assert_eq!(game.advance_turn(), Err(GameError::NotAutomatedTurn));
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.illegal_cells().len(), 64);
    }

    #[test]
    fn test_full_board_after_human_move_ends_by_score() {
        // Black fills the last cell at a1 and flips b1.
        let board = Board::from_string(4, "-OXX XXOO OOXX OOOO").unwrap();
        let mut game = Game::from_board(board, TurnState::BlackToMove, FixedOracle(None));
        let (outcome, reply) = game.play_turn(Coord::new(0, 0)).unwrap();
        assert_eq!(outcome, MoveOutcome::Accepted);
        assert_eq!(reply, None);
        assert_eq!(game.turn(), TurnState::GameOver);
        assert_eq!(game.current_score().as_tuple(), (8, 8));
        assert_eq!(game.game_status(), Status::Draw);
    }

    #[test]
    fn test_full_board_after_automated_move_ends_by_score() {
        // White fills d4, the last empty cell, and wins on discs.
        let board = Board::from_string(4, "OOOO OOXX OXXX OXX-").unwrap();
        let mut game = Game::from_board(board, TurnState::WhiteToMove, NativeOracle);
        assert_eq!(
            game.advance_turn().unwrap(),
            TurnResult::Moved(Coord::new(3, 3))
        );
        assert_eq!(game.turn(), TurnState::GameOver);
        assert_eq!(game.game_status(), Status::Won(Player::White));
    }

    #[test]
    fn test_play_turn_runs_reply() {
        let mut game = Game::new(8, NativeOracle).unwrap();
        let (outcome, reply) = game.play_turn(Coord::new(2, 3)).unwrap();
        assert_eq!(outcome, MoveOutcome::Accepted);
        assert_eq!(reply, Some(TurnResult::Moved(Coord::new(2, 2))));
        assert_eq!(game.turn(), TurnState::BlackToMove);

        let (outcome, reply) = game.play_turn(Coord::new(0, 0)).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(reply, None);
    }

    #[test]
    fn test_black_without_moves_is_not_terminal() {
        // Black has no legal move here, but the board is not full: the game
        // stays on Black's turn.
        let board = Board::from_string(4, "OOO- OOO- OOO- ---X").unwrap();
        let game = Game::from_board(board, TurnState::BlackToMove, NativeOracle);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(game.game_status(), Status::InProgress);
    }
}
