//! Rules engine for Reversi on any even board size.
//!
//! The crate is layered bottom-up:
//!
//!  - [`board`] stores the grid and builds the starting position.
//!  - [`scan`] walks one direction from a placement point and reports the
//!    opponent run it would capture. Both [`legality`] and [`flip`] use it.
//!  - [`score`] counts discs.
//!  - [`oracle`] encodes positions for an external move generator and decodes
//!    its answers.
//!  - [`game_state`] drives the human-versus-oracle turn sequence.

pub mod board;
pub mod constants;
pub mod coord;
pub mod disc;
pub mod error;
pub mod flip;
pub mod game_state;
pub mod legality;
pub mod oracle;
pub mod perft;
pub mod player;
pub mod scan;
pub mod score;

pub use board::{Board, new_game};
pub use coord::Coord;
pub use disc::Disc;
pub use error::GameError;
pub use game_state::{Game, MoveOutcome, Status, TurnResult, TurnState};
pub use oracle::{MoveOracle, NativeOracle};
pub use player::Player;
pub use score::Score;
