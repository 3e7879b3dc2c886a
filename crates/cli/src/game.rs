//! Game session management for the Othello CLI.
//!
//! This module provides the `GameSession` struct which wraps the core game
//! and adds colored terminal display for boards of any supported size.

use colored::Colorize;
use othello_core::coord::{Coord, column_label};
use othello_core::disc::Disc;
use othello_core::error::GameError;
use othello_core::game_state::{Game, MoveOutcome, Status, TurnResult, TurnState};
use othello_core::oracle::NativeOracle;
use othello_core::player::Player;

/// A human-versus-oracle game with terminal rendering.
pub struct GameSession {
    core: Game<NativeOracle>,
}

impl GameSession {
    /// Creates a new game in the initial position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for unsupported sizes.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            core: Game::new(size, NativeOracle::new())?,
        })
    }

    pub fn size(&self) -> usize {
        self.core.board().size()
    }

    pub fn turn(&self) -> TurnState {
        self.core.turn()
    }

    pub fn is_game_over(&self) -> bool {
        self.core.is_game_over()
    }

    /// Returns Black's legal moves, or nothing when it is not Black's turn.
    pub fn legal_moves(&self) -> Vec<Coord> {
        match self.core.turn() {
            TurnState::BlackToMove => self.core.legal_moves(),
            _ => Vec::new(),
        }
    }

    /// Places a Black disc.
    pub fn play_black(&mut self, coord: Coord) -> Result<MoveOutcome, GameError> {
        self.core.attempt_move(coord, Player::Black)
    }

    /// Lets White answer.
    pub fn play_white(&mut self) -> Result<TurnResult, GameError> {
        self.core.advance_turn()
    }

    /// Describes the result once the game is over.
    pub fn result_text(&self) -> Option<String> {
        let score = self.core.current_score();
        match self.core.game_status() {
            Status::InProgress => None,
            Status::Won(Player::Black) => Some(format!("Black wins! ({score})")),
            Status::Won(Player::White) => Some(format!("White wins! ({score})")),
            Status::Draw => Some(format!("Draw ({score})")),
        }
    }

    /// Renders the board with colors, legal-move hints and the side panel.
    pub fn render(&self) -> String {
        let board = self.core.board();
        let size = board.size();
        let last_move = self.core.last_move();
        let illegal = self.core.illegal_cells();
        let label_width = size.to_string().len();
        let margin = " ".repeat(label_width + 2);
        let score = self.core.current_score();

        let rule = |left: &str, mid: &str, right: &str| {
            let cells = vec!["───"; size].join(mid);
            format!("{margin}{left}{cells}{right}\n")
        };

        let mut out = String::new();
        out.push_str(&margin);
        for col in 0..size {
            out.push_str(&format!(" {:^3}", column_label(col)));
        }
        out.push('\n');
        out.push_str(&rule("┌", "┬", "┐"));

        for row in 0..size {
            out.push_str(&format!(" {:>label_width$} │", row + 1));

            for col in 0..size {
                let coord = Coord::new(row, col);
                let is_last_move = Some(coord) == last_move;
                let symbol = match board.get(coord) {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if !illegal.contains(&coord) => " · ".bright_cyan(),
                    Disc::Empty => "   ".normal(),
                };
                out.push_str(&format!("{symbol}│"));
            }

            // Side information
            match row {
                0 => {
                    let info = match self.core.turn() {
                        TurnState::BlackToMove => "Black's turn (X)".bright_green(),
                        TurnState::WhiteToMove => "White's turn (O)".bright_yellow(),
                        TurnState::GameOver => "*** Game Over ***".bright_red(),
                    };
                    out.push_str(&format!("   {info}"));
                }
                1 => out.push_str(&format!(
                    "   Black: {}",
                    format!("{:2}", score.black).bright_green()
                )),
                2 => out.push_str(&format!(
                    "   White: {}",
                    format!("{:2}", score.white).bright_yellow()
                )),
                3 => {
                    if let Some(result) = self.result_text() {
                        out.push_str(&format!("   {}", result.bright_cyan()));
                    }
                }
                _ => {}
            }
            out.push('\n');

            if row + 1 < size {
                out.push_str(&rule("├", "┼", "┤"));
            }
        }

        out.push_str(&rule("└", "┴", "┘"));
        out
    }

    /// Prints the board to the terminal.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}
