//! Line-based terminal loop for playing Black against the oracle.

use std::thread;
use std::time::Duration;

use othello_core::coord::Coord;
use othello_core::game_state::{MoveOutcome, TurnResult, TurnState};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::game::GameSession;
use crate::parse::{Command, parse_command};

const HELP: &str = "\
Commands:
  <square>   place a Black disc, e.g. d3
  moves, m   list your legal moves
  board, b   redraw the board
  help, h    show this help
  quit, q    leave the game";

/// Main UI loop.
///
/// Reads commands until the game ends or the user quits. After each accepted
/// Black move the loop waits `ai_delay`, then lets White reply.
///
/// # Arguments
/// * `size` - Board edge length
/// * `ai_delay` - Pause before White's reply
pub fn ui_loop(size: usize, ai_delay: Duration) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut game = GameSession::new(size).map_err(|e| e.to_string())?;

    println!("Othello {0}x{0}\n{HELP}\n", game.size());
    game.print();

    while !game.is_game_over() {
        if game.legal_moves().is_empty() {
            // Black is stuck while the game is still in progress.
            println!("Black has no legal move. Game stopped.");
            return Ok(());
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.to_string()),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(&line);

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Board) => game.print(),
            Ok(Command::Moves) => println!("Legal moves: {}", format_moves(&game.legal_moves())),
            Ok(Command::Play(coord)) => play_round(&mut game, coord, ai_delay)?,
            Err(msg) => println!("{msg}"),
        }
    }

    if let Some(result) = game.result_text() {
        println!("{result}");
    }
    Ok(())
}

/// Plays one Black move and, if it was accepted, White's reply.
fn play_round(game: &mut GameSession, coord: Coord, ai_delay: Duration) -> Result<(), String> {
    let outcome = match game.play_black(coord) {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };
    if outcome == MoveOutcome::Rejected {
        println!("Illegal move: {coord}");
        return Ok(());
    }
    debug!(%coord, "black played");

    if game.turn() == TurnState::WhiteToMove {
        if !ai_delay.is_zero() {
            thread::sleep(ai_delay);
        }
        match game.play_white().map_err(|e| e.to_string())? {
            TurnResult::Moved(reply) => println!("White plays {reply}"),
            TurnResult::NoMoveAvailable => println!("White has no move."),
        }
    }

    println!();
    game.print();
    Ok(())
}

fn format_moves(moves: &[Coord]) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves
        .iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_moves() {
        assert_eq!(format_moves(&[]), "none");
        assert_eq!(
            format_moves(&[Coord::new(2, 3), Coord::new(3, 2)]),
            "d3 c4"
        );
    }

    #[test]
    fn test_play_round_illegal_keeps_turn() {
        let mut game = GameSession::new(6).unwrap();
        play_round(&mut game, Coord::new(0, 0), Duration::ZERO).unwrap();
        assert_eq!(game.turn(), TurnState::BlackToMove);
    }

    #[test]
    fn test_play_round_plays_both_sides() {
        let mut game = GameSession::new(8).unwrap();
        play_round(&mut game, Coord::new(2, 3), Duration::ZERO).unwrap();
        assert_eq!(game.turn(), TurnState::BlackToMove);
        assert_eq!(game.size(), 8);
    }
}
