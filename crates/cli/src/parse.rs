//! Parsing of the commands typed at the game prompt.

use othello_core::coord::Coord;

/// A command entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a disc
    Play(Coord),
    /// List Black's legal moves
    Moves,
    /// Redraw the board
    Board,
    Help,
    Quit,
}

/// Parses one line of input.
///
/// Anything that is not a keyword is read as a square in algebraic notation.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    match input.to_ascii_lowercase().as_str() {
        "moves" | "m" => Ok(Command::Moves),
        "board" | "b" => Ok(Command::Board),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => input
            .parse::<Coord>()
            .map(Command::Play)
            .map_err(|e| format!("Invalid square '{input}': {e}")),
    }
}
