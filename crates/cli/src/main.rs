mod game;
mod parse;
mod ui;

use std::time::Duration;

use clap::Parser;
use othello_core::board::validate_size;
use othello_core::constants::DEFAULT_BOARD_SIZE;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Play Reversi against an oracle-driven opponent")]
struct Cli {
    /// Board edge length: an even number of at least 4 (4, 6, 8 and 10 are the usual choices)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    size: usize,

    /// Pause before White's reply, in milliseconds
    #[arg(long, default_value = "0")]
    ai_delay_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Cli::parse();
    init_tracing(&args.log_level);

    ui::ui_loop(args.size, Duration::from_millis(args.ai_delay_ms)).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    validate_size(size).map_err(|e| e.to_string())?;
    Ok(size)
}
