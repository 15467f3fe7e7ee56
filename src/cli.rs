//! Command-line interface for the terminal front end.

use clap::Parser;

/// Tic-tac-toe in the terminal, with a move list you can jump around in
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe and revisit any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start from a game replayed from these cells (comma separated, 0-8)
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<usize>,

    /// Start with the move list sorted newest first
    #[arg(long)]
    pub descending: bool,

    /// Print the view model as JSON instead of drawing the board
    #[arg(long)]
    pub json: bool,
}
