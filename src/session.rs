//! Interactive session: parses user intents and feeds them to the game.

use crate::game::Game;
use crate::view::GameView;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, instrument};

/// A user intent read from one line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Activate a board cell
    Play(usize),
    /// Activate a move-list entry
    Jump(usize),
    /// Toggle the move-list order
    Sort,
    /// Redraw without changing anything
    Show,
    Help,
    Quit,
}

/// Errors that can occur when parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs a number, got '{got}'")]
    BadNumber { command: &'static str, got: String },

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
}

fn number(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    arg.parse().map_err(|_| CommandError::BadNumber {
        command,
        got: arg.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;
        let arg = words.next();

        match head.to_ascii_lowercase().as_str() {
            "play" | "p" => number("play", arg).map(Command::Play),
            "jump" | "j" => number("jump", arg).map(Command::Jump),
            "sort" | "s" => Ok(Command::Sort),
            "show" => Ok(Command::Show),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            // a bare number is shorthand for `play`
            other => other
                .parse()
                .map(Command::Play)
                .map_err(|_| CommandError::Unknown(head.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  play <cell>   place the next mark (cells are numbered 0-8; a bare number works too)
  jump <step>   show the board as it was after <step> moves
  sort          toggle the move list between oldest first and newest first
  show          redraw the board
  quit          leave the game";

/// What the front end should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the game
    Render,
    /// Print a message, then redraw
    Notice(String),
    /// Print help text
    Help,
    /// Stop reading input
    Quit,
}

/// Owns the game for the lifetime of the terminal front end.
#[derive(Clone, Debug, Default)]
pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn view(&self) -> GameView {
        GameView::of(&self.game)
    }

    /// Apply one command to the game.
    ///
    /// Illegal moves are ignored without comment; bad jumps are reported.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Play(cell) => {
                self.game = self.game.apply_move(cell);
                Reply::Render
            }
            Command::Jump(step) => match self.game.jump_to(step) {
                Ok(game) => {
                    self.game = game;
                    Reply::Render
                }
                Err(err) => Reply::Notice(err.to_string()),
            },
            Command::Sort => {
                self.game = self.game.toggle_sort();
                Reply::Render
            }
            Command::Show => Reply::Render,
            Command::Help => Reply::Help,
            Command::Quit => {
                info!(moves = self.game.history().len() - 1, "session ended");
                Reply::Quit
            }
        }
    }
}
