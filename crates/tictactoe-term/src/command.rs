//! Parsing of typed user input.

use std::str::FromStr;
use thiserror::Error;
use tictactoe_core::{Board, GameAction, GameError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error(transparent)]
    Cell(#[from] GameError),
}

/// A line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "n" | "new" => return Ok(Command::Action(GameAction::ResetRound)),
            "reset" => return Ok(Command::Action(GameAction::ResetSession)),
            "h" | "help" | "?" => return Ok(Command::Help),
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let raw: i64 = s
            .parse()
            .map_err(|_| CommandError::Unknown(s.to_string()))?;
        let index = Board::parse_index(raw)?;
        Ok(Command::Action(GameAction::Place(index)))
    }
}
