//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.

use noughts_engine::errors::GameError;
use std::fmt;

/// Custom error type for CLI operations.
///
/// This enum encompasses the error types that can occur during CLI
/// execution, allowing for proper error propagation using the `?`
/// operator. User typos are not errors; they are handled locally by
/// re-prompting and never reach this type.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes)
    Io(std::io::Error),

    /// A move the validator vouched for was still rejected by the board
    Game(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Game(e) => write!(f, "Game error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Game(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Game(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let err: CliError = std::io::Error::other("pipe closed").into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn game_errors_convert_and_keep_the_index() {
        let err: CliError = GameError::CellOccupied { index: 4 }.into();
        assert!(err.to_string().contains("4"));
    }
}
