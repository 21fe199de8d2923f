use std::fmt;

use holdem_engine::errors::GameError;

/// Errors surfaced to the terminal user.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (config file, stdin/stdout)
    Io(std::io::Error),
    /// Configuration file or value problem
    Config(String),
    /// Invalid user input
    InvalidInput(String),
    /// Engine rejected an operation
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        CliError::Engine(e)
    }
}
