//! Error types for command registration and dispatch
//!
//! Registration errors are configuration mistakes made by the program that
//! sets up the CLI; dispatch errors are surfaced to the hosting process.

use thiserror::Error;

/// Main error type for the CLI toolkit
#[derive(Error, Debug)]
pub enum CliError {
    /// Command name was empty or whitespace-only
    #[error("command name cannot be empty")]
    InvalidCommand,

    /// Command was registered without a handler
    #[error("command '{name}' has no handler")]
    InvalidHandler { name: String },

    /// A command with the same name is already registered
    #[error("command '{name}' already registered")]
    DuplicateCommand { name: String },

    /// Dispatch target is not registered
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// The command handler returned an error
    #[error("error executing '{name}'")]
    CommandFailed {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing help or version text failed
    #[error("failed to write output")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CliError {
    /// Create a new invalid handler error
    pub fn invalid_handler(name: impl Into<String>) -> Self {
        Self::InvalidHandler { name: name.into() }
    }

    /// Create a new duplicate command error
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::DuplicateCommand { name: name.into() }
    }

    /// Create a new unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Wrap a handler failure with the name of the command that produced it
    pub fn command_failed(name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::CommandFailed {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
