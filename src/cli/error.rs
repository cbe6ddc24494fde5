//! CLI-level errors (wraps application errors)

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::command::ConsoleResult;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn io(context: &'static str, source: io::Error) -> Self {
        CliError::Io { context, source }
    }

    /// The console result this error ends the invocation with.
    pub fn result(&self) -> ConsoleResult {
        match self {
            CliError::Application(e) if e.is_parse_error() => ConsoleResult::Invalid,
            CliError::Application(_) | CliError::Io { .. } => ConsoleResult::Failure,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.result().code()
    }
}
