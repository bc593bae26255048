//! # Session Error Type
//!
//! Unified error type for the `till` binary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in a Session                              │
//! │                                                                         │
//! │  stdin line                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Command::parse_line ── UnknownCommand / InvalidArgument ──┐           │
//! │      │                                                     │           │
//! │      ▼                                                     ▼           │
//! │  Session::execute ───── CoreError → ValidationError ──► AppError       │
//! │      │                                                     │           │
//! │      ▼                                                     ▼           │
//! │  Success                               recoverable: "error: ..." line  │
//! │                                        fatal (Io):  session aborts     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use serde::Serialize;
use thiserror::Error;
use till_core::CoreError;

/// Session error with a machine-readable code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message, printed after `error: `
    pub message: String,
}

/// Error codes for session failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Register input validation failed
    ValidationError,

    /// Register rejected the operation
    RegisterError,

    /// First word of the line is not a command
    UnknownCommand,

    /// Command arguments are missing or malformed
    InvalidArgument,

    /// Startup configuration is invalid
    Config,

    /// Reading input or writing output failed
    Io,

    /// Anything else
    Internal,
}

impl AppError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unknown command error.
    pub fn unknown_command(word: &str) -> Self {
        AppError::new(
            ErrorCode::UnknownCommand,
            format!("unknown command '{}' (try 'help')", word),
        )
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidArgument, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Config, message)
    }

    /// Whether the session must stop instead of reporting and continuing.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::Io | ErrorCode::Config)
    }
}

/// Converts core errors to session errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => AppError::new(ErrorCode::ValidationError, e.to_string()),
            other @ CoreError::TotalOutOfRange { .. } => {
                AppError::new(ErrorCode::RegisterError, other.to_string())
            }
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        tracing::error!("Console I/O failed: {}", err);
        AppError::new(ErrorCode::Io, format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Summary serialization failed: {}", err);
        AppError::new(ErrorCode::Internal, "could not build summary")
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
