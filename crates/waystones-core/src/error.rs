//! Shared error type across waystones crates.

use thiserror::Error;

/// Stable error codes for callers that map errors onto their own surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Caller broke an API contract (e.g. queried a waystone that does not exist).
    InvalidState,
    /// A label or identifier from outside could not be parsed.
    Parse,
    /// Configuration could not be parsed or failed validation.
    BadConfig,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and tooling output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::Parse => "PARSE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WaystonesError>;

/// Unified error type used by core and engine.
///
/// Policy denials are never represented here; they are ordinary return values.
#[derive(Debug, Error)]
pub enum WaystonesError {
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl WaystonesError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WaystonesError::InvalidState(_) => ErrorCode::InvalidState,
            WaystonesError::Parse(_) => ErrorCode::Parse,
            WaystonesError::BadConfig(_) => ErrorCode::BadConfig,
            WaystonesError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            WaystonesError::Internal(_) => ErrorCode::Internal,
        }
    }
}
