//! Error handling for YallaNow client
//!
//! This module defines the error types returned by every service call and
//! the top-level error used by configuration, logging and the binary.

use thiserror::Error;

/// Message surfaced when group creation collides with an existing name.
pub const GROUP_NAME_EXISTS_MESSAGE: &str = "Group with that name already exists!";

/// Main error type for the YallaNow client application
#[derive(Error, Debug)]
pub enum YallaNowError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Failure of a single backend call.
///
/// `Display` yields the human-readable message a UI can show as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("No authenticated user found")]
    Unauthenticated,

    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("Access denied.")]
    Forbidden,

    #[error("Resource not found.")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("{}", GROUP_NAME_EXISTS_MESSAGE)]
    GroupNameExists,

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Unknown(String),

    /// No response object at all; the payload is the transport's reason.
    #[error("Response is null.")]
    NullResponse(String),

    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthenticated,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Unprocessable,
    Unknown,
    NullResponse,
    InvalidPayload,
}

/// Result type alias for YallaNow operations
pub type Result<T> = std::result::Result<T, YallaNowError>;

/// Result type alias for backend calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthenticated => ErrorKind::Unauthenticated,
            ApiError::BadRequest(_) => ErrorKind::BadRequest,
            ApiError::Unauthorized => ErrorKind::Unauthorized,
            ApiError::Forbidden => ErrorKind::Forbidden,
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::Conflict(_) | ApiError::GroupNameExists => ErrorKind::Conflict,
            ApiError::Unprocessable(_) => ErrorKind::Unprocessable,
            ApiError::Unknown(_) => ErrorKind::Unknown,
            ApiError::NullResponse(_) => ErrorKind::NullResponse,
            ApiError::InvalidPayload(_) => ErrorKind::InvalidPayload,
        }
    }

    /// Human-readable message for the UI layer
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl YallaNowError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            YallaNowError::Api(e) => matches!(
                e.kind(),
                ErrorKind::Unknown | ErrorKind::NullResponse | ErrorKind::Conflict
            ),
            YallaNowError::Config(_) => false,
            YallaNowError::Http(_) => true,
            YallaNowError::Serialization(_) => false,
            YallaNowError::Io(_) => true,
            YallaNowError::UrlParse(_) => false,
            YallaNowError::Logging(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            YallaNowError::Config(_) => ErrorSeverity::Critical,
            YallaNowError::Logging(_) => ErrorSeverity::Critical,
            YallaNowError::Api(e) => match e.kind() {
                ErrorKind::Unauthenticated | ErrorKind::Unauthorized | ErrorKind::Forbidden => {
                    ErrorSeverity::Warning
                }
                ErrorKind::BadRequest | ErrorKind::NotFound | ErrorKind::Unprocessable => {
                    ErrorSeverity::Info
                }
                _ => ErrorSeverity::Error,
            },
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
