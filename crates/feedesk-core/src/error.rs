//! Unified application error types for FeeDesk.
//!
//! Every failure path of the session layer and the resource clients is
//! expressed as an [`AppError`] carrying a classified [`ErrorKind`] and a
//! human-readable message that the presentation layer shows verbatim.

use std::fmt;
use thiserror::Error;

/// Message used when a request is attempted without a usable token.
pub const NO_VALID_SESSION_MESSAGE: &str = "No authentication token available or token expired";

/// Message used when the server rejects the bearer token.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized - Please login again";

/// Message used when the login endpoint rejects the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Message used when the back office cannot be reached.
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to the server";

/// Classification of every failure the client can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The token could not be decoded as a JWT claim set.
    MalformedToken,
    /// No usable token existed when an authenticated request was attempted.
    NoValidSession,
    /// The server rejected the bearer token (401/403).
    Unauthorized,
    /// The login endpoint rejected the supplied credentials.
    InvalidCredentials,
    /// The requested resource was not found.
    NotFound,
    /// The resource already exists.
    Conflict,
    /// The server could not be reached at all.
    TransportUnreachable,
    /// Any other non-success response; the status is kept on the error.
    ServerError,
    /// Input validation failed before a request was issued.
    Validation,
    /// A request or response body could not be (de)serialized.
    Serialization,
    /// Durable token storage failed.
    Storage,
    /// A configuration error occurred.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedToken => write!(f, "MALFORMED_TOKEN"),
            Self::NoValidSession => write!(f, "NO_VALID_SESSION"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::TransportUnreachable => write!(f, "TRANSPORT_UNREACHABLE"),
            Self::ServerError => write!(f, "SERVER_ERROR"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified application error used throughout FeeDesk.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// HTTP status of the response that produced this error, if any.
    pub status: Option<u16>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach the HTTP status that produced this error.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Create a malformed-token error.
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedToken, message)
    }

    /// Create the local fast-fail raised when no usable token exists.
    pub fn no_valid_session() -> Self {
        Self::new(ErrorKind::NoValidSession, NO_VALID_SESSION_MESSAGE)
    }

    /// Create an unauthorized error for a rejected bearer token.
    pub fn unauthorized(status: u16) -> Self {
        Self::new(ErrorKind::Unauthorized, UNAUTHORIZED_MESSAGE).with_status(status)
    }

    /// Create an error for credentials rejected by the login endpoint.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, INVALID_CREDENTIALS_MESSAGE).with_status(401)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message).with_status(404)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message).with_status(409)
    }

    /// Create a transport failure with its underlying cause.
    pub fn transport_unreachable(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_source(ErrorKind::TransportUnreachable, UNREACHABLE_MESSAGE, source)
    }

    /// Create a generic server error; the status is embedded in the message.
    pub fn server_error(status: u16, reason: &str) -> Self {
        Self::new(ErrorKind::ServerError, format!("Error: {status} - {reason}")).with_status(status)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Whether this error coincided with a forced logout.
    pub fn forced_logout(&self) -> bool {
        matches!(self.kind, ErrorKind::Unauthorized | ErrorKind::NoValidSession)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            status: self.status,
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
