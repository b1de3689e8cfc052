//! Classification of failures below the HTTP status line.

use reqwest::StatusCode;
use tracing::warn;

use feedesk_core::error::{AppError, ErrorKind};

/// Map an error raised while sending a request or reading its body.
///
/// Anything that prevented a response from arriving is reported as
/// unreachable (status 0); a body that arrived but could not be decoded
/// is a serialization error.
pub fn send_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        return AppError::with_source(
            ErrorKind::Serialization,
            format!("Invalid response body: {err}"),
            err,
        );
    }
    warn!(error = %err, "Back office unreachable");
    AppError::transport_unreachable(err).with_status(0)
}

/// Generic error for a non-success status with no more specific meaning.
pub fn status_error(status: StatusCode) -> AppError {
    AppError::server_error(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status"),
    )
}
