//! Convenience result type alias for FeeDesk.

use crate::error::AppError;

/// A specialized `Result` type for FeeDesk operations.
pub type AppResult<T> = Result<T, AppError>;
