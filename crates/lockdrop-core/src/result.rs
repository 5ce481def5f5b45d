//! Convenience result type alias for Lockdrop.

use crate::error::AppError;

/// A specialized `Result` type for Lockdrop operations.
pub type AppResult<T> = Result<T, AppError>;
