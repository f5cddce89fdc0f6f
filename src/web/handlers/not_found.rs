use crate::error::AppError;

/// Fallback for unknown paths.
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
