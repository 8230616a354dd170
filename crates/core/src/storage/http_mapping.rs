//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `MissingField` -> 400 (Bad Request)
/// - `ConnectionFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
///
/// `/readyz` reports unreachable storage as 503 on its own.
///
/// # Examples
///
/// ```
/// use lostfound_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Item",
///     id: "7".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::MissingField(_) => 400,
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::InvalidData(_)
        | RepositoryError::QueryFailed(_) => 500,
    }
}
