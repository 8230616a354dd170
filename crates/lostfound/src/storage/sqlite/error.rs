//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `lostfound_core::storage`.

use lostfound_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CANTOPEN` → `RepositoryError::ConnectionFailed`
/// - Column values that don't decode → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_rusqlite_error(err: &rusqlite::Error) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(column, _, source) => {
            RepositoryError::InvalidData(format!("Column {column}: {source}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        tokio_rusqlite::Error::Close((_, rusqlite_err)) => {
            RepositoryError::ConnectionFailed(format!("Failed to close connection: {rusqlite_err}"))
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
