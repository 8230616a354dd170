use thiserror::Error;

use crate::item::ItemError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ItemError> for RepositoryError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::MissingField(field) => RepositoryError::MissingField(field),
            ItemError::UnknownStatus(_) => RepositoryError::InvalidData(err.to_string()),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
