use thiserror::Error;

/// Errors that can occur when validating or decoding items.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Unknown item status: {0}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        assert_eq!(
            ItemError::MissingField("item_name").to_string(),
            "Missing required field: item_name"
        );
        assert_eq!(
            ItemError::UnknownStatus("lost".to_string()).to_string(),
            "Unknown item status: lost"
        );
    }
}
