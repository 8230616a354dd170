//! Item CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use lostfound_core::item::CreateItemRequest;

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List all items.
    List,
    /// Register a found item.
    Create {
        /// Name of the student reporting the item.
        #[arg(long)]
        student_name: String,
        /// Email of the student reporting the item.
        #[arg(long)]
        student_email: String,
        /// What was found.
        #[arg(long)]
        item_name: String,
        /// Optional free-text description.
        #[arg(long)]
        description: Option<String>,
        /// Where it was found.
        #[arg(long)]
        location_found: String,
        /// When it was found (YYYY-MM-DD, default: today).
        #[arg(long)]
        date_found: Option<NaiveDate>,
    },
    /// Get item by ID.
    Get {
        /// Item ID.
        id: i64,
    },
    /// Search items by keyword.
    Search {
        /// Substring to look for in name, description and location.
        keyword: String,
    },
}

/// Builds the API request for a `create` invocation.
///
/// A missing date defaults to `today`.
pub fn create_request(
    student_name: String,
    student_email: String,
    item_name: String,
    description: Option<String>,
    location_found: String,
    date_found: Option<NaiveDate>,
    today: NaiveDate,
) -> CreateItemRequest {
    let date_found = date_found.unwrap_or(today);
    CreateItemRequest {
        student_name: Some(student_name),
        student_email: Some(student_email),
        item_name: Some(item_name),
        description,
        location_found: Some(location_found),
        date_found: Some(date_found.format("%Y-%m-%d").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_create_request_defaults_date_to_today() {
        let req = create_request(
            "A".to_string(),
            "a@x.com".to_string(),
            "Wallet".to_string(),
            None,
            "Library".to_string(),
            None,
            today(),
        );

        assert_eq!(req.date_found.as_deref(), Some("2024-03-09"));
        assert_eq!(req.description, None);
        assert!(req.into_new_item().is_ok());
    }

    #[test]
    fn test_create_request_keeps_given_date() {
        let req = create_request(
            "A".to_string(),
            "a@x.com".to_string(),
            "Wallet".to_string(),
            Some("Brown".to_string()),
            "Library".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1),
            today(),
        );

        assert_eq!(req.date_found.as_deref(), Some("2024-01-01"));
        assert_eq!(req.description.as_deref(), Some("Brown"));
    }
}
