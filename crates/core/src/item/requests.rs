//! API request types for item operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::error::ItemError;
use super::types::NewItem;

/// Request payload for registering a found item.
///
/// Every field is optional at the wire level so a missing key can be reported
/// by name instead of failing deserialization. Unknown keys, including a
/// caller-supplied `status`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_found: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_found: Option<String>,
}

impl CreateItemRequest {
    /// Validates required fields and converts into an insertable item.
    ///
    /// Fails on the first absent field, checked in the order
    /// `student_name`, `student_email`, `item_name`, `location_found`,
    /// `date_found`. A missing description becomes an empty string.
    pub fn into_new_item(self) -> Result<NewItem, ItemError> {
        Ok(NewItem {
            student_name: required(self.student_name, "student_name")?,
            student_email: required(self.student_email, "student_email")?,
            item_name: required(self.item_name, "item_name")?,
            location_found: required(self.location_found, "location_found")?,
            date_found: required(self.date_found, "date_found")?,
            description: self.description.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ItemError> {
    value.ok_or(ItemError::MissingField(field))
}
