use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::ItemError;

/// Lifecycle status of a found item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Waiting for its owner. Every item starts here.
    #[default]
    Unclaimed,
    /// Picked up by its owner.
    Claimed,
}

impl ItemStatus {
    /// Returns the storage representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Unclaimed => "unclaimed",
            ItemStatus::Claimed => "claimed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unclaimed" => Ok(ItemStatus::Unclaimed),
            "claimed" => Ok(ItemStatus::Claimed),
            _ => Err(ItemError::UnknownStatus(s.to_string())),
        }
    }
}

/// A single lost-and-found record as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by storage on creation, never reused.
    pub id: i64,
    pub student_name: String,
    pub student_email: String,
    pub item_name: String,
    /// Empty when the reporter gave no description.
    #[serde(default)]
    pub description: String,
    pub location_found: String,
    /// Date the item was found, kept exactly as reported.
    pub date_found: String,
    pub status: ItemStatus,
}

/// A validated item ready to be inserted.
///
/// Has no id (storage assigns it) and its status is always
/// [`ItemStatus::Unclaimed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub student_name: String,
    pub student_email: String,
    pub item_name: String,
    pub description: String,
    pub location_found: String,
    pub date_found: String,
}

impl NewItem {
    /// Status every new item is stored with.
    pub fn status(&self) -> ItemStatus {
        ItemStatus::Unclaimed
    }

    /// Builds the stored record once storage has assigned an id.
    pub fn into_item(self, id: i64) -> Item {
        let status = self.status();
        Item {
            id,
            student_name: self.student_name,
            student_email: self.student_email,
            item_name: self.item_name,
            description: self.description,
            location_found: self.location_found,
            date_found: self.date_found,
            status,
        }
    }
}
