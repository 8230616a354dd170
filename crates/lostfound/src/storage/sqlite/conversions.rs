//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use lostfound_core::item::{Item, ItemStatus};
use rusqlite::Row;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, student_name, student_email, item_name, description,
/// location_found, date_found, status
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    let status: String = row.get(7)?;

    Ok(Item {
        id: row.get(0)?,
        student_name: row.get(1)?,
        student_email: row.get(2)?,
        item_name: row.get(3)?,
        description: row.get(4)?,
        location_found: row.get(5)?,
        date_found: row.get(6)?,
        status: parse_status(&status)?,
    })
}

/// Parse ItemStatus from its stored string.
fn parse_status(s: &str) -> rusqlite::Result<ItemStatus> {
    s.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })
}
