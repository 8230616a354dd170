//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the items table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_name TEXT NOT NULL,
    student_email TEXT NOT NULL,
    item_name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    location_found TEXT NOT NULL,
    date_found TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'unclaimed'
);
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, student_name, student_email, item_name, description, location_found, date_found, status
FROM items
ORDER BY id ASC
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, student_name, student_email, item_name, description, location_found, date_found, status
FROM items
WHERE id = ?1
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (student_name, student_email, item_name, description, location_found, date_found, status)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

/// `?1` is a pattern from `lostfound_core::storage::like_pattern`.
pub const SEARCH_ITEMS: &str = r#"
SELECT id, student_name, student_email, item_name, description, location_found, date_found, status
FROM items
WHERE item_name LIKE ?1 ESCAPE '\'
   OR description LIKE ?1 ESCAPE '\'
   OR location_found LIKE ?1 ESCAPE '\'
ORDER BY id ASC
"#;

pub const PING: &str = "SELECT 1";
