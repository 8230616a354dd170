use std::env;

/// Default SQLite database location, relative to the working directory.
pub const DEFAULT_SQLITE_PATH: &str = "instance/items.db";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "instance/items.db")
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "instance/items.db")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| DEFAULT_SQLITE_PATH.to_string()),
        }
    }
}
