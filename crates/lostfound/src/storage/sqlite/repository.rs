//! SQLite repository implementation.
//!
//! Implements [`ItemRepository`] using SQLite. Every operation opens its own
//! connection and closes it before returning.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use lostfound_core::item::{CreateItemRequest, Item};
use lostfound_core::storage::{like_pattern, ItemRepository, RepositoryError, Result};

use super::conversions::row_to_item;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based item repository.
///
/// Holds only the database path. Connections are scoped to a single call.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
}

impl SqliteRepository {
    /// Creates a new repository backed by the file at `path`.
    ///
    /// The parent directory and the database file are created if they don't
    /// exist, and the `items` table is created once.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RepositoryError::ConnectionFailed(format!(
                    "Cannot create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let repo = Self { path };
        repo.init_schema().await?;

        tracing::info!(path = %repo.path().display(), "SQLite item storage ready");

        Ok(repo)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Initialize the database schema.
    async fn init_schema(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
    }

    /// Runs `f` on a freshly opened connection, then closes it.
    ///
    /// The connection is released on every path: explicitly closed after `f`
    /// returns, and dropped (which stops its worker thread) if opening or
    /// closing fails.
    async fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Connection::open(&self.path)
            .await
            .map_err(map_tokio_rusqlite_error)?;

        let result = conn.call(f).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to close SQLite connection");
        }

        result.map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn list_items(&self) -> Result<Vec<Item>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_ALL_ITEMS).map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;

            let mut items = Vec::new();
            for row_result in rows {
                items.push(row_result.map_err(wrap_err)?);
            }
            Ok(items)
        })
        .await
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
            match stmt.query_row([id], row_to_item) {
                Ok(item) => Ok(Some(item)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
    }

    async fn create_item(&self, request: CreateItemRequest) -> Result<i64> {
        let item = request.into_new_item()?;
        let status = item.status().as_str();

        self.with_connection(move |conn| {
            conn.execute(
                schema::INSERT_ITEM,
                rusqlite::params![
                    item.student_name,
                    item.student_email,
                    item.item_name,
                    item.description,
                    item.location_found,
                    item.date_found,
                    status
                ],
            )
            .map_err(wrap_err)?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn search_items(&self, keyword: &str) -> Result<Vec<Item>> {
        let pattern = like_pattern(keyword);

        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(schema::SEARCH_ITEMS).map_err(wrap_err)?;
            let rows = stmt.query_map([&pattern], row_to_item).map_err(wrap_err)?;

            let mut items = Vec::new();
            for row_result in rows {
                items.push(row_result.map_err(wrap_err)?);
            }
            Ok(items)
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lostfound_core::item::ItemStatus;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, SqliteRepository) {
        let dir = TempDir::new().unwrap();
        let repo = SqliteRepository::new(dir.path().join("items.db"))
            .await
            .unwrap();
        (dir, repo)
    }

    fn request(item_name: &str, description: Option<&str>, location: &str) -> CreateItemRequest {
        CreateItemRequest {
            student_name: Some("A".to_string()),
            student_email: Some("a@x.com".to_string()),
            item_name: Some(item_name.to_string()),
            description: description.map(str::to_string),
            location_found: Some(location.to_string()),
            date_found: Some("2024-01-01".to_string()),
        }
    }

    #[tokio::test]
    async fn test_new_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("instance").join("items.db");

        let repo = SqliteRepository::new(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(repo.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (_dir, repo) = setup().await;

        assert!(repo.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let (_dir, repo) = setup().await;

        let id = repo
            .create_item(request("Wallet", None, "Library"))
            .await
            .unwrap();

        let items = repo.list_items().await.unwrap();
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item.id, id);
        assert_eq!(item.student_name, "A");
        assert_eq!(item.student_email, "a@x.com");
        assert_eq!(item.item_name, "Wallet");
        assert_eq!(item.description, "");
        assert_eq!(item.location_found, "Library");
        assert_eq!(item.date_found, "2024-01-01");
        assert_eq!(item.status, ItemStatus::Unclaimed);
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_in_insertion_order() {
        let (_dir, repo) = setup().await;

        let first = repo
            .create_item(request("Wallet", None, "Library"))
            .await
            .unwrap();
        let second = repo
            .create_item(request("Umbrella", None, "Gym"))
            .await
            .unwrap();

        assert_ne!(first, second);

        let names: Vec<String> = repo
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.item_name)
            .collect();
        assert_eq!(names, vec!["Wallet", "Umbrella"]);
    }

    #[tokio::test]
    async fn test_get_item() {
        let (_dir, repo) = setup().await;
        let id = repo
            .create_item(request("Wallet", Some("Brown"), "Library"))
            .await
            .unwrap();

        let item = repo.get_item(id).await.unwrap().unwrap();

        assert_eq!(item.item_name, "Wallet");
        assert_eq!(item.description, "Brown");
    }

    #[tokio::test]
    async fn test_get_missing_item_is_none() {
        let (_dir, repo) = setup().await;

        assert_eq!(repo.get_item(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_missing_field_inserts_nothing() {
        let (_dir, repo) = setup().await;
        let mut incomplete = request("Wallet", None, "Library");
        incomplete.item_name = None;

        let result = repo.create_item(incomplete).await;

        assert_eq!(result, Err(RepositoryError::MissingField("item_name")));
        assert!(repo.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_any_searchable_field() {
        let (_dir, repo) = setup().await;
        repo.create_item(request("Phone", None, "Library"))
            .await
            .unwrap();
        repo.create_item(request("Case", Some("Blue phone case"), "Gym"))
            .await
            .unwrap();
        repo.create_item(request("Charger", None, "Phone booth"))
            .await
            .unwrap();
        repo.create_item(request("Wallet", Some("Leather"), "Cafeteria"))
            .await
            .unwrap();

        let results = repo.search_items("phone").await.unwrap();

        let names: Vec<&str> = results.iter().map(|item| item.item_name.as_str()).collect();
        assert_eq!(names, vec!["Phone", "Case", "Charger"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let (_dir, repo) = setup().await;
        repo.create_item(request("iPhone", None, "Library"))
            .await
            .unwrap();

        assert_eq!(repo.search_items("IPHONE").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let (_dir, repo) = setup().await;
        repo.create_item(request("Wallet", None, "Library"))
            .await
            .unwrap();

        assert!(repo.search_items("umbrella").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let (_dir, repo) = setup().await;
        repo.create_item(request("Wallet", None, "Library"))
            .await
            .unwrap();
        repo.create_item(request("Notebook", Some("100% cotton cover"), "Gym"))
            .await
            .unwrap();

        let percent = repo.search_items("%").await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].item_name, "Notebook");

        assert!(repo.search_items("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_stored_status() {
        let (_dir, repo) = setup().await;
        let conn = rusqlite::Connection::open(repo.path()).unwrap();
        conn.execute(
            "INSERT INTO items (student_name, student_email, item_name, location_found, date_found, status)
             VALUES ('A', 'a@x.com', 'Wallet', 'Library', '2024-01-01', 'lost')",
            [],
        )
        .unwrap();
        drop(conn);

        let result = repo.list_items().await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_ping() {
        let (_dir, repo) = setup().await;

        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_fails_when_directory_is_gone() {
        let (dir, repo) = setup().await;
        drop(dir);

        let result = repo.ping().await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }
}
