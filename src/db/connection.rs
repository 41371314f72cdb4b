// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};

use crate::db::migrations::SCHEMA;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Get the default database file path
///
/// Database is stored in the application data directory.
/// Path structure: {APP_DATA}/livestock-registry/registry.db
pub fn get_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("livestock-registry").join("registry.db"))
}

/// Create a file-backed connection pool
///
/// - SQLite in WAL mode so readers never block the writer
/// - Busy timeout set to avoid immediate errors
/// - Parent directory is created if missing
pub fn create_connection_pool(db_path: &Path, max_size: u32) -> AppResult<ConnectionPool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
    });

    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    log::debug!("Opened database pool at {}", db_path.display());
    Ok(pool)
}

/// Create an in-memory pool
///
/// Capped at a single connection so every caller sees the same database.
/// The schema is applied when that connection is opened.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::memory().with_init(|conn| conn.execute_batch(SCHEMA));

    Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create in-memory pool: {}", e)))
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_path_shape() {
        if let Ok(path) = get_database_path() {
            assert!(path.ends_with("livestock-registry/registry.db"));
        }
    }

    #[test]
    fn test_file_pool_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("registry.db");

        let pool = create_connection_pool(&db_path, 2).unwrap();
        let conn = get_connection(&pool).unwrap();

        let result: i32 = conn.query_row("SELECT 1 + 1", [], |row| row.get(0)).unwrap();
        assert_eq!(result, 2);
        assert!(db_path.exists());
    }

    #[test]
    fn test_memory_pool_has_schema() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();

        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='livestock_records')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists);
    }

    #[test]
    fn test_memory_pool_shares_one_database() {
        let pool = create_memory_pool().unwrap();
        assert_eq!(pool.max_size(), 1);

        {
            let conn = get_connection(&pool).unwrap();
            conn.execute(
                "INSERT INTO livestock_records (key, value) VALUES ('k', '{}')",
                [],
            )
            .unwrap();
        }

        let conn = get_connection(&pool).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM livestock_records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
