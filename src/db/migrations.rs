// src/db/migrations.rs
//
// Database schema initialization
//
// PRINCIPLES:
// - One table, created if missing
// - No automatic data rewrites
// - Clear error messages
// - Idempotent operations

use rusqlite::Connection;

use crate::error::{AppError, AppResult};

/// Schema embedded at compile time
pub(crate) const SCHEMA: &str = include_str!("../../schema.sql");

/// Initialize the database schema
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| AppError::Other(format!("Failed to apply schema: {}", e)))?;

    Ok(())
}

/// Verify database integrity
///
/// Runs SQLite's integrity check.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    if result != "ok" {
        return Err(AppError::Other(format!("Database integrity check failed: {}", result)));
    }

    Ok(())
}

/// Get database statistics
///
/// Returns useful info for debugging and monitoring
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn
        .query_row("PRAGMA page_count", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let page_size: i64 = conn
        .query_row("PRAGMA page_size", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let record_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM livestock_records", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        record_count,
    })
}

/// Database statistics
#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub record_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_initialize_fresh_database() {
        let conn = open();
        initialize_database(&conn).unwrap();

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(table_count, 1);
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = open();

        initialize_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO livestock_records (key, value) VALUES ('k', '{}')",
            [],
        )
        .unwrap();
        initialize_database(&conn).unwrap();

        let stats = get_database_stats(&conn).unwrap();
        assert_eq!(stats.record_count, 1);
    }

    #[test]
    fn test_database_stats() {
        let conn = open();
        initialize_database(&conn).unwrap();

        let stats = get_database_stats(&conn).unwrap();

        assert!(stats.size_bytes > 0);
        assert_eq!(stats.record_count, 0);
    }

    #[test]
    fn test_integrity_check() {
        let conn = open();
        initialize_database(&conn).unwrap();

        verify_database_integrity(&conn).unwrap();
    }
}
