use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};
use crate::repositories::record_store::RecordStore;

/// SQLite-backed durable map over the `livestock_records` table
pub struct SqliteRecordStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteRecordStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteRecordStore {
    fn insert(&self, key: &str, value: &str) -> AppResult<Option<String>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let previous: Option<String> = tx
            .query_row(
                "SELECT value FROM livestock_records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        tx.execute(
            "INSERT OR REPLACE INTO livestock_records (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        tx.commit()?;
        Ok(previous)
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT value FROM livestock_records WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn remove(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let removed: Option<String> = conn
            .query_row(
                "DELETE FROM livestock_records WHERE key = ?1 RETURNING value",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(removed)
    }

    fn values(&self) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT value FROM livestock_records ORDER BY key")?;

        let values: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(values)
    }

    fn len(&self) -> AppResult<usize> {
        let conn = self.pool.get()?;

        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM livestock_records", [], |row| row.get(0))?;

        Ok(count as usize)
    }
}
