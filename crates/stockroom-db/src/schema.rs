//! # Schema Bootstrap
//!
//! Creates the two Store tables on startup.
//!
//! ## How Bootstrap Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Startup Contract                                   │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products    (no-op when present)           │
//! │  CREATE TABLE IF NOT EXISTS stock_logs  (no-op when present)           │
//! │  CREATE INDEX IF NOT EXISTS ...                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Present the form                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no version table and no migration runner: the statements are
//! safe to replay against any file this crate has created.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Table and index definitions, applied in order.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        identifier  TEXT    NOT NULL UNIQUE,
        description TEXT    NOT NULL,
        quantity    INTEGER NOT NULL CHECK (quantity >= 0),
        last_editor TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS stock_logs (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        identifier  TEXT    NOT NULL,
        delta       INTEGER NOT NULL,
        person      TEXT    NOT NULL,
        created_at  TEXT    NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_stock_logs_identifier
        ON stock_logs (identifier, created_at)
    "#,
];

/// Creates any missing tables and indexes.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Runs in one transaction, so a half-created schema is never left behind
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring database schema");

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    for statement in SCHEMA {
        sqlx::query(*statement)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::SchemaFailed(e.to_string()))?;
    }

    tx.commit()
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    debug!(statements = SCHEMA.len(), "Schema ready");
    Ok(())
}

/// Which Store tables exist in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    pub products: bool,
    pub stock_logs: bool,
}

impl SchemaStatus {
    /// True when both tables are present.
    pub fn is_complete(&self) -> bool {
        self.products && self.stock_logs
    }
}

/// Reports which tables exist (diagnostics).
pub async fn schema_status(pool: &SqlitePool) -> DbResult<SchemaStatus> {
    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('products', 'stock_logs')",
    )
    .fetch_all(pool)
    .await?;

    Ok(SchemaStatus {
        products: tables.iter().any(|t| t == "products"),
        stock_logs: tables.iter().any(|t| t == "stock_logs"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_fresh_file_has_no_tables_until_bootstrap() {
        let db = Database::new(DbConfig::in_memory().ensure_schema(false))
            .await
            .unwrap();

        let before = schema_status(db.pool()).await.unwrap();
        assert!(!before.products);
        assert!(!before.stock_logs);

        db.ensure_schema().await.unwrap();
        assert!(schema_status(db.pool()).await.unwrap().is_complete());
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        assert!(schema_status(db.pool()).await.unwrap().is_complete());
    }
}
