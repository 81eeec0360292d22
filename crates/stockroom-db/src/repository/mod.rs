//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Operation (desktop commands)                                          │
//! │       │                                                                 │
//! │       │  db.products().adjust_stock("SKU1", -5, "bob")                 │
//! │       ▼                                                                 │
//! │  ProductRepository                    StockLogRepository               │
//! │  ├── find_by(field, value)            ├── list_for(identifier)         │
//! │  ├── adjust_stock(id, delta, who)     └── total_delta(identifier)      │
//! │  ├── add(new_product)                                                  │
//! │  └── count()                                                           │
//! │       │                                                                 │
//! │       │  SQL (values always bound, never interpolated)                  │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes that touch both tables (`adjust_stock`, `add`) run in one
//! transaction each; dropping an uncommitted transaction rolls it back.

pub mod product;
pub mod stock_log;

use sqlx::sqlite::SqliteConnection;

use crate::error::DbResult;

/// Appends one stock log row inside the caller's transaction.
///
/// The timestamp is taken here, never from the caller.
pub(crate) async fn append_log(
    conn: &mut SqliteConnection,
    identifier: &str,
    delta: i64,
    person: &str,
) -> DbResult<()> {
    sqlx::query(
        r#"
        INSERT INTO stock_logs (identifier, delta, person, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(identifier)
    .bind(delta)
    .bind(person)
    .bind(chrono::Utc::now())
    .execute(conn)
    .await?;

    Ok(())
}
