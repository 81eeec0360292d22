//! # Database State
//!
//! Wraps the `Database` handle for use in operations.
//!
//! ## Usage in Operations
//! ```rust,ignore
//! pub async fn show_logs(
//!     db: &DbState,
//!     request: ShowLogsRequest,
//! ) -> Result<Vec<StockLogDto>, ApiError> {
//!     let entries = db.inner().stock_logs().list_for(&request.identifier).await?;
//!     Ok(entries.into_iter().map(StockLogDto::from).collect())
//! }
//! ```

use stockroom_db::Database;

/// Wrapper around `Database` owned by the application.
///
/// Each Store call acquires its own connection or transaction from the
/// pool and releases it when the call returns.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
