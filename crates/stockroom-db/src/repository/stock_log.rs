//! # Stock Log Repository
//!
//! Read access to the append-only stock log. Rows are only ever written by
//! [`ProductRepository`](crate::ProductRepository) inside its transactions.

use sqlx::SqlitePool;
use tracing::debug;

use stockroom_core::StockLogEntry;

use crate::error::DbResult;

/// Repository for stock log queries.
#[derive(Debug, Clone)]
pub struct StockLogRepository {
    pool: SqlitePool,
}

impl StockLogRepository {
    /// Creates a new StockLogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StockLogRepository { pool }
    }

    /// Lists every log entry for `identifier`, most recent first.
    ///
    /// Entries written within the same clock tick fall back to insertion
    /// order (higher row id first). An unknown identifier yields an empty
    /// vector, not an error.
    pub async fn list_for(&self, identifier: &str) -> DbResult<Vec<StockLogEntry>> {
        debug!(identifier = %identifier, "Listing stock logs");

        let entries = sqlx::query_as::<_, StockLogEntry>(
            r#"
            SELECT id, identifier, delta, person, created_at
            FROM stock_logs
            WHERE identifier = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(identifier)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = entries.len(), "Stock logs loaded");
        Ok(entries)
    }

    /// Sum of all deltas logged for `identifier` (0 when none).
    ///
    /// Equals the product's current quantity; useful for audits.
    pub async fn total_delta(&self, identifier: &str) -> DbResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(delta), 0) FROM stock_logs WHERE identifier = ?1",
        )
        .bind(identifier)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use stockroom_core::NewProduct;

    #[tokio::test]
    async fn test_unknown_identifier_has_no_logs() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.stock_logs().list_for("NOPE").await.unwrap().is_empty());
        assert_eq!(db.stock_logs().total_delta("NOPE").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_logs_are_newest_first_and_sum_to_quantity() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let products = db.products();
        products
            .add(&NewProduct {
                identifier: "SKU1".to_string(),
                description: "Widget".to_string(),
                quantity: 10,
                person: "alice".to_string(),
            })
            .await
            .unwrap();

        let deltas = [5_i64, -3, -20, 7, -1];
        let mut applied = vec![10_i64];
        for delta in deltas {
            if products.adjust_stock("SKU1", delta, "bob").await.is_ok() {
                applied.push(delta);
            }
        }
        // 10 + 5 - 3 = 12, so -20 is rejected and skipped.
        assert_eq!(applied, vec![10, 5, -3, 7, -1]);

        let entries = db.stock_logs().list_for("SKU1").await.unwrap();
        assert_eq!(entries.len(), applied.len());

        let newest_first: Vec<i64> = entries.iter().map(|e| e.delta).collect();
        let mut expected = applied.clone();
        expected.reverse();
        assert_eq!(newest_first, expected);

        for pair in entries.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }

        let quantity = products
            .get_by_identifier("SKU1")
            .await
            .unwrap()
            .unwrap()
            .quantity;
        assert_eq!(quantity, 18);
        assert_eq!(db.stock_logs().total_delta("SKU1").await.unwrap(), quantity);
        assert_eq!(entries.iter().map(|e| e.delta).sum::<i64>(), quantity);
    }

    #[tokio::test]
    async fn test_rejected_adjustment_is_not_logged() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .add(&NewProduct {
                identifier: "SKU1".to_string(),
                description: "Widget".to_string(),
                quantity: 1,
                person: "alice".to_string(),
            })
            .await
            .unwrap();

        assert!(db.products().adjust_stock("SKU1", -2, "bob").await.is_err());

        let entries = db.stock_logs().list_for("SKU1").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].person, "alice");
    }
}
