//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Lookup by an allow-listed field
//! - Stock adjustment with a floor at zero
//! - Insert with an initial log entry
//!
//! ## Stock Adjustment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  adjust_stock("SKU1", -5, "bob")                        │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │    SELECT product WHERE identifier = 'SKU1'   ── none? ─► NotFound     │
//! │    apply_delta(10, -5)                        ── < 0 ? ─► Rule(...)    │
//! │    UPDATE products SET quantity = 5, last_editor = 'bob'               │
//! │    INSERT INTO stock_logs ('SKU1', -5, 'bob', now)                     │
//! │  COMMIT                                                                │
//! │                                                                         │
//! │  Any early return drops the transaction → rollback, nothing written.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::SqliteConnection;
use sqlx::SqlitePool;
use tracing::debug;

use stockroom_core::stock::apply_delta;
use stockroom_core::{NewProduct, Product, SearchField};

use crate::error::{DbError, DbResult};
use crate::repository::append_log;

const PRODUCT_COLUMNS: &str = "id, identifier, description, quantity, last_editor";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo.find_by(SearchField::Identifier, "SKU1").await?;
/// let updated = repo.adjust_stock("SKU1", -5, "bob").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Finds a product whose `field` equals `value`.
    ///
    /// The column name comes from the closed [`SearchField`] enum, so no
    /// caller text ever reaches the SQL string; `value` is a bound parameter.
    /// Description and last editor are not unique: the earliest-added match
    /// wins.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find_by(&self, field: SearchField, value: &str) -> DbResult<Option<Product>> {
        debug!(field = %field, value = %value, "Finding product");

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE {} = ?1 ORDER BY id LIMIT 1",
            field.column()
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Gets a product by its identifier.
    pub async fn get_by_identifier(&self, identifier: &str) -> DbResult<Option<Product>> {
        self.find_by(SearchField::Identifier, identifier).await
    }

    /// Applies a signed stock change and records it in the log.
    ///
    /// ## Arguments
    /// * `identifier` - Product identifier
    /// * `delta` - Change in stock (negative for deductions)
    /// * `person` - Who made the change; becomes the product's last editor
    ///
    /// ## Returns
    /// * `Ok(Product)` - The product after the change
    /// * `Err(DbError::NotFound)` - No product with that identifier
    /// * `Err(DbError::Rule(CoreError::InsufficientStock))` - Would go below zero
    ///
    /// Both writes commit together or not at all.
    pub async fn adjust_stock(
        &self,
        identifier: &str,
        delta: i64,
        person: &str,
    ) -> DbResult<Product> {
        debug!(identifier = %identifier, delta = %delta, person = %person, "Adjusting stock");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let current = fetch_by_identifier(&mut tx, identifier)
            .await?
            .ok_or_else(|| DbError::not_found("Product", identifier))?;

        let quantity = apply_delta(identifier, current.quantity, delta)?;

        sqlx::query(
            r#"
            UPDATE products
            SET quantity = ?2, last_editor = ?3
            WHERE id = ?1
            "#,
        )
        .bind(current.id)
        .bind(quantity)
        .bind(person)
        .execute(&mut *tx)
        .await?;

        append_log(&mut tx, identifier, delta, person).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(Product {
            quantity,
            last_editor: Some(person.to_string()),
            ..current
        })
    }

    /// Inserts a new product and its initial log entry.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product with its generated row id
    /// * `Err(DbError::UniqueViolation)` - Identifier already exists
    ///
    /// Both writes commit together or not at all; a duplicate leaves the
    /// existing product untouched.
    pub async fn add(&self, new: &NewProduct) -> DbResult<Product> {
        debug!(identifier = %new.identifier, quantity = %new.quantity, "Adding product");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO products (identifier, description, quantity, last_editor)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new.identifier)
        .bind(&new.description)
        .bind(new.quantity)
        .bind(&new.person)
        .execute(&mut *tx)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { .. } => DbError::duplicate("identifier", &new.identifier),
            other => other,
        })?;

        append_log(&mut tx, &new.identifier, new.quantity, &new.person).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(Product {
            id: inserted.last_insert_rowid(),
            identifier: new.identifier.clone(),
            description: new.description.clone(),
            quantity: new.quantity,
            last_editor: Some(new.person.clone()),
        })
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

async fn fetch_by_identifier(
    conn: &mut SqliteConnection,
    identifier: &str,
) -> DbResult<Option<Product>> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE identifier = ?1");
    let product = sqlx::query_as::<_, Product>(&sql)
        .bind(identifier)
        .fetch_optional(conn)
        .await?;
    Ok(product)
}

// =============================================================================
// Unit Tests
// =============================================================================
