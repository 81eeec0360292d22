//! # Stock Operations
//!
//! Stock adjustments and the per-product change history.
//!
//! The form has no separate identifier input for these actions: both take
//! the value currently typed into the search box.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::product::ProductDto;
use crate::error::ApiError;
use crate::state::DbState;
use stockroom_core::validation::{parse_delta, validate_identifier, validate_person};
use stockroom_core::StockLogEntry;

/// Timestamp format used in the logs panel.
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw stock change form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustStockRequest {
    pub identifier: String,
    /// Signed whole number, e.g. `+5`, `-3`, `12`.
    pub delta: String,
    pub person: String,
}

/// Raw show-logs input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowLogsRequest {
    pub identifier: String,
}

/// One stock log line for the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLogDto {
    pub timestamp: String,
    pub person: String,
    /// Delta with an explicit `+` for positive changes.
    pub change: String,
}

impl From<StockLogEntry> for StockLogDto {
    fn from(entry: StockLogEntry) -> Self {
        StockLogDto {
            timestamp: entry.created_at.format(LOG_TIME_FORMAT).to_string(),
            change: entry.signed_delta(),
            person: entry.person,
        }
    }
}

impl StockLogDto {
    /// `[timestamp] person -> signed-delta`
    pub fn line(&self) -> String {
        format!("[{}] {} -> {}", self.timestamp, self.person, self.change)
    }
}

/// Applies a signed stock change and records who made it.
///
/// ## Arguments
/// * `identifier` - Product to change
/// * `delta` - Signed whole number
/// * `person` - Name recorded as last editor and in the log
///
/// ## Returns
/// The product after the change. A missing product gives
/// `ErrorCode::NotFound`; a change below zero gives
/// `ErrorCode::InsufficientStock`. Either way nothing is written.
pub async fn adjust_stock(
    db: &DbState,
    request: AdjustStockRequest,
) -> Result<ProductDto, ApiError> {
    debug!(
        identifier = %request.identifier,
        delta = %request.delta,
        person = %request.person,
        "adjust_stock command"
    );

    let identifier = validate_identifier(&request.identifier)?;
    let delta = parse_delta(&request.delta)?;
    let person = validate_person(&request.person)?;

    match db
        .inner()
        .products()
        .adjust_stock(identifier, delta, person)
        .await
    {
        Ok(product) => {
            info!(
                identifier = %identifier,
                delta = delta,
                quantity = product.quantity,
                person = %person,
                "Stock adjusted"
            );
            Ok(ProductDto::from(product))
        }
        Err(err) => {
            warn!(identifier = %identifier, delta = delta, error = %err, "adjust_stock rejected");
            Err(err.into())
        }
    }
}

/// Lists the stock history of one product, newest first.
///
/// An unknown identifier is not an error; it simply has no entries.
pub async fn show_logs(
    db: &DbState,
    request: ShowLogsRequest,
) -> Result<Vec<StockLogDto>, ApiError> {
    debug!(identifier = %request.identifier, "show_logs command");

    let identifier = validate_identifier(&request.identifier)?;
    let entries = db.inner().stock_logs().list_for(identifier).await?;

    info!(identifier = %identifier, count = entries.len(), "show_logs complete");

    Ok(entries.into_iter().map(StockLogDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::{add_product, AddProductRequest};
    use crate::error::ErrorCode;
    use chrono::{TimeZone, Utc};
    use stockroom_db::{Database, DbConfig};

    async fn setup_with_product(quantity: &str) -> DbState {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        add_product(
            &db,
            AddProductRequest {
                identifier: "SKU1".to_string(),
                description: "Widget".to_string(),
                quantity: quantity.to_string(),
                person: "alice".to_string(),
            },
        )
        .await
        .unwrap();
        db
    }

    fn adjust(delta: &str, person: &str) -> AdjustStockRequest {
        AdjustStockRequest {
            identifier: "SKU1".to_string(),
            delta: delta.to_string(),
            person: person.to_string(),
        }
    }

    #[tokio::test]
    async fn test_adjust_then_logs() {
        let db = setup_with_product("10").await;

        let product = adjust_stock(&db, adjust("-3", "bob")).await.unwrap();
        assert_eq!(product.quantity, 7);
        assert_eq!(product.last_editor.as_deref(), Some("bob"));

        let logs = show_logs(
            &db,
            ShowLogsRequest {
                identifier: "SKU1".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].person, "bob");
        assert_eq!(logs[0].change, "-3");
        assert_eq!(logs[1].person, "alice");
        assert_eq!(logs[1].change, "+10");
        assert!(logs[1].line().ends_with("] alice -> +10"));
    }

    #[tokio::test]
    async fn test_adjust_failures_are_distinct() {
        let db = setup_with_product("5").await;

        let err = adjust_stock(&db, adjust("-100", "bob")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err = adjust_stock(
            &db,
            AdjustStockRequest {
                identifier: "SKU9".to_string(),
                ..adjust("1", "bob")
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let product = db
            .inner()
            .products()
            .get_by_identifier("SKU1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, 5);
        assert_eq!(product.last_editor.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_adjust_validation() {
        let db = setup_with_product("5").await;

        for request in [adjust("abc", "bob"), adjust("", "bob"), adjust("2", "  ")] {
            let err = adjust_stock(&db, request).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }

        let logs = db.inner().stock_logs().list_for("SKU1").await.unwrap();
        assert_eq!(logs.len(), 1);
    }

    #[tokio::test]
    async fn test_show_logs_unknown_is_empty() {
        let db = setup_with_product("5").await;

        let logs = show_logs(
            &db,
            ShowLogsRequest {
                identifier: "SKU9".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(logs.is_empty());

        let err = show_logs(&db, ShowLogsRequest::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_long_identifier_can_be_adjusted() {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        let identifier = "X".repeat(150);
        db.inner()
            .products()
            .add(&stockroom_core::NewProduct {
                identifier: identifier.clone(),
                description: "Long".to_string(),
                quantity: 4,
                person: "seed".to_string(),
            })
            .await
            .unwrap();

        let product = adjust_stock(
            &db,
            AdjustStockRequest {
                identifier: identifier.clone(),
                delta: "+1".to_string(),
                person: "bob".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(product.quantity, 5);

        let logs = show_logs(&db, ShowLogsRequest { identifier }).await.unwrap();
        assert_eq!(logs.len(), 2);
    }

    #[test]
    fn test_log_line_format() {
        let dto = StockLogDto::from(StockLogEntry {
            id: 1,
            identifier: "SKU1".to_string(),
            delta: -4,
            person: "bob".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        });
        assert_eq!(dto.line(), "[2024-03-01 09:30:00] bob -> -4");
    }
}
