//! # Product Operations
//!
//! Search and add-product actions.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "SKU1", selector on "identifier", presses Enter            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_product(SearchRequest { value: "SKU1", field: "identifier" })  │
//! │       │                                                                 │
//! │       ├── blank value?          → ValidationError                      │
//! │       ├── field not allow-listed? → ValidationError                    │
//! │       ▼                                                                 │
//! │  products().find_by(SearchField::Identifier, "SKU1")                   │
//! │       │                                                                 │
//! │       ├── None → NotFound                                              │
//! │       ▼                                                                 │
//! │  ProductDto shown in the result panel                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::DbState;
use stockroom_core::validation::{
    parse_quantity, parse_search_field, validate_description, validate_identifier,
    validate_person, validate_search_value,
};
use stockroom_core::{NewProduct, Product};

/// Product DTO for the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub identifier: String,
    pub description: String,
    pub quantity: i64,
    pub last_editor: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            identifier: p.identifier,
            description: p.description,
            quantity: p.quantity,
            last_editor: p.last_editor,
        }
    }
}

impl ProductDto {
    /// Lines shown in the result panel.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Identifier:  {}", self.identifier),
            format!("Description: {}", self.description),
            format!("Quantity:    {}", self.quantity),
            format!(
                "Last editor: {}",
                self.last_editor.as_deref().unwrap_or("-")
            ),
        ]
    }
}

/// Raw search form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub value: String,
    /// Field name; must be one of `identifier`, `description`, `last_editor`.
    pub field: String,
}

/// Raw add-product form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddProductRequest {
    pub identifier: String,
    pub description: String,
    pub quantity: String,
    pub person: String,
}

/// Looks up one product by an allow-listed field.
///
/// ## Returns
/// The product if found, or an `ErrorCode::NotFound` error
pub async fn search_product(db: &DbState, request: SearchRequest) -> Result<ProductDto, ApiError> {
    let start = Instant::now();
    debug!(value = %request.value, field = %request.field, "search_product command");

    let value = validate_search_value(&request.value)?;
    let field = parse_search_field(&request.field)?;

    let product = db
        .inner()
        .products()
        .find_by(field, value)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", value))?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        identifier = %product.identifier,
        "search_product complete"
    );

    Ok(ProductDto::from(product))
}

/// Adds a product together with its initial stock log entry.
///
/// ## Validation
/// - identifier, description and person must not be blank
/// - quantity must be a whole number, zero or more
///
/// ## Returns
/// The stored product, or `ErrorCode::Duplicate` when the identifier exists
pub async fn add_product(
    db: &DbState,
    request: AddProductRequest,
) -> Result<ProductDto, ApiError> {
    debug!(identifier = %request.identifier, "add_product command");

    let new = NewProduct {
        identifier: validate_identifier(&request.identifier)?.to_string(),
        description: validate_description(&request.description)?.to_string(),
        quantity: parse_quantity(&request.quantity)?,
        person: validate_person(&request.person)?.to_string(),
    };

    match db.inner().products().add(&new).await {
        Ok(product) => {
            info!(
                identifier = %product.identifier,
                quantity = product.quantity,
                person = %new.person,
                "Product added"
            );
            Ok(ProductDto::from(product))
        }
        Err(err) => {
            warn!(identifier = %new.identifier, error = %err, "add_product rejected");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_db::{Database, DbConfig};

    async fn setup() -> DbState {
        DbState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    fn add_request(identifier: &str, quantity: &str) -> AddProductRequest {
        AddProductRequest {
            identifier: identifier.to_string(),
            description: "Widget".to_string(),
            quantity: quantity.to_string(),
            person: "alice".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_then_search() {
        let db = setup().await;

        let added = add_product(&db, add_request(" SKU1 ", "10")).await.unwrap();
        assert_eq!(added.identifier, "SKU1");

        let found = search_product(
            &db,
            SearchRequest {
                value: "SKU1".to_string(),
                field: "identifier".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(found, added);
        assert_eq!(found.quantity, 10);
        assert_eq!(found.last_editor.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_search_validation() {
        let db = setup().await;

        let err = search_product(
            &db,
            SearchRequest {
                value: "   ".to_string(),
                field: "identifier".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = search_product(
            &db,
            SearchRequest {
                value: "SKU1".to_string(),
                field: "1=1; DROP TABLE products".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("identifier"));
    }

    #[tokio::test]
    async fn test_search_miss_is_not_found() {
        let db = setup().await;

        let err = search_product(
            &db,
            SearchRequest {
                value: "nobody".to_string(),
                field: "last_editor".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_add_validation_writes_nothing() {
        let db = setup().await;

        for (request, code) in [
            (add_request("", "1"), ErrorCode::ValidationError),
            (add_request("SKU1", "ten"), ErrorCode::ValidationError),
            (add_request("SKU1", "-3"), ErrorCode::ValidationError),
            (
                AddProductRequest {
                    person: " ".to_string(),
                    ..add_request("SKU1", "1")
                },
                ErrorCode::ValidationError,
            ),
        ] {
            assert_eq!(add_product(&db, request).await.unwrap_err().code, code);
        }

        assert_eq!(db.inner().products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_add() {
        let db = setup().await;
        add_product(&db, add_request("SKU1", "10")).await.unwrap();

        let err = add_product(&db, add_request("SKU1", "3")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Duplicate);
        assert!(err.message.contains("already exists"));
    }

    #[test]
    fn test_summary_lines() {
        let dto = ProductDto {
            identifier: "SKU1".to_string(),
            description: "Widget".to_string(),
            quantity: 5,
            last_editor: None,
        };
        let lines = dto.summary_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with('5'));
        assert!(lines[3].ends_with('-'));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["lastEditor"], serde_json::Value::Null);
        assert_eq!(json["quantity"], 5);
    }
}
