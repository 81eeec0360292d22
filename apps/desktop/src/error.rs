//! # API Error Type
//!
//! Unified error type for operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Form                        Operation                                  │
//! │  ────                        ─────────                                  │
//! │  Enter / F-key                                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::*  →  Result<T, ApiError>                             │  │
//! │  │                                                                  │  │
//! │  │  ValidationError ──────────────┐                                 │  │
//! │  │  DbError::NotFound ────────────┤                                 │  │
//! │  │  DbError::UniqueViolation ─────┼──► ApiError { code, message }   │  │
//! │  │  DbError::Rule(CoreError) ─────┤                                 │  │
//! │  │  storage failures ─────────────┘                                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Notice popup (title chosen from `code`, text from `message`)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No error is fatal: the form stays usable after any of them.

use serde::Serialize;
use stockroom_core::{CoreError, ValidationError};
use stockroom_db::DbError;

/// Error returned from operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for operation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not found
    NotFound,

    /// Input validation failed; nothing was sent to the Store
    ValidationError,

    /// Identifier already exists
    Duplicate,

    /// Stock change would take the quantity below zero
    InsufficientStock,

    /// Storage layer failure
    DatabaseError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::Duplicate,
                format!("Product {} '{}' already exists", field, value),
            ),
            DbError::Rule(e) => ApiError::from(e),
            other => {
                tracing::error!(error = %other, "Store operation failed");
                ApiError::new(ErrorCode::DatabaseError, other.to_string())
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::QuantityOverflow { .. } => ApiError::validation(err.to_string()),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_errors_keep_their_kind() {
        let err = ApiError::from(DbError::not_found("Product", "SKU9"));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: SKU9");

        let err = ApiError::from(DbError::duplicate("identifier", "SKU1"));
        assert_eq!(err.code, ErrorCode::Duplicate);
        assert_eq!(err.message, "Product identifier 'SKU1' already exists");

        let err = ApiError::from(DbError::Rule(CoreError::InsufficientStock {
            identifier: "SKU1".to_string(),
            available: 5,
            delta: -100,
        }));
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_storage_failures_keep_diagnostic_text() {
        let err = ApiError::from(DbError::QueryFailed("disk I/O error".to_string()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("disk I/O error"));
    }

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err = ApiError::from(ValidationError::Required {
            field: "person".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "[ValidationError] person is required");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::InsufficientStock, "not enough");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "INSUFFICIENT_STOCK", "message": "not enough" })
        );
    }
}
