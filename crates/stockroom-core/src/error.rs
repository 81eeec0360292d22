//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Stock rule violations                          │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Store failures (wraps CoreError as Rule)       │
//! │                                                                         │
//! │  desktop app errors                                                    │
//! │  └── ApiError         - What the form shows                            │
//! │                                                                         │
//! │  Flow: ValidationError ─────────────────────► ApiError → Form          │
//! │        CoreError → DbError ─────────────────► ApiError → Form          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Stock rule errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Applying the delta would take the quantity below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Stock Change: -100   (current quantity 5)
    ///      │
    ///      ▼
    /// InsufficientStock { identifier: "SKU1", available: 5, delta: -100 }
    ///      │
    ///      ▼
    /// Form shows: "Insufficient stock for SKU1: available 5, change -100"
    /// ```
    #[error("Insufficient stock for {identifier}: available {available}, change {delta}")]
    InsufficientStock {
        identifier: String,
        available: i64,
        delta: i64,
    },

    /// The new quantity does not fit in an i64.
    #[error("Quantity for {identifier} would overflow")]
    QuantityOverflow { identifier: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any Store call; no state changes when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. a non-integer stock change).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            identifier: "SKU1".to_string(),
            available: 5,
            delta: -100,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for SKU1: available 5, change -100"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "identifier".to_string(),
        };
        assert_eq!(err.to_string(), "identifier is required");

        let err = ValidationError::Negative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be negative");
    }
}
