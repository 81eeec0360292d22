//! # Validation Module
//!
//! Validation and parsing of raw form input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Operation (desktop commands)                                 │
//! │  └── THIS MODULE: required fields, integer parsing, allow-lists        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store rule (stock::apply_delta)                              │
//! │  └── Quantity never below zero                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / UNIQUE constraints                                     │
//! │  └── CHECK (quantity >= 0)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_delta, validate_identifier};
//!
//! assert_eq!(validate_identifier("  SKU1 ").unwrap(), "SKU1");
//! assert_eq!(parse_delta("+3").unwrap(), 3);
//! ```

use crate::error::ValidationError;
use crate::types::SearchField;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Trims `value` and rejects it when blank.
pub fn require<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Validates a product identifier and returns it trimmed.
///
/// Any non-blank text is accepted, so every identifier the Store holds can
/// be adjusted and have its logs listed.
pub fn validate_identifier(identifier: &str) -> ValidationResult<&str> {
    require("identifier", identifier)
}

/// Validates a product description and returns it trimmed.
pub fn validate_description(description: &str) -> ValidationResult<&str> {
    require("description", description)
}

/// Validates the name of the person making a change.
pub fn validate_person(person: &str) -> ValidationResult<&str> {
    require("person", person)
}

/// Validates a search value. Only blankness is checked; any text may be
/// looked up.
pub fn validate_search_value(value: &str) -> ValidationResult<&str> {
    require("search value", value)
}

/// Parses a search field name against the allow-list.
pub fn parse_search_field(field: &str) -> ValidationResult<SearchField> {
    field.parse()
}

// =============================================================================
// Numeric Parsers
// =============================================================================

fn parse_integer(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = require(field, raw)?;
    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number".to_string(),
        })
}

/// Parses a signed stock change.
///
/// ## Rules
/// - Must not be blank
/// - Must be a whole number; a leading `+` or `-` is accepted
///
/// ```rust
/// use stockroom_core::validation::parse_delta;
///
/// assert_eq!(parse_delta("-5").unwrap(), -5);
/// assert!(parse_delta("five").is_err());
/// assert!(parse_delta("1.5").is_err());
/// ```
pub fn parse_delta(raw: &str) -> ValidationResult<i64> {
    parse_integer("stock change", raw)
}

/// Parses the initial quantity of a new product.
///
/// ## Rules
/// - Must be a whole number
/// - Must not be negative
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let qty = parse_integer("quantity", raw)?;
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }
    Ok(qty)
}

// =============================================================================
// Unit Tests
// =============================================================================
