//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  StockLogEntry  │   │   SearchField   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  identifier     │◄──│  identifier     │   │  Identifier     │       │
//! │  │  description    │   │  delta (±)      │   │  Description    │       │
//! │  │  quantity ≥ 0   │   │  person         │   │  LastEditor     │       │
//! │  │  last_editor    │   │  created_at     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quantity Invariant
//! A product's `quantity` equals the sum of the `delta` of every log entry
//! with its identifier. The Store keeps this true by writing the product row
//! and the log row in the same transaction.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Product
// =============================================================================

/// An inventory item with a current quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Row id assigned by the Store.
    pub id: i64,

    /// Unique business identifier (the primary lookup key).
    pub identifier: String,

    /// Free-text description.
    pub description: String,

    /// Current stock level, never negative.
    pub quantity: i64,

    /// Who last changed the stock level.
    pub last_editor: Option<String>,
}

/// Fields needed to create a product.
///
/// The initial `quantity` is also written as the first log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub identifier: String,
    pub description: String,
    pub quantity: i64,
    pub person: String,
}

// =============================================================================
// Stock Log
// =============================================================================

/// One immutable record of a quantity change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockLogEntry {
    /// Row id assigned by the Store.
    pub id: i64,

    /// Product identifier this change applies to.
    pub identifier: String,

    /// Signed change: positive for additions, negative for deductions.
    pub delta: i64,

    /// Who made the change.
    pub person: String,

    /// When the change was recorded (assigned by the Store).
    pub created_at: DateTime<Utc>,
}

impl StockLogEntry {
    /// Formats the delta with an explicit `+` for positive values.
    ///
    /// ```rust
    /// # use stockroom_core::StockLogEntry;
    /// # use chrono::Utc;
    /// let entry = StockLogEntry {
    ///     id: 1,
    ///     identifier: "SKU1".into(),
    ///     delta: 10,
    ///     person: "alice".into(),
    ///     created_at: Utc::now(),
    /// };
    /// assert_eq!(entry.signed_delta(), "+10");
    /// ```
    pub fn signed_delta(&self) -> String {
        if self.delta > 0 {
            format!("+{}", self.delta)
        } else {
            self.delta.to_string()
        }
    }
}

// =============================================================================
// Search Field
// =============================================================================

/// Product columns a search may filter on.
///
/// This enum is the allow-list: the Store only ever builds a query from
/// [`SearchField::column`], never from caller-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    #[default]
    Identifier,
    Description,
    LastEditor,
}

impl SearchField {
    /// Every searchable field, in selector order.
    pub const ALL: [SearchField; 3] = [
        SearchField::Identifier,
        SearchField::Description,
        SearchField::LastEditor,
    ];

    /// Column name in the `products` table.
    pub const fn column(self) -> &'static str {
        match self {
            SearchField::Identifier => "identifier",
            SearchField::Description => "description",
            SearchField::LastEditor => "last_editor",
        }
    }

    /// Human-readable label for the field selector.
    pub const fn label(self) -> &'static str {
        match self {
            SearchField::Identifier => "Identifier",
            SearchField::Description => "Description",
            SearchField::LastEditor => "Last editor",
        }
    }

    /// The next field in selector order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous field in selector order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for SearchField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SearchField::ALL
            .into_iter()
            .find(|f| f.column() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "search field".to_string(),
                allowed: SearchField::ALL
                    .iter()
                    .map(|f| f.column().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
