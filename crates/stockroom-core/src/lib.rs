//! # stockroom-core: Pure Inventory Rules
//!
//! Domain types, input validation and the stock rule for the Stockroom
//! inventory tracker. Nothing in here touches the disk or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal Form (apps/desktop)                    │   │
//! │  │   Search ──► Stock Change ──► Logs ──► Add New Product          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands::*                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │   types (Product, StockLogEntry, SearchField)                   │   │
//! │  │   validation (form fields)   stock (floor-at-zero rule)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockroom-db (the Store, SQLite)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types
//! - [`error`] - Domain error types
//! - [`validation`] - Form field validation and parsing
//! - [`stock`] - Quantity arithmetic with the non-negative floor
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::stock::apply_delta;
//! use stockroom_core::validation::parse_delta;
//!
//! let delta = parse_delta("-5").unwrap();
//! assert_eq!(apply_delta("SKU1", 10, delta).unwrap(), 5);
//! assert!(apply_delta("SKU1", 5, -100).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;
