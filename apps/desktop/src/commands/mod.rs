//! # Operations Module
//!
//! The four actions the form can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── search_product, add_product
//! └── stock.rs    ◄─── adjust_stock, show_logs
//! ```
//!
//! ## How Operations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Operation Flow                                       │
//! │                                                                         │
//! │  Form fields (raw strings)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  XxxRequest { .. }                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  validation (stockroom_core::validation) ── bad? ──► ApiError           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  db.inner().products() / .stock_logs()   ── failed? ──► ApiError        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  DTO for the form                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod stock;

pub use product::{add_product, search_product, AddProductRequest, ProductDto, SearchRequest};
pub use stock::{adjust_stock, show_logs, AdjustStockRequest, ShowLogsRequest, StockLogDto};
