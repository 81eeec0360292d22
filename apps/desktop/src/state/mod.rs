//! # State Module
//!
//! Application state handed to operations and the form.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐          ┌──────────────────┐             │
//! │          │     DbState      │          │   ConfigState    │             │
//! │          │                  │          │                  │             │
//! │          │  Database        │          │  database_path   │             │
//! │          │  (SQLite pool)   │          │  log_path        │             │
//! │          │                  │          │  title           │             │
//! │          └──────────────────┘          └──────────────────┘             │
//! │                                                                         │
//! │  Both are owned by `run()` and passed by reference; nothing is global.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;

pub use config::{ConfigError, ConfigState};
pub use db::DbState;
