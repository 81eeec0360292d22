//! # Stockroom Desktop Library
//!
//! Configures and runs the Stockroom terminal form.
//!
//! ## Module Organization
//! ```text
//! stockroom_desktop_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Operation exports
//! │   ├── product.rs  ◄─── Search / add product
//! │   └── stock.rs    ◄─── Adjust stock / show logs
//! ├── ui/
//! │   ├── mod.rs      ◄─── Terminal setup and event loop
//! │   ├── app.rs      ◄─── Form state and action dispatch
//! │   ├── input.rs    ◄─── Single-line text input
//! │   └── render.rs   ◄─── Drawing
//! └── error.rs        ◄─── API error type for operations
//! ```
//!
//! ## Execution Model
//! One operator, one action at a time. The event loop blocks on each Store
//! round trip (`Runtime::block_on`), then redraws.

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, DbState};
use stockroom_db::{Database, DbConfig};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Resolve Configuration ────────────────────────────────────────────► │
/// │     • STOCKROOM_DB_PATH / STOCKROOM_LOG_PATH overrides                  │
/// │     • Otherwise the platform data directory                             │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to the log file       │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • CREATE TABLE IF NOT EXISTS for both tables                        │
/// │                                                                         │
/// │  4. Run the Form ─────────────────────────────────────────────────────► │
/// │     • Until Esc / Ctrl-C                                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::from_env()?;

    init_tracing(&config.log_path)?;
    info!(
        db_path = %config.database_path.display(),
        "Starting Stockroom"
    );

    // Single operator: one thread drives the form and every Store call.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let db = runtime.block_on(Database::new(DbConfig::new(&config.database_path)))?;
    info!("Database opened and schema ensured");

    let db_state = DbState::new(db);
    let result = ui::run_app(&runtime, &db_state, &config);

    runtime.block_on(db_state.inner().close());
    info!("Stockroom stopped");

    result.map_err(Into::into)
}

/// Initializes the tracing subscriber for structured logging.
///
/// The terminal belongs to the form, so events go to `log_path`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: `info,stockroom=debug,sqlx=warn`
fn init_tracing(log_path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
