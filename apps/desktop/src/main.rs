//! # Stockroom Entry Point
//!
//! ## Startup Sequence
//! 1. Resolve configuration (database + log paths)
//! 2. Initialize tracing (to the log file)
//! 3. Open the database & ensure tables exist
//! 4. Present the form
//!
//! The actual setup is in lib.rs for better testability.

fn main() {
    if let Err(err) = stockroom_desktop_lib::run() {
        eprintln!("stockroom: {err}");
        std::process::exit(1);
    }
}
