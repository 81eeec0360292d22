//! # Terminal Form
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   draw(app) ──► crossterm::event::read() ──► app.handle_key(key)        │
//! │       ▲                                            │                    │
//! │       │                                  Some(action)?                  │
//! │       │                                            ▼                    │
//! │       └──────────── runtime.block_on(app.perform(action, db))           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop ends on `Action::Quit`. The terminal is restored on every exit
//! path, including errors from the loop itself.

pub mod app;
pub mod input;
pub mod render;

use std::io;

use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tokio::runtime::Runtime;
use tracing::info;

use crate::state::{ConfigState, DbState};
use app::App;

/// Takes over the terminal and runs the form until the operator quits.
pub fn run_app(runtime: &Runtime, db: &DbState, config: &ConfigState) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    info!("Form started");

    let result = event_loop(&mut terminal, runtime, db, config);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    runtime: &Runtime,
    db: &DbState,
    config: &ConfigState,
) -> io::Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|frame| render::draw(frame, &app, &config.title))?;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = app.handle_key(key) {
                runtime.block_on(app.perform(action, db));
            }
        }
    }

    Ok(())
}
