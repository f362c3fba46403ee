//! Route 53 Scanner TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: the scan task (`backend/`)
//!
//! The render loop itself is synchronous; the scan runs as a tokio task and
//! reports back over an unbounded channel the loop drains every tick.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // The scan task needs a runtime; the UI loop stays synchronous.
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let mut terminal = init_terminal()?;

    let mut app = model::App::new();

    let result = app::run(&mut terminal, &mut app);

    // Restore the terminal whether the loop succeeded or not.
    restore_terminal(&mut terminal)?;

    result
}
