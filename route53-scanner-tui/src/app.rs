//! Application main loop.
//!
//! Runs at roughly 100 ms per pass (shorter when input arrives):
//! drain scan events, draw, poll input, update, prune toasts.

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the main loop until the app asks to quit.
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. Apply any scan progress that arrived since the last pass
        while let Some(scan_event) = app.scan.try_next_event() {
            update::update(app, AppMessage::Scan(scan_event));
        }

        // 2. Render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. Quit check
        if app.should_quit {
            break;
        }

        // 4. Poll input (100 ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(&event, app);
            update::update(app, msg);
        }

        // 5. Timed housekeeping (toast expiry)
        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
