//! Update layer: the only place that mutates the model.

use std::time::Instant;

use crate::backend::scan::{credential_hint, spawn_scan};
use crate::message::{AppMessage, ScanEvent};
use crate::model::App;

/// Applies a message to the application state.
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::NextField => app.form.focus_next(),
        AppMessage::PrevField => app.form.focus_prev(),
        AppMessage::Input(ch) => app.form.input(ch),
        AppMessage::Backspace => app.form.backspace(),
        AppMessage::ToggleSecrets => app.form.toggle_secrets(),

        AppMessage::Submit => submit(app),

        AppMessage::Scan(event) => apply_scan_event(app, event),

        AppMessage::Tick => {
            app.toasts.prune(Instant::now());
        }

        AppMessage::Noop => {}
    }
}

/// Starts a scan from the current form values.
///
/// The loading flag is the UI-side reentrancy guard: while a scan is in
/// flight, submission is ignored entirely.
fn submit(app: &mut App) {
    if app.scan.loading {
        return;
    }

    if let Some(credentials) = app.form.submit() {
        let events = spawn_scan(credentials);
        app.scan.begin(events);
    }
}

/// Applies one scan progress event: toasts, records, loading flag.
fn apply_scan_event(app: &mut App, event: ScanEvent) {
    match event {
        ScanEvent::NoZones => {
            app.toasts.error("No hosted zones found in your account");
            app.scan.loading = false;
        }

        ScanEvent::ZoneFailed { zone_name } => {
            app.toasts
                .error(format!("Failed to fetch records for zone {zone_name}"));
        }

        ScanEvent::Completed { records } => {
            if records.is_empty() {
                app.toasts.neutral("No DNS records found in any zones");
            } else {
                app.toasts
                    .success(format!("Found {} DNS records", records.len()));
            }
            app.scan.records = records;
            app.scan.loading = false;
        }

        ScanEvent::Failed { message } => {
            if message.is_empty() {
                app.toasts.error("Failed to scan Route53");
            } else {
                app.toasts.error(message.clone());
            }
            if let Some(hint) = credential_hint(&message) {
                app.toasts.error(hint);
            }
            app.scan.loading = false;
        }
    }
}
