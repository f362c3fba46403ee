//! Event layer: translates terminal input into messages.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::AppMessage;
use crate::model::App;

/// Polls for the next terminal event, waiting at most `timeout`.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translates an event into a message.
pub fn handle_event(event: &Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(*key_event, app),
        // Resizes redraw on the next pass anyway
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, _app: &App) -> AppMessage {
    // Press only; Release/Repeat would double keystrokes on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C and Esc always quit
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        return AppMessage::Quit;
    }
    if key.code == KeyCode::Esc {
        return AppMessage::Quit;
    }

    match key.code {
        // Tab / ↓: next field
        KeyCode::Tab | KeyCode::Down => AppMessage::NextField,

        // Shift+Tab / ↑: previous field
        KeyCode::BackTab | KeyCode::Up => AppMessage::PrevField,

        // Enter: submit the form
        KeyCode::Enter => AppMessage::Submit,

        // Backspace: delete a character
        KeyCode::Backspace => AppMessage::Backspace,

        // Character input
        KeyCode::Char(ch) => {
            // Alt+s toggles secret visibility
            if key.modifiers.contains(KeyModifiers::ALT) && ch == 's' {
                AppMessage::ToggleSecrets
            } else if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                // AWS keys are mostly uppercase, so shifted chars count too
                AppMessage::Input(ch)
            } else {
                AppMessage::Noop
            }
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let app = App::new();
        assert!(matches!(
            handle_event(&press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn tab_cycles_fields() {
        let app = App::new();
        assert!(matches!(
            handle_event(&press(KeyCode::Tab, KeyModifiers::NONE), &app),
            AppMessage::NextField
        ));
        assert!(matches!(
            handle_event(&press(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::PrevField
        ));
    }

    #[test]
    fn shifted_chars_are_input() {
        let app = App::new();
        assert!(matches!(
            handle_event(&press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Input('A')
        ));
    }

    #[test]
    fn alt_s_toggles_secrets() {
        let app = App::new();
        assert!(matches!(
            handle_event(&press(KeyCode::Char('s'), KeyModifiers::ALT), &app),
            AppMessage::ToggleSecrets
        ));
        // plain s is just input
        assert!(matches!(
            handle_event(&press(KeyCode::Char('s'), KeyModifiers::NONE), &app),
            AppMessage::Input('s')
        ));
    }

    #[test]
    fn enter_submits() {
        let app = App::new();
        assert!(matches!(
            handle_event(&press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Submit
        ));
    }

    #[test]
    fn key_release_is_ignored() {
        let app = App::new();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(
            handle_event(&Event::Key(key), &app),
            AppMessage::Noop
        ));
    }
}
