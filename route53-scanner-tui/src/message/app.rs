//! Application main message enum.

use super::ScanEvent;

/// Application message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application.
    Quit,

    /// Move focus to the next form field.
    NextField,

    /// Move focus to the previous form field.
    PrevField,

    /// Type a character into the focused field.
    Input(char),

    /// Delete the last character of the focused field.
    Backspace,

    /// Toggle secret-key visibility.
    ToggleSecrets,

    /// Submit the credential form and start a scan.
    Submit,

    /// Progress reported by the scan task.
    Scan(ScanEvent),

    /// Periodic housekeeping (toast expiry).
    Tick,

    /// No operation (ignored events).
    Noop,
}
