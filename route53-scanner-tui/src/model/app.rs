//! Application main state struct.

use super::{FormState, ScanState, ToastStack};

/// Application main state.
pub struct App {
    /// Quit flag.
    pub should_quit: bool,

    /// Credential form state.
    pub form: FormState,

    /// Scan state (loading flag, accumulated records, event channel).
    pub scan: ScanState,

    /// Transient notifications.
    pub toasts: ToastStack,
}

impl App {
    /// Creates the initial application state.
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: FormState::new(),
            scan: ScanState::new(),
            toasts: ToastStack::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
