//! Timed toast notifications.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Toast severity, which picks the border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Neutral,
}

/// One transient notification.
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    raised: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            raised: Instant::now(),
        }
    }

    /// Whether this toast has outlived its TTL at `now`.
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised) >= TOAST_TTL
    }
}

/// The stack of currently visible toasts, newest last.
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Success, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Error, message));
    }

    pub fn neutral(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Neutral, message));
    }

    /// Removes toasts that have expired at `now`.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut stack = ToastStack::new();
        stack.error("first");
        stack.success("second");

        let messages: Vec<&str> = stack.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(
            stack.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![ToastKind::Error, ToastKind::Success]
        );
    }

    #[test]
    fn prune_drops_only_expired_toasts() {
        let mut stack = ToastStack::new();
        stack.neutral("short lived");

        // Not expired yet
        stack.prune(Instant::now());
        assert!(!stack.is_empty());

        // Well past the TTL
        stack.prune(Instant::now() + TOAST_TTL + Duration::from_millis(1));
        assert!(stack.is_empty());
    }
}
