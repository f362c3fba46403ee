//! Model layer: the single source of truth for application state.
//!
//! Pure data structures only; all mutation goes through the update layer.

mod app;
mod form;
mod scan;
mod toast;

pub use app::App;
pub use form::{FormField, FormState};
pub use scan::ScanState;
pub use toast::{Toast, ToastKind, ToastStack};
