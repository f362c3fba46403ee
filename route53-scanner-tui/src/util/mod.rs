//! Infrastructure helpers: terminal setup and teardown.

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
