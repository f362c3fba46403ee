//! Message layer: the bridge between Event and Update.
//!
//! Every user action and every piece of scan progress is expressed as a
//! message; the update layer is the only consumer.

mod app;
mod scan;

pub use app::AppMessage;
pub use scan::ScanEvent;
