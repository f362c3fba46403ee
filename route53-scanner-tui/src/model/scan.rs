//! Scan state: the loading flag, the accumulated records and the event
//! channel from the scan task.

use route53_scanner_provider::ResourceRecord;
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};

use crate::message::ScanEvent;

/// Scan state.
pub struct ScanState {
    /// Whether a scan is in flight. Drives the submit guard and the
    /// "Scanning..." hint.
    pub loading: bool,

    /// Records from the last completed scan, in zone iteration order.
    pub records: Vec<ResourceRecord>,

    /// Event channel of the in-flight scan task, if any.
    pub events: Option<UnboundedReceiver<ScanEvent>>,
}

impl ScanState {
    /// Idle state with no records.
    pub fn new() -> Self {
        Self {
            loading: false,
            records: Vec::new(),
            events: None,
        }
    }

    /// Marks a scan as started: sets loading and clears displayed records.
    pub fn begin(&mut self, events: UnboundedReceiver<ScanEvent>) {
        self.loading = true;
        self.records.clear();
        self.events = Some(events);
    }

    /// Pulls the next pending scan event, if one has arrived.
    ///
    /// Drops the channel once the task side has hung up.
    pub fn try_next_event(&mut self) -> Option<ScanEvent> {
        let receiver = self.events.as_mut()?;
        match receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.events = None;
                None
            }
        }
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
