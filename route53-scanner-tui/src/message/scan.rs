//! Scan progress events.

use route53_scanner_provider::ResourceRecord;

/// Events the scan task sends back to the UI.
///
/// `NoZones`, `Completed` and `Failed` are terminal: exactly one of them
/// ends every scan and clears the loading flag. `ZoneFailed` may occur any
/// number of times before `Completed`.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// The account has no hosted zones at all.
    NoZones,

    /// One zone's record fetch failed; the scan continues.
    ZoneFailed {
        /// Name of the zone that failed.
        zone_name: String,
    },

    /// The scan finished; carries every record that was collected.
    Completed {
        /// Accumulated records across all zones, in zone iteration order.
        records: Vec<ResourceRecord>,
    },

    /// The scan failed before any zone could be processed.
    Failed {
        /// Error message text, used for the toast and hint derivation.
        message: String,
    },
}
