//! The scan task.
//!
//! One scan walks the account once: list hosted zones, then fetch each
//! zone's record sets strictly one after another. A failing zone is reported
//! and skipped; a failure at or before zone listing ends the scan. Nothing
//! is retried.

use route53_scanner_provider::{Route53Provider, ScanCredentials, ZoneSource};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::ScanEvent;

/// Spawns a scan task for the given credentials and hands back its event
/// channel. Must run inside a tokio runtime context.
pub fn spawn_scan(credentials: ScanCredentials) -> UnboundedReceiver<ScanEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let provider = Route53Provider::new(&credentials).await;
        run_scan(&provider, &tx).await;
    });

    rx
}

/// Runs one scan against the source, emitting progress on `tx`.
///
/// Sends are fire-and-forget: if the UI side is gone the scan just stops
/// mattering.
pub(crate) async fn run_scan(source: &dyn ZoneSource, tx: &UnboundedSender<ScanEvent>) {
    log::info!("Fetching hosted zones");

    let zones = match source.list_zones().await {
        Ok(zones) => zones,
        Err(e) => {
            if e.is_expected() {
                log::warn!("Scan aborted: {e}");
            } else {
                log::error!("Scan aborted: {e}");
            }
            let _ = tx.send(ScanEvent::Failed {
                message: e.to_string(),
            });
            return;
        }
    };

    if zones.is_empty() {
        log::info!("No hosted zones in the account");
        let _ = tx.send(ScanEvent::NoZones);
        return;
    }

    let mut records = Vec::new();
    for zone in zones {
        // Strictly sequential; one zone's failure never stops the rest.
        match source.list_records(&zone.id).await {
            Ok(mut zone_records) => {
                log::info!("Zone {}: {} records", zone.name, zone_records.len());
                records.append(&mut zone_records);
            }
            Err(e) => {
                log::warn!("Zone {} failed: {e}", zone.name);
                let _ = tx.send(ScanEvent::ZoneFailed {
                    zone_name: zone.name,
                });
            }
        }
    }

    log::info!("Scan finished with {} records", records.len());
    let _ = tx.send(ScanEvent::Completed { records });
}

/// Derives the more specific credential/permission hint the UI shows next to
/// a generic scan failure, by case-insensitive substring matching.
pub fn credential_hint(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();
    if lower.contains("credentials") {
        Some("Invalid credentials. Please check your Access Key and Secret Key.")
    } else if lower.contains("permission") {
        Some("Insufficient permissions. Your IAM user needs Route53 read permissions.")
    } else {
        None
    }
}
