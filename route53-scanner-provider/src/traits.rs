use async_trait::async_trait;

use crate::error::Result;
use crate::types::{HostedZone, ResourceRecord};

/// The seam between the scan orchestrator and a concrete provider.
///
/// The orchestrator only ever needs two read operations, so the trait stays
/// that small; tests script it with an in-memory implementation.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    /// Provider identifier, used in error tagging and logs.
    fn id(&self) -> &'static str;

    /// Lists all hosted zones visible to the credentials.
    async fn list_zones(&self) -> Result<Vec<HostedZone>>;

    /// Lists every record set in the given zone.
    ///
    /// Accepts the zone id with or without the `/hostedzone/` path prefix.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<ResourceRecord>>;
}
