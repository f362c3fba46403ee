//! `ZoneSource` trait implementation for Route 53.

use async_trait::async_trait;

use aws_sdk_route53::types::{HostedZone as SdkHostedZone, ResourceRecordSet};

use crate::error::Result;
use crate::traits::ZoneSource;
use crate::types::{HostedZone, ResourceRecord};

use super::error::map_sdk_error;
use super::{PROVIDER, Route53Provider};

impl Route53Provider {
    /// Maps an SDK hosted zone to the domain type.
    fn convert_zone(zone: &SdkHostedZone) -> HostedZone {
        HostedZone {
            id: zone.id().to_string(),
            name: zone.name().to_string(),
        }
    }

    /// Flattens an SDK record set into the display shape.
    ///
    /// The SDK models the record name as required, so no absence substitute
    /// is needed; literal values and the alias target stay mutually optional.
    fn convert_record(set: &ResourceRecordSet) -> ResourceRecord {
        ResourceRecord {
            name: set.name().to_string(),
            record_type: set.r#type().as_str().to_string(),
            ttl: set.ttl(),
            values: set
                .resource_records()
                .iter()
                .map(|r| r.value().to_string())
                .collect(),
            alias_target: set.alias_target().map(|a| a.dns_name().to_string()),
        }
    }
}

#[async_trait]
impl ZoneSource for Route53Provider {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    async fn list_zones(&self) -> Result<Vec<HostedZone>> {
        log::debug!("Fetching hosted zones");

        let output = self
            .client
            .list_hosted_zones()
            .send()
            .await
            .map_err(|e| map_sdk_error(&e))?;

        // Pagination is not followed; make truncation visible at least.
        if output.is_truncated() {
            log::warn!("Hosted zone listing is truncated, only the first page is scanned");
        }

        let zones: Vec<HostedZone> = output.hosted_zones().iter().map(Self::convert_zone).collect();
        log::debug!("Found {} hosted zones", zones.len());
        Ok(zones)
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<ResourceRecord>> {
        let zone_id = Self::strip_zone_prefix(zone_id);
        log::debug!("Fetching record sets for zone {zone_id}");

        let output = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .send()
            .await
            .map_err(|e| map_sdk_error(&e))?;

        if output.is_truncated() {
            log::warn!("Record listing for zone {zone_id} is truncated");
        }

        let records: Vec<ResourceRecord> = output
            .resource_record_sets()
            .iter()
            .map(Self::convert_record)
            .collect();
        log::debug!("Zone {zone_id}: {} record sets", records.len());
        Ok(records)
    }
}
