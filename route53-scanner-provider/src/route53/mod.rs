//! AWS Route 53 Provider

mod error;
mod provider;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_route53::Client;

use crate::types::ScanCredentials;

/// Provider identifier used in error tagging and logs.
pub(crate) const PROVIDER: &str = "route53";

/// AWS Route 53 provider implementation.
///
/// Authenticates with a static AK/SK pair; all traffic goes through the
/// official SDK client.
///
/// # Construction
///
/// ```rust,no_run
/// use route53_scanner_provider::{Route53Provider, ScanCredentials};
///
/// # async fn demo() {
/// let mut credentials = ScanCredentials::empty();
/// credentials.access_key_id = "your-access-key-id".to_string();
/// credentials.secret_access_key = "your-secret-access-key".to_string();
///
/// let provider = Route53Provider::new(&credentials).await;
/// # }
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
}

impl Route53Provider {
    /// Creates a provider scoped to the given credentials and region.
    ///
    /// No network call is made here; bad credentials surface on the first
    /// list operation.
    pub async fn new(credentials: &ScanCredentials) -> Self {
        let static_credentials = Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            None,
            None,
            "route53-scanner",
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(credentials.region.clone()))
            .credentials_provider(static_credentials)
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
        }
    }

    /// Strips the `/hostedzone/` path prefix Route 53 puts on zone ids.
    pub(crate) fn strip_zone_prefix(zone_id: &str) -> &str {
        zone_id.strip_prefix("/hostedzone/").unwrap_or(zone_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_zone_prefix_with_prefix() {
        assert_eq!(
            Route53Provider::strip_zone_prefix("/hostedzone/Z123ABC"),
            "Z123ABC"
        );
    }

    #[test]
    fn strip_zone_prefix_without_prefix() {
        assert_eq!(Route53Provider::strip_zone_prefix("Z123ABC"), "Z123ABC");
    }

    #[test]
    fn strip_zone_prefix_empty() {
        assert_eq!(Route53Provider::strip_zone_prefix(""), "");
    }
}
