//! # route53-scanner-provider
//!
//! Zone and record enumeration for AWS Route 53, consumed by the scanner TUI.
//!
//! The wire protocol is not reimplemented here: all network traffic goes
//! through the official `aws-sdk-route53` crate. This crate contributes the
//! pieces around it:
//!
//! - [`ScanCredentials`] — the three values captured by the credential form.
//! - [`HostedZone`] / [`ResourceRecord`] — the provider-independent shapes the
//!   UI renders, including the derived display value for a record.
//! - [`ZoneSource`] — the trait seam between the scan orchestrator and the
//!   provider, so the orchestrator can be exercised against a scripted source.
//! - [`Route53Provider`] — the one real implementation.
//! - [`ProviderError`] — a unified, serializable error type the SDK's errors
//!   are mapped onto.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use route53_scanner_provider::{Route53Provider, ScanCredentials, ZoneSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ScanCredentials {
//!         access_key_id: "AKIA...".to_string(),
//!         secret_access_key: "...".to_string(),
//!         region: "ap-south-1".to_string(),
//!     };
//!     let provider = Route53Provider::new(&credentials).await;
//!
//!     for zone in provider.list_zones().await? {
//!         for record in provider.list_records(&zone.id).await? {
//!             println!("{} {} -> {}", record.name, record.record_type, record.display_value());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Failures
//! are surfaced once and never retried; classification (credentials vs.
//! permission vs. network) is derived from the SDK's service error codes.

mod error;
mod route53;
mod traits;
mod types;

pub use error::{ProviderError, Result};
pub use route53::Route53Provider;
pub use traits::ZoneSource;
pub use types::{HostedZone, ResourceRecord, ScanCredentials};
