// # DNS Provider Trait
//
// Defines the interface for replacing DNS records via registrar APIs.
//
// ## Implementations
//
// - GoDaddy: `repokit-provider-godaddy` crate
//
// ## Usage
//
// ```rust,ignore
// use repokit_core::config::{RecordConfig, RecordType};
// use repokit_core::DnsProvider;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let provider = /* DnsProvider implementation */;
//
//     let record = RecordConfig::new("www", RecordType::Cname, "app.example.net");
//     provider.replace_record("example.com", &record).await?;
//
//     Ok(())
// }
// ```

use crate::config::{ProviderConfig, RecordConfig};
use async_trait::async_trait;

/// Result of a record replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// The provider accepted the record
    Applied {
        /// HTTP status returned by the provider (200 or 201)
        status: u16,
    },
    /// Dry-run mode: the request was logged but not sent
    DryRun,
}

/// Trait for DNS provider implementations
///
/// # Trust Level: Untrusted
///
/// Providers are isolated and single-shot:
/// - one API call per `replace_record` invocation
/// - no retry or backoff (the tool never retries)
/// - no caching between calls
/// - credentials never appear in logs or error messages
///
/// Any response other than an explicit acceptance must be returned as an
/// error carrying the status and the response body.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Replace all records of `record.record_type` named `record.name` under
    /// `domain` with the single value in `record`
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResult)`: the provider accepted the record (or dry-run)
    /// - `Err(Error)`: the request failed or was rejected
    async fn replace_record(
        &self,
        domain: &str,
        record: &RecordConfig,
    ) -> Result<UpdateResult, crate::Error>;

    /// Check if this provider can handle the given record
    fn supports_record(&self, record: &RecordConfig) -> bool;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}

/// Helper trait for constructing DNS providers from configuration
pub trait DnsProviderFactory: Send + Sync {
    /// Create a DnsProvider instance from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Configuration specific to this provider
    /// - `dry_run`: Log intended changes instead of sending them
    fn create(
        &self,
        config: &ProviderConfig,
        dry_run: bool,
    ) -> Result<Box<dyn DnsProvider>, crate::Error>;
}
