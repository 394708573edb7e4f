// # GoDaddy DNS Provider
//
// This crate provides a GoDaddy DNS provider implementation for repokit.
//
// - ✅ One HTTP request per record
// - ✅ Success only on HTTP 200 or 201; everything else is an error that
//      carries the status and the response body
// - ✅ HTTP timeout configured (30 seconds)
// - ✅ Dry-run mode for safe testing
// - ❌ NO retry logic
// - ❌ NO caching
//
// ## Security Requirements
//
// - API key and secret NEVER appear in logs or Debug output
// - Credentials MUST come from the environment, never from source
// - Provider MUST fail fast if either credential is empty
//
// ## API Reference
//
// - Domains API v1: https://developer.godaddy.com/doc/endpoint/domains
// - Replace records by type and name:
//   PUT `/v1/domains/{domain}/records/{type}/{name}`
//   body `[{"data": "...", "ttl": 600}]`

use async_trait::async_trait;
use repokit_core::config::{ProviderConfig, RecordConfig, RecordType};
use repokit_core::traits::{DnsProvider, DnsProviderFactory, UpdateResult};
use repokit_core::{Error, Result};
use serde::Serialize;
use std::time::Duration;

/// GoDaddy production API base URL
pub const GODADDY_API_BASE: &str = "https://api.godaddy.com";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider name used in errors and logs
const PROVIDER: &str = "godaddy";

/// One entry of the PUT body
#[derive(Debug, Serialize)]
struct RecordPayload<'a> {
    data: &'a str,
    ttl: u32,
}

/// GoDaddy DNS provider
///
/// # Dry-Run Mode
///
/// When `dry_run` is true the provider logs the intended PUT and returns
/// [`UpdateResult::DryRun`] without contacting the API.
pub struct GoDaddyProvider {
    /// API key
    /// ⚠️ NEVER log this value
    api_key: String,

    /// API secret
    /// ⚠️ NEVER log this value
    api_secret: String,

    /// API base URL, without trailing slash
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,

    /// Dry-run mode: log the request instead of sending it
    dry_run: bool,
}

// Custom Debug implementation that hides the credentials
impl std::fmt::Debug for GoDaddyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoDaddyProvider")
            .field("api_key", &"<REDACTED>")
            .field("api_secret", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl GoDaddyProvider {
    /// Create a new GoDaddy provider
    ///
    /// # Parameters
    ///
    /// - `api_key` / `api_secret`: production or OTE credentials
    /// - `base_url`: API base URL; `None` selects production
    /// - `dry_run`: If true, log PUT requests instead of sending them
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        base_url: Option<String>,
        dry_run: bool,
    ) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() || api_secret.is_empty() {
            return Err(Error::config("GoDaddy API key and secret are required"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url
            .unwrap_or_else(|| GODADDY_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            api_secret,
            base_url,
            client,
            dry_run,
        })
    }

    /// Create a provider against the production API (live mode)
    pub fn new_live(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::new(api_key, api_secret, None, false)
    }

    /// Create a provider against the production API (dry-run mode)
    pub fn new_dry_run(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::new(api_key, api_secret, None, true)
    }

    /// Endpoint for all records of one type and name
    pub fn record_url(&self, domain: &str, record: &RecordConfig) -> String {
        format!(
            "{}/v1/domains/{}/records/{}/{}",
            self.base_url,
            domain,
            record.record_type.as_str(),
            record.name
        )
    }

    fn authorization(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }
}

/// Map a non-accepted response to an error
///
/// The response body is kept verbatim so the caller can show what the
/// registrar said.
fn rejection(status: reqwest::StatusCode, body: &str, record: &RecordConfig) -> Error {
    match status.as_u16() {
        401 | 403 => Error::auth(format!(
            "{}: invalid API key/secret or the account lacks DNS access. Status: {} - {}",
            PROVIDER, status, body
        )),
        404 => Error::not_found(format!(
            "{}: domain not managed by this account. Status: {} - {}",
            PROVIDER, status, body
        )),
        422 => Error::provider(
            PROVIDER,
            format!(
                "Record rejected for {} {}. Status: {} - {}",
                record.record_type, record.name, status, body
            ),
        ),
        429 => Error::rate_limited(format!(
            "{}: rate limit exceeded. Status: {} - {}",
            PROVIDER, status, body
        )),
        500..=599 => Error::provider(
            PROVIDER,
            format!("GoDaddy server error: {} - {}", status, body),
        ),
        _ => Error::provider(
            PROVIDER,
            format!("Failed to configure record: {} - {}", status, body),
        ),
    }
}

#[async_trait]
impl DnsProvider for GoDaddyProvider {
    /// Replace the records of one type and name
    ///
    /// # API Call
    ///
    /// ```http
    /// PUT /v1/domains/example.com/records/CNAME/www
    /// Authorization: sso-key <key>:<secret>
    /// Content-Type: application/json
    ///
    /// [{"data": "app.example.net", "ttl": 3600}]
    /// ```
    async fn replace_record(&self, domain: &str, record: &RecordConfig) -> Result<UpdateResult> {
        let url = self.record_url(domain, record);
        let payload = [RecordPayload {
            data: &record.data,
            ttl: record.ttl,
        }];

        tracing::debug!(
            "Replacing {} record {} for {} [mode: {}]",
            record.record_type,
            record.name,
            domain,
            if self.dry_run { "DRY-RUN" } else { "LIVE" }
        );

        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would send PUT request to {} with payload: {}",
                url,
                serde_json::to_string(&payload)?
            );
            return Ok(UpdateResult::DryRun);
        }

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.authorization())
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::provider(PROVIDER, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if matches!(status.as_u16(), 200 | 201) {
            tracing::debug!("GoDaddy accepted {} {}: {}", record.record_type, record.name, status);
            return Ok(UpdateResult::Applied {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        Err(rejection(status, &body, record))
    }

    fn supports_record(&self, record: &RecordConfig) -> bool {
        // Names go straight into the URL path.
        !record.name.is_empty()
            && record.name.len() <= 253
            && !record.name.contains('/')
            && !record.name.chars().any(char::is_whitespace)
            && (record.name != "@" || record.record_type != RecordType::Ns)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

/// Factory for creating GoDaddy providers
pub struct GoDaddyFactory;

impl DnsProviderFactory for GoDaddyFactory {
    fn create(&self, config: &ProviderConfig, dry_run: bool) -> Result<Box<dyn DnsProvider>> {
        let ProviderConfig::GoDaddy {
            api_key,
            api_secret,
            base_url,
        } = config;

        if api_key.is_empty() || api_secret.is_empty() {
            return Err(Error::config("GoDaddy API key and secret are required"));
        }

        if dry_run {
            tracing::warn!("GoDaddy provider running in DRY-RUN mode - no changes will be made");
        }

        Ok(Box::new(GoDaddyProvider::new(
            api_key.clone(),
            api_secret.clone(),
            base_url.clone(),
            dry_run,
        )?))
    }
}

/// Register the GoDaddy provider with a registry
///
/// # Example
///
/// ```rust
/// use repokit_core::ProviderRegistry;
///
/// let registry = ProviderRegistry::new();
/// repokit_provider_godaddy::register(&registry);
/// assert!(registry.has_provider("godaddy"));
/// ```
pub fn register(registry: &repokit_core::ProviderRegistry) {
    registry.register_provider(PROVIDER, Box::new(GoDaddyFactory));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str, secret: &str) -> ProviderConfig {
        ProviderConfig::GoDaddy {
            api_key: key.to_string(),
            api_secret: secret.to_string(),
            base_url: None,
        }
    }

    #[test]
    fn test_factory_creation() {
        let provider = GoDaddyFactory.create(&config("key", "secret"), false);
        assert!(provider.is_ok());
    }

    #[test]
    fn test_factory_missing_credentials() {
        assert!(GoDaddyFactory.create(&config("", "secret"), false).is_err());
        assert!(GoDaddyFactory.create(&config("key", ""), false).is_err());
    }

    #[test]
    fn test_empty_credentials_fail() {
        assert!(matches!(
            GoDaddyProvider::new("", "", None, false),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_dry_run_mode() {
        let provider_dry = GoDaddyProvider::new_dry_run("key", "secret").unwrap();
        let provider_live = GoDaddyProvider::new_live("key", "secret").unwrap();

        assert!(provider_dry.dry_run);
        assert!(!provider_live.dry_run);
    }

    #[test]
    fn test_record_url() {
        let provider = GoDaddyProvider::new(
            "key",
            "secret",
            Some("https://api.ote-godaddy.com/".to_string()),
            false,
        )
        .unwrap();
        let record = RecordConfig::new("asuid.www", RecordType::Txt, "ABC");

        assert_eq!(
            provider.record_url("example.com", &record),
            "https://api.ote-godaddy.com/v1/domains/example.com/records/TXT/asuid.www"
        );
    }

    #[test]
    fn test_supports_record() {
        let provider = GoDaddyProvider::new_live("key", "secret").unwrap();

        assert!(provider.supports_record(&RecordConfig::new("www", RecordType::Cname, "x")));
        assert!(provider.supports_record(&RecordConfig::new("@", RecordType::Cname, "x")));
        assert!(!provider.supports_record(&RecordConfig::new("", RecordType::Txt, "x")));
        assert!(!provider.supports_record(&RecordConfig::new("a/b", RecordType::Txt, "x")));
        assert!(!provider.supports_record(&RecordConfig::new("@", RecordType::Ns, "x")));
    }

    #[test]
    fn test_provider_name() {
        let provider = GoDaddyProvider::new_live("key", "secret").unwrap();
        assert_eq!(provider.provider_name(), "godaddy");
    }

    #[test]
    fn test_credentials_not_exposed_in_debug() {
        let provider = GoDaddyProvider::new_live("secret_key_12345", "secret_value_678").unwrap();

        let debug_str = format!("{:?}", provider);
        assert!(!debug_str.contains("secret_key_12345"));
        assert!(!debug_str.contains("secret_value_678"));
        assert!(debug_str.contains("GoDaddyProvider"));
    }

    #[test]
    fn test_payload_shape() {
        let payload = [RecordPayload {
            data: "app.example.net",
            ttl: 3600,
        }];
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!([{ "data": "app.example.net", "ttl": 3600 }])
        );
    }
}
