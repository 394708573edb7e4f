//! Configuration types for repokit
//!
//! This module defines the configuration structures for both halves of the
//! toolkit: source-tree scanning for the fixers, and DNS record updates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which files the fixers visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directories to walk, relative to the base directory
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    /// File extension to match, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Files whose name contains any of these markers are skipped
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Compute fixes without rewriting files
    #[serde(default)]
    pub dry_run: bool,
}

impl ScanConfig {
    /// Create a scan configuration with the defaults
    pub fn new() -> Self {
        Self {
            roots: default_roots(),
            extension: default_extension(),
            exclude: default_exclude(),
            dry_run: false,
        }
    }

    /// Replace the scanned roots
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file extension to match
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Replace the exclusion markers
    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.roots.is_empty() {
            return Err(crate::Error::config("No source roots configured"));
        }
        if self.extension.is_empty() {
            return Err(crate::Error::config("File extension cannot be empty"));
        }
        if self.extension.contains('.') {
            return Err(crate::Error::config(format!(
                "File extension must not contain a dot: '{}'",
                self.extension
            )));
        }
        if self.exclude.iter().any(String::is_empty) {
            return Err(crate::Error::config("Exclusion markers cannot be empty"));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("apps/api/src"), PathBuf::from("libs")]
}

fn default_extension() -> String {
    "ts".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![".spec.".to_string(), ".d.".to_string()]
}

/// Complete DNS update configuration
#[derive(Debug, Clone)]
pub struct DnsConfig {
    /// DNS provider configuration
    pub provider: ProviderConfig,

    /// Domain the records belong to (e.g., "example.com")
    pub domain: String,

    /// Records to configure, in order
    pub records: Vec<RecordConfig>,
}

impl DnsConfig {
    /// Combine provider credentials with a record set
    pub fn new(provider: ProviderConfig, record_set: RecordSet) -> Self {
        Self {
            provider,
            domain: record_set.domain,
            records: record_set.records,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.provider.validate()?;
        validate_domain_name(&self.domain)?;

        if self.records.is_empty() {
            return Err(crate::Error::config("No records configured"));
        }

        for record in &self.records {
            record.validate()?;
        }

        Ok(())
    }
}

/// DNS provider configuration
///
/// Credentials are never read from source or from the record file; the binary
/// fills them in from the environment.
#[derive(Clone)]
pub enum ProviderConfig {
    /// GoDaddy Domains API
    GoDaddy {
        /// API key
        api_key: String,
        /// API secret
        api_secret: String,
        /// API base URL (defaults to production)
        base_url: Option<String>,
    },
}

impl ProviderConfig {
    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::GoDaddy {
                api_key,
                api_secret,
                base_url,
            } => {
                if api_key.is_empty() {
                    return Err(crate::Error::config("GoDaddy API key cannot be empty"));
                }
                if api_secret.is_empty() {
                    return Err(crate::Error::config("GoDaddy API secret cannot be empty"));
                }
                if let Some(url) = base_url
                    && !url.starts_with("https://")
                    && !url.starts_with("http://")
                {
                    return Err(crate::Error::config(format!(
                        "GoDaddy API URL must use HTTP or HTTPS scheme. Got: {}",
                        url
                    )));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ProviderConfig::GoDaddy { .. } => "godaddy",
        }
    }
}

// Credentials stay out of Debug output
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderConfig::GoDaddy { base_url, .. } => f
                .debug_struct("GoDaddy")
                .field("api_key", &"<REDACTED>")
                .field("api_secret", &"<REDACTED>")
                .field("base_url", base_url)
                .finish(),
        }
    }
}

/// Minimum TTL accepted by the registrar
pub const MIN_TTL: u32 = 600;

/// A DNS record to configure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Record name relative to the domain ("www", "asuid", "@" for the apex)
    pub name: String,

    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Record value
    pub data: String,

    /// Time-to-live in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Whether a failure of this record fails the whole run
    #[serde(default = "default_required")]
    pub required: bool,
}

impl RecordConfig {
    /// Create a new required record with the default TTL
    pub fn new(name: impl Into<String>, record_type: RecordType, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            data: data.into(),
            ttl: default_ttl(),
            required: true,
        }
    }

    /// Set the TTL
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Mark the record as required or best effort
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Fully qualified name, with "@" resolved to the apex
    pub fn fqdn(&self, domain: &str) -> String {
        if self.name == "@" {
            domain.to_string()
        } else {
            format!("{}.{}", self.name, domain)
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.name.is_empty() {
            return Err(crate::Error::config("Record name cannot be empty"));
        }
        if self.name.len() > 253 {
            return Err(crate::Error::config(format!(
                "Record name too long: {} chars (max 253)",
                self.name.len()
            )));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(crate::Error::config(format!(
                "Record name contains whitespace: '{}'",
                self.name
            )));
        }
        if self.data.trim().is_empty() {
            return Err(crate::Error::config(format!(
                "Record data cannot be empty for {} {}",
                self.record_type, self.name
            )));
        }
        if self.ttl < MIN_TTL {
            return Err(crate::Error::config(format!(
                "TTL for {} {} must be at least {} seconds. Got: {}",
                self.record_type, self.name, MIN_TTL, self.ttl
            )));
        }
        Ok(())
    }
}

fn default_ttl() -> u32 {
    3600
}

fn default_required() -> bool {
    true
}

/// DNS record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name
    Cname,
    /// Text record
    Txt,
    /// Mail exchanger
    Mx,
    /// Name server
    Ns,
    /// Service locator
    Srv,
    /// Certification authority authorization
    Caa,
}

impl RecordType {
    /// Wire name used in API paths
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Txt => "TXT",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Srv => "SRV",
            RecordType::Caa => "CAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record file passed on the command line
///
/// ```json
/// {
///   "domain": "example.com",
///   "records": [
///     { "name": "www", "type": "CNAME", "data": "app.example.net", "ttl": 3600 },
///     { "name": "@", "type": "CNAME", "data": "app.example.net", "required": false }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    /// Domain the records belong to
    pub domain: String,

    /// Records to configure, in order
    pub records: Vec<RecordConfig>,
}

impl RecordSet {
    /// Load a record set from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config(format!("Cannot read record file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a record set from JSON text
    pub fn from_json_str(raw: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Basic domain name validation (RFC 1035 lengths, LDH labels)
pub fn validate_domain_name(domain: &str) -> Result<(), crate::Error> {
    if domain.is_empty() {
        return Err(crate::Error::config("Domain name cannot be empty"));
    }

    if domain.len() > 253 {
        return Err(crate::Error::config(format!(
            "Domain name too long: {} chars (max 253). Got: {}",
            domain.len(),
            domain
        )));
    }

    if !domain.contains('.') {
        return Err(crate::Error::config(format!(
            "Domain name must have at least two labels: '{}'",
            domain
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(crate::Error::config(format!(
                "Domain name has empty label: '{}'",
                domain
            )));
        }

        if label.len() > 63 {
            return Err(crate::Error::config(format!(
                "Domain label too long: {} chars (max 63). Label: '{}'",
                label.len(),
                label
            )));
        }

        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(crate::Error::config(format!(
                "Domain label contains invalid characters. Label: '{}'",
                label
            )));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(crate::Error::config(format!(
                "Domain label cannot start or end with hyphen. Label: '{}'",
                label
            )));
        }
    }

    Ok(())
}
