//! DNS record updater
//!
//! Pushes a list of records to a [`DnsProvider`], one request per record, in
//! order. There is no retry and no backoff: a rejected record is reported and
//! the next one is attempted.
//!
//! The overall run succeeds when every record marked `required` succeeded.
//! Best-effort records (for example a CNAME at the zone apex, which many
//! registrars refuse) are reported but do not fail the run.

use crate::config::RecordConfig;
use crate::traits::{DnsProvider, UpdateResult};
use tracing::{error, info, warn};

/// Result of pushing one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    /// The record that was pushed
    pub record: RecordConfig,
    /// Provider result, or the error text (status and response body)
    pub result: Result<UpdateResult, String>,
}

impl RecordOutcome {
    /// True only when the provider accepted the record (or dry-run)
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    /// Error text, when the record failed
    pub fn error(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }
}

/// Summary of a DNS run
#[derive(Debug, Clone)]
pub struct DnsReport {
    /// Domain the records belong to
    pub domain: String,
    /// One outcome per record, in order
    pub outcomes: Vec<RecordOutcome>,
}

impl DnsReport {
    /// True when every required record succeeded
    pub fn succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .filter(|o| o.record.required)
            .all(RecordOutcome::succeeded)
    }

    /// Outcomes that failed
    pub fn failures(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Pushes records for a single domain through one provider
pub struct DnsUpdater {
    /// Provider used for every record
    provider: Box<dyn DnsProvider>,

    /// Domain the records belong to
    domain: String,
}

impl DnsUpdater {
    /// Create a new updater
    pub fn new(provider: Box<dyn DnsProvider>, domain: impl Into<String>) -> Self {
        Self {
            provider,
            domain: domain.into(),
        }
    }

    /// Domain this updater writes to
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Push one record
    pub async fn apply_record(&self, record: &RecordConfig) -> RecordOutcome {
        info!(
            "Configuring {} record: {} -> {} via {}",
            record.record_type,
            record.fqdn(&self.domain),
            record.data,
            self.provider.provider_name()
        );

        if !self.provider.supports_record(record) {
            let message = format!(
                "{} does not support {} records named '{}'",
                self.provider.provider_name(),
                record.record_type,
                record.name
            );
            warn!("{}", message);
            return RecordOutcome {
                record: record.clone(),
                result: Err(message),
            };
        }

        let result = match self.provider.replace_record(&self.domain, record).await {
            Ok(update) => {
                info!(
                    "Configured {} record for {}: {:?}",
                    record.record_type, record.name, update
                );
                Ok(update)
            }
            Err(e) => {
                error!(
                    "Failed to configure {} record for {}: {}",
                    record.record_type, record.name, e
                );
                Err(e.to_string())
            }
        };

        RecordOutcome {
            record: record.clone(),
            result,
        }
    }

    /// Push every record, sequentially
    pub async fn apply_all(&self, records: &[RecordConfig]) -> DnsReport {
        self.apply_all_with(records, |_| {}).await
    }

    /// Push every record, sequentially, calling `on_record` after each one
    pub async fn apply_all_with<F>(&self, records: &[RecordConfig], mut on_record: F) -> DnsReport
    where
        F: FnMut(&RecordOutcome),
    {
        let mut outcomes = Vec::with_capacity(records.len());
        for record in records {
            let outcome = self.apply_record(record).await;
            on_record(&outcome);
            outcomes.push(outcome);
        }

        DnsReport {
            domain: self.domain.clone(),
            outcomes,
        }
    }
}
