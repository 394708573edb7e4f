// # repokit-core
//
// Core library for repokit: source-tree maintenance and DNS record updates.
//
// ## Architecture Overview
//
// Two independent halves share this crate:
//
// - **Fixer**: Trait for single-pass duplicate-content heuristics
// - **FixEngine**: Applies one fixer to a scanned file set, rewriting in place
// - **scan**: Collects the files a fixer visits
// - **DnsProvider**: Trait for replacing DNS records via registrar APIs
// - **DnsUpdater**: Pushes a record list through a provider, in order
// - **ProviderRegistry / FixerRegistry**: Name-based lookup for both
//
// ## Design Principles
//
// 1. **Pure heuristics**: Fixers never touch the filesystem
// 2. **Best effort**: One bad file or one rejected record never aborts a run
// 3. **No hidden retries**: Every provider call is single-shot
// 4. **No embedded secrets**: Credentials only ever come from the environment

pub mod traits;
pub mod fixers;
pub mod engine;
pub mod dns;
pub mod scan;
pub mod registry;
pub mod config;
pub mod error;
pub mod text;

// Re-export core types for convenience
pub use traits::{DnsProvider, Fix, Fixer};
pub use engine::{FileOutcome, FixEngine, FixReport};
pub use dns::{DnsReport, DnsUpdater, RecordOutcome};
pub use registry::{FixerRegistry, ProviderRegistry};
pub use config::{DnsConfig, ProviderConfig, RecordConfig, RecordSet, RecordType, ScanConfig};
pub use error::{Error, Result};
