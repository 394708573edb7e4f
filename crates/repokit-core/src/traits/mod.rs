//! Core traits for repokit
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`Fixer`]: Detect and strip duplicated content from a file
//! - [`DnsProvider`]: Replace DNS records via registrar APIs

pub mod fixer;
pub mod dns_provider;

pub use fixer::{Fix, Fixer};
pub use dns_provider::{DnsProvider, DnsProviderFactory, UpdateResult};
