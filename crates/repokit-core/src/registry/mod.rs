//! Plugin-based registries
//!
//! DNS providers register a factory under their type name so the binary can
//! build one from configuration without a hardcoded if-else chain. Fixers are
//! looked up by their command-line name.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use repokit_core::registry::ProviderRegistry;
//!
//! let registry = ProviderRegistry::new();
//! repokit_provider_godaddy::register(&registry);
//!
//! let provider = registry.create_provider(&config.provider, dry_run)?;
//! ```

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::fixers::{
    DuplicateDeclarationsFixer, HalfFileFixer, LateImportsFixer, RepeatedBlockFixer,
    TrailingImportsFixer,
};
use crate::traits::{DnsProvider, DnsProviderFactory, Fixer};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Name that selects every registered fixer
pub const ALL_FIXERS: &str = "all";

/// Provider registry for plugin-based DNS provider creation
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes.
#[derive(Default)]
pub struct ProviderRegistry {
    /// Registered DNS provider factories
    providers: RwLock<HashMap<String, Box<dyn DnsProviderFactory>>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a DNS provider factory
    ///
    /// # Parameters
    ///
    /// - `name`: Provider type name (e.g., "godaddy")
    /// - `factory`: Factory object for creating provider instances
    pub fn register_provider(&self, name: impl Into<String>, factory: Box<dyn DnsProviderFactory>) {
        let name = name.into();
        let mut providers = self
            .providers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        providers.insert(name, factory);
    }

    /// Create a DNS provider from configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn DnsProvider>)`: Created provider instance
    /// - `Err(Error)`: If provider type is not registered or creation fails
    pub fn create_provider(
        &self,
        config: &ProviderConfig,
        dry_run: bool,
    ) -> Result<Box<dyn DnsProvider>> {
        let provider_type = config.type_name();
        let providers = self
            .providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let factory = providers
            .get(provider_type)
            .ok_or_else(|| Error::config(format!("Unknown provider type: {}", provider_type)))?;

        factory.create(config, dry_run)
    }

    /// List all registered provider types
    pub fn list_providers(&self) -> Vec<String> {
        let providers = self
            .providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut names: Vec<String> = providers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a provider type is registered
    pub fn has_provider(&self, name: &str) -> bool {
        let providers = self
            .providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        providers.contains_key(name)
    }
}

/// Ordered set of fixers addressable by name
#[derive(Default, Clone)]
pub struct FixerRegistry {
    fixers: Vec<Arc<dyn Fixer>>,
}

impl FixerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in fixers, in recommended run order
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HalfFileFixer));
        registry.register(Arc::new(RepeatedBlockFixer));
        registry.register(Arc::new(DuplicateDeclarationsFixer));
        registry.register(Arc::new(TrailingImportsFixer));
        registry.register(Arc::new(LateImportsFixer));
        registry
    }

    /// Add a fixer, replacing any fixer with the same name in place
    pub fn register(&mut self, fixer: Arc<dyn Fixer>) {
        match self.fixers.iter().position(|f| f.name() == fixer.name()) {
            Some(index) => self.fixers[index] = fixer,
            None => self.fixers.push(fixer),
        }
    }

    /// Look up a fixer by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Fixer>> {
        self.fixers.iter().find(|f| f.name() == name).cloned()
    }

    /// Registered names, in run order
    pub fn names(&self) -> Vec<&'static str> {
        self.fixers.iter().map(|f| f.name()).collect()
    }

    /// Registered fixers, in run order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Fixer>> {
        self.fixers.iter()
    }

    /// Resolve command-line names to fixers
    ///
    /// `all` expands to every registered fixer in run order. Explicit names
    /// keep the order given; repeats are dropped.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Arc<dyn Fixer>>> {
        if names.is_empty() {
            return Err(Error::fixer("No fixer selected"));
        }

        if names.iter().any(|n| n.as_ref() == ALL_FIXERS) {
            return Ok(self.fixers.clone());
        }

        let mut selected: Vec<Arc<dyn Fixer>> = Vec::new();
        for name in names {
            let name = name.as_ref();
            let fixer = self.get(name).ok_or_else(|| {
                Error::fixer(format!(
                    "Unknown fixer '{}'. Available: {}",
                    name,
                    self.names().join(", ")
                ))
            })?;
            if !selected.iter().any(|f| f.name() == fixer.name()) {
                selected.push(fixer);
            }
        }
        Ok(selected)
    }
}
