//! Dispatch from statistic names to subsystem processors.
//!
//! Every statistic name and every `"<subsystem>:"` sentinel maps to the
//! factory of the subsystem that exports it. Scrapes only use the sentinels.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::{Result, SipStatError};
use crate::processor::{Processor, ProcessorFactory};
use crate::statistic::Snapshot;

/// Registry of processor factories keyed by statistic name and by
/// `"<subsystem>:"` sentinel.
///
/// Populated during startup (`&mut self`), then shared read-only via `Arc`.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, ProcessorFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Sentinel key resolving one processor per subsystem.
    pub fn sentinel_key(subsystem: &str) -> String {
        format!("{subsystem}:")
    }

    /// Bind `key` to `factory`. Re-binding the same factory is a no-op; a
    /// different factory on a taken key is a startup error, and so is a
    /// sentinel key naming another subsystem than the factory's.
    pub fn register(&mut self, key: impl Into<String>, factory: ProcessorFactory) -> Result<()> {
        let key = key.into();
        self.check(&key, &factory)?;
        self.entries.entry(key).or_insert(factory);
        Ok(())
    }

    /// Register every statistic of `catalog` plus its subsystem sentinel.
    /// Nothing is registered if any key collides.
    ///
    /// Installing a second catalog for an already installed subsystem also
    /// collides: keys are tied to one catalog instance, so a rebuilt catalog
    /// is never silently swapped in or dropped.
    pub fn install(&mut self, catalog: Catalog) -> Result<()> {
        let factory = ProcessorFactory::new(Arc::new(catalog));
        let subsystem = factory.subsystem().to_string();

        let mut keys: Vec<String> = factory.catalog().stat_names().map(str::to_string).collect();
        keys.push(Self::sentinel_key(&subsystem));

        for key in &keys {
            self.check(key, &factory)?;
        }
        for key in keys {
            self.entries.entry(key).or_insert_with(|| factory.clone());
        }

        tracing::info!(
            subsystem = %subsystem,
            statistics = factory.catalog().len(),
            descriptors = factory.catalog().descriptors().count(),
            "processor registered"
        );
        Ok(())
    }

    fn check(&self, key: &str, factory: &ProcessorFactory) -> Result<()> {
        if let Some(subsystem) = key.strip_suffix(':') {
            if subsystem != factory.subsystem() {
                return Err(SipStatError::InvalidCatalog(format!(
                    "sentinel key {key:?} cannot resolve to subsystem {:?}",
                    factory.subsystem()
                )));
            }
        }
        match self.entries.get(key) {
            Some(existing) if !existing.same_as(factory) => Err(SipStatError::DuplicateKey {
                key: key.to_string(),
                existing: existing.subsystem().to_string(),
                incoming: factory.subsystem().to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Factory bound to a statistic name or sentinel key.
    pub fn lookup(&self, key: &str) -> Option<&ProcessorFactory> {
        self.entries.get(key)
    }

    /// Registered subsystems, sorted.
    pub fn subsystems(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .entries
            .iter()
            .filter(|(k, f)| k.strip_suffix(':') == Some(f.subsystem()))
            .map(|(_, f)| f.subsystem())
            .collect();
        out.sort_unstable();
        out
    }

    /// One processor per registered subsystem present in `snapshot`, ordered
    /// by subsystem name.
    pub fn resolve<'s>(&self, snapshot: &'s Snapshot) -> Vec<Processor<'s>> {
        let mut out = Vec::new();
        for subsystem in snapshot.subsystems() {
            match self.entries.get(&Self::sentinel_key(subsystem)) {
                Some(factory) => out.push(factory.build(snapshot)),
                None => tracing::debug!(subsystem = %subsystem, "no processor for subsystem"),
            }
        }
        out
    }

    /// Registry containing the built-in subsystems.
    pub fn with_defaults(namespace: &str) -> Result<Self> {
        let mut registry = Self::new();
        crate::subsystems::install_defaults(&mut registry, namespace)?;
        Ok(registry)
    }
}
