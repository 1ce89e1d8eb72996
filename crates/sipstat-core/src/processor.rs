//! Per-scrape processors implementing the two-phase collector contract.
//!
//! A `Processor` pairs one subsystem catalog with one snapshot. `describe`
//! always yields the full descriptor set of the catalog; `collect` yields a
//! sample for each snapshot statistic that belongs to the subsystem and is
//! known to the catalog. Everything else is skipped.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::descriptor::{MetricDescriptor, Sample};
use crate::statistic::Snapshot;

/// Two-phase collector: declare descriptors, then emit samples.
pub trait Collector: Send + Sync {
    fn describe(&self) -> Box<dyn Iterator<Item = &MetricDescriptor> + '_>;
    fn collect(&self) -> Box<dyn Iterator<Item = Sample<'_>> + '_>;
}

/// Processor for one subsystem, bound to one snapshot.
#[derive(Debug, Clone)]
pub struct Processor<'s> {
    catalog: Arc<Catalog>,
    snapshot: &'s Snapshot,
}

impl<'s> Processor<'s> {
    pub fn new(catalog: Arc<Catalog>, snapshot: &'s Snapshot) -> Self {
        Self { catalog, snapshot }
    }

    pub fn subsystem(&self) -> &str {
        self.catalog.subsystem()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All descriptors of the catalog, independent of the snapshot contents.
    pub fn descriptors(&self) -> impl Iterator<Item = &MetricDescriptor> + '_ {
        self.catalog.descriptors()
    }

    /// Samples for the statistics this processor recognizes.
    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> + '_ {
        let catalog = &*self.catalog;
        self.snapshot
            .iter()
            .filter(move |s| s.subsystem == catalog.subsystem())
            .filter_map(move |s| {
                let (desc, labels) = catalog.lookup(&s.name)?;
                Some(Sample::new(desc, s.value, labels))
            })
    }
}

impl Collector for Processor<'_> {
    fn describe(&self) -> Box<dyn Iterator<Item = &MetricDescriptor> + '_> {
        Box::new(self.descriptors())
    }

    fn collect(&self) -> Box<dyn Iterator<Item = Sample<'_>> + '_> {
        Box::new(self.samples())
    }
}

/// Builds processors for one subsystem. Cheap to clone; shares the catalog.
#[derive(Debug, Clone)]
pub struct ProcessorFactory {
    catalog: Arc<Catalog>,
}

impl ProcessorFactory {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn subsystem(&self) -> &str {
        self.catalog.subsystem()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn build<'s>(&self, snapshot: &'s Snapshot) -> Processor<'s> {
        Processor::new(Arc::clone(&self.catalog), snapshot)
    }

    /// Whether both factories build processors over the same catalog.
    pub fn same_as(&self, other: &ProcessorFactory) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog)
    }
}
