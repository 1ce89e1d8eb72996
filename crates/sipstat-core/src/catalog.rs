//! Per-subsystem metric catalogs.
//!
//! A catalog maps a raw statistic name (e.g. `fwd_requests`) to the
//! descriptor it is exported under plus the literal label values attached to
//! its samples. Several statistics may share one descriptor as long as each
//! carries a distinct label-value combination (`requests{kind="forwarded"}`,
//! `requests{kind="dropped"}`, ...).
//!
//! Catalogs are validated on construction; every inconsistency is reported as
//! `SipStatError::InvalidCatalog` so it is caught before the first scrape.

use std::collections::HashMap;

use crate::descriptor::{MetricDescriptor, ValueKind};
use crate::error::{Result, SipStatError};

/// Static declaration of one exported statistic.
#[derive(Debug, Clone, Copy)]
pub struct StatSpec {
    /// Statistic name as reported by the proxy.
    pub stat: &'static str,
    /// Metric name within the subsystem.
    pub metric: &'static str,
    pub help: &'static str,
    pub kind: ValueKind,
    /// `(label name, literal value)` pairs attached to every sample.
    pub labels: &'static [(&'static str, &'static str)],
}

impl StatSpec {
    pub const fn counter(stat: &'static str, metric: &'static str, help: &'static str) -> Self {
        Self {
            stat,
            metric,
            help,
            kind: ValueKind::Counter,
            labels: &[],
        }
    }

    pub const fn gauge(stat: &'static str, metric: &'static str, help: &'static str) -> Self {
        Self {
            stat,
            metric,
            help,
            kind: ValueKind::Gauge,
            labels: &[],
        }
    }

    /// Attach literal labels, making this statistic one member of a group.
    pub const fn labeled(self, labels: &'static [(&'static str, &'static str)]) -> Self {
        Self { labels, ..self }
    }
}

#[derive(Debug)]
struct CatalogEntry {
    descriptor: usize,
    label_values: Vec<String>,
}

/// Immutable statistic -> descriptor table for one subsystem.
#[derive(Debug)]
pub struct Catalog {
    subsystem: String,
    descriptors: Vec<MetricDescriptor>,
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Build and validate a catalog from its static declarations.
    pub fn new(namespace: &str, subsystem: &str, specs: &[StatSpec]) -> Result<Self> {
        if subsystem.is_empty() || subsystem.contains(':') {
            return Err(SipStatError::InvalidCatalog(format!(
                "invalid subsystem name: {subsystem:?}"
            )));
        }

        let mut descriptors: Vec<MetricDescriptor> = Vec::new();
        let mut entries: HashMap<String, CatalogEntry> = HashMap::with_capacity(specs.len());

        for spec in specs {
            if spec.stat.is_empty() {
                return Err(SipStatError::InvalidCatalog(format!(
                    "{subsystem}: empty statistic name"
                )));
            }
            if entries.contains_key(spec.stat) {
                return Err(SipStatError::InvalidCatalog(format!(
                    "{subsystem}:{} declared twice",
                    spec.stat
                )));
            }
            if !is_metric_name(spec.metric) {
                return Err(SipStatError::InvalidCatalog(format!(
                    "{subsystem}:{}: invalid metric name {:?}",
                    spec.stat, spec.metric
                )));
            }

            let label_names: Vec<String> =
                spec.labels.iter().map(|(n, _)| n.to_string()).collect();
            let label_values: Vec<String> =
                spec.labels.iter().map(|(_, v)| v.to_string()).collect();
            if let Some(bad) = label_names.iter().find(|n| !is_label_name(n)) {
                return Err(SipStatError::InvalidCatalog(format!(
                    "{subsystem}:{}: invalid label name {bad:?}",
                    spec.stat
                )));
            }

            let existing = descriptors.iter().position(|d| d.name() == spec.metric);
            let descriptor = match existing {
                Some(idx) => {
                    let d = &descriptors[idx];
                    if d.help() != spec.help
                        || d.kind() != spec.kind
                        || d.label_names() != label_names.as_slice()
                    {
                        return Err(SipStatError::InvalidCatalog(format!(
                            "{subsystem}:{}: conflicting declaration of metric {}",
                            spec.stat,
                            d.fq_name()
                        )));
                    }
                    let taken = entries
                        .values()
                        .any(|e| e.descriptor == idx && e.label_values == label_values);
                    if taken {
                        return Err(SipStatError::InvalidCatalog(format!(
                            "{subsystem}:{}: label values {label_values:?} already used by metric {}",
                            spec.stat,
                            d.fq_name()
                        )));
                    }
                    idx
                }
                None => {
                    descriptors.push(MetricDescriptor::new(
                        namespace,
                        subsystem,
                        spec.metric,
                        spec.help,
                        label_names,
                        spec.kind,
                    ));
                    descriptors.len() - 1
                }
            };

            entries.insert(
                spec.stat.to_string(),
                CatalogEntry {
                    descriptor,
                    label_values,
                },
            );
        }

        Ok(Self {
            subsystem: subsystem.to_string(),
            descriptors,
            entries,
        })
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// Distinct descriptors, in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &MetricDescriptor> + '_ {
        self.descriptors.iter()
    }

    /// Descriptor and literal label values for a statistic name.
    pub fn lookup(&self, stat: &str) -> Option<(&MetricDescriptor, &[String])> {
        self.entries
            .get(stat)
            .map(|e| (&self.descriptors[e.descriptor], e.label_values.as_slice()))
    }

    /// Statistic names this catalog recognizes.
    pub fn stat_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Number of recognized statistics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_metric_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_label_name(s: &str) -> bool {
    is_metric_name(s) && !s.starts_with("__")
}
