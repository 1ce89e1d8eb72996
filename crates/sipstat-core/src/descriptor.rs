//! Metric descriptors and the samples emitted against them.

use std::fmt;

/// How a metric's value behaves over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Monotonic total maintained by the proxy.
    Counter,
    /// Point-in-time value that can go up and down.
    Gauge,
}

impl ValueKind {
    /// Type name used in the text exposition format.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Counter => "counter",
            ValueKind::Gauge => "gauge",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable metric metadata. Built once when a catalog is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDescriptor {
    subsystem: String,
    name: String,
    fq_name: String,
    help: String,
    label_names: Vec<String>,
    kind: ValueKind,
}

impl MetricDescriptor {
    pub fn new(
        namespace: &str,
        subsystem: &str,
        name: &str,
        help: &str,
        label_names: Vec<String>,
        kind: ValueKind,
    ) -> Self {
        Self {
            subsystem: subsystem.to_string(),
            name: name.to_string(),
            fq_name: fq_name(namespace, subsystem, name),
            help: help.to_string(),
            label_names,
            kind,
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// Metric name within its subsystem (e.g. `requests_total`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified name: `<namespace>_<subsystem>_<name>`.
    pub fn fq_name(&self) -> &str {
        &self.fq_name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Label names, in the order label values must be supplied.
    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Join the non-empty name parts with `_`.
fn fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    [namespace, subsystem, name]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

/// One observation for a single scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<'a> {
    desc: &'a MetricDescriptor,
    value: f64,
    label_values: &'a [String],
}

impl<'a> Sample<'a> {
    /// Bind a value to its descriptor.
    ///
    /// Panics when the number of label values differs from the descriptor's
    /// label names: that can only come from an inconsistent catalog.
    pub fn new(desc: &'a MetricDescriptor, value: f64, label_values: &'a [String]) -> Self {
        assert_eq!(
            desc.label_names().len(),
            label_values.len(),
            "label cardinality mismatch for {}",
            desc.fq_name()
        );
        Self {
            desc,
            value,
            label_values,
        }
    }

    pub fn desc(&self) -> &'a MetricDescriptor {
        self.desc
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn label_values(&self) -> &'a [String] {
        self.label_values
    }

    /// `(name, value)` label pairs in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.desc
            .label_names()
            .iter()
            .map(String::as_str)
            .zip(self.label_values.iter().map(String::as_str))
    }
}
