//! Raw statistics as delivered by the proxy's management interface.
//!
//! Two dump formats are accepted:
//! - text: one `subsystem:name:: value` (or `subsystem:name = value`) per line.
//! - json: a flat object `{"subsystem:name": value, ...}`.
//!
//! Parsing is lenient per statistic: a malformed line or a non-numeric value
//! is skipped (and logged) instead of failing the whole snapshot.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::error::{Result, SipStatError};

/// One statistic value as reported by the proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStatistic {
    pub subsystem: String,
    pub name: String,
    pub value: f64,
}

impl RawStatistic {
    pub fn new(subsystem: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            subsystem: subsystem.into(),
            name: name.into(),
            value,
        }
    }

    /// `subsystem:name`.
    pub fn full_name(&self) -> String {
        format!("{}:{}", self.subsystem, self.name)
    }

    /// Split a `subsystem:name` full name. The name itself may contain `:`.
    pub fn from_full_name(full: &str, value: f64) -> Option<Self> {
        let (subsystem, name) = full.split_once(':')?;
        if subsystem.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(subsystem, name, value))
    }
}

/// All statistics of one scrape, keyed by full name. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    stats: HashMap<String, RawStatistic>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text dump format.
    pub fn from_text(s: &str) -> Self {
        let mut stats = Vec::new();
        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(stat) => stats.push(stat),
                None => tracing::warn!(
                    line = lineno + 1,
                    content = %line,
                    "skipping malformed statistic line"
                ),
            }
        }
        stats.into_iter().collect()
    }

    /// Parse the json dump format.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(s)
            .map_err(|e| SipStatError::Source(format!("invalid statistics json: {e}")))?;
        let obj = doc
            .as_object()
            .ok_or_else(|| SipStatError::Source("statistics json must be an object".into()))?;

        let mut stats = Vec::with_capacity(obj.len());
        for (full, v) in obj {
            let stat = v
                .as_f64()
                .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
                .and_then(|value| RawStatistic::from_full_name(full, value));
            match stat {
                Some(stat) => stats.push(stat),
                None => tracing::warn!(statistic = %full, "skipping non-numeric statistic"),
            }
        }
        Ok(stats.into_iter().collect())
    }

    pub fn insert(&mut self, stat: RawStatistic) {
        self.stats.insert(stat.full_name(), stat);
    }

    pub fn get(&self, full_name: &str) -> Option<&RawStatistic> {
        self.stats.get(full_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawStatistic> + '_ {
        self.stats.values()
    }

    /// Distinct subsystems present, sorted.
    pub fn subsystems(&self) -> BTreeSet<&str> {
        self.stats.values().map(|s| s.subsystem.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl FromIterator<RawStatistic> for Snapshot {
    fn from_iter<I: IntoIterator<Item = RawStatistic>>(iter: I) -> Self {
        let mut snap = Snapshot::new();
        for stat in iter {
            snap.insert(stat);
        }
        snap
    }
}

fn parse_line(line: &str) -> Option<RawStatistic> {
    let (full, value) = line
        .rsplit_once("::")
        .or_else(|| line.rsplit_once('='))?;
    let value: f64 = value.trim().parse().ok()?;
    RawStatistic::from_full_name(full.trim(), value)
}
